//! Script normalization.
//!
//! Collapses the loose shapes a `CardScript` allows into the fixed shapes of
//! a `BehaviorBundle`:
//!
//! | slot kind | absent | single      | sequence |
//! |-----------|--------|-------------|----------|
//! | action    | `[]`   | `[a]`       | as-is    |
//! | event     | `[]`   | `[h]`       | as-is    |
//! | eval      | `None` | `Some(e)`   | rejected |
//!
//! Bare actions declared in an event slot become `EventHook::Action`.
//! Any other shape mismatch is a `MalformedScript` error.

use crate::cards::CardKey;
use crate::core::{RegistryError, Result};
use crate::effects::Evaluator;
use crate::triggers::EventHook;

use super::bundle::{ActionList, BehaviorBundle};
use super::script::{CardScript, ScriptValue};
use super::slots::{ActionSlot, EvalSlot, EventSlot};

/// Build the bundle for `id` from its script, if any.
///
/// A missing script yields an empty bundle.
pub fn normalize(id: &CardKey, script: Option<&CardScript>) -> Result<BehaviorBundle> {
    let mut bundle = BehaviorBundle::empty();
    let Some(script) = script else {
        return Ok(bundle);
    };

    for slot in ActionSlot::ALL {
        *bundle.actions_mut(slot) = normalize_actions(id, slot, script.slot(slot))?;
    }
    for slot in EventSlot::ALL {
        *bundle.hooks_mut(slot) = normalize_hooks(id, slot, script.slot(slot))?;
    }
    for slot in EvalSlot::ALL {
        *bundle.eval_mut(slot) = normalize_eval(id, slot, script.slot(slot))?;
    }

    for name in script.unknown_members() {
        tracing::debug!(card = %id, member = name, "ignoring non-slot script member");
    }

    Ok(bundle)
}

fn normalize_actions(
    id: &CardKey,
    slot: ActionSlot,
    value: Option<&ScriptValue>,
) -> Result<ActionList> {
    match value {
        None => Ok(ActionList::new()),
        Some(ScriptValue::Action(action)) => Ok(smallvec::smallvec![action.clone()]),
        Some(ScriptValue::Actions(actions)) => Ok(actions.iter().cloned().collect()),
        Some(other) => Err(malformed(id, slot.as_str(), other)),
    }
}

fn normalize_hooks(
    id: &CardKey,
    slot: EventSlot,
    value: Option<&ScriptValue>,
) -> Result<Vec<EventHook>> {
    match value {
        None => Ok(Vec::new()),
        Some(ScriptValue::Hook(hook)) => Ok(vec![hook.clone()]),
        Some(ScriptValue::Hooks(hooks)) => Ok(hooks.clone()),
        Some(ScriptValue::Action(action)) => Ok(vec![EventHook::Action(action.clone())]),
        Some(ScriptValue::Actions(actions)) => {
            Ok(actions.iter().cloned().map(EventHook::Action).collect())
        }
        Some(other) => Err(malformed(id, slot.as_str(), other)),
    }
}

fn normalize_eval(
    id: &CardKey,
    slot: EvalSlot,
    value: Option<&ScriptValue>,
) -> Result<Option<Evaluator>> {
    match value {
        None => Ok(None),
        Some(ScriptValue::Eval(eval)) => Ok(Some(eval.clone())),
        Some(other) => Err(malformed(id, slot.as_str(), other)),
    }
}

fn malformed(id: &CardKey, slot: &'static str, value: &ScriptValue) -> RegistryError {
    RegistryError::MalformedScript {
        id: id.clone(),
        slot,
        found: value.shape(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Action, Effect, Target};
    use crate::triggers::{EventListener, GameEventKind};

    fn key() -> CardKey {
        CardKey::new("TEST_01")
    }

    #[test]
    fn test_missing_script_is_empty_bundle() {
        let bundle = normalize(&key(), None).unwrap();
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_single_action_is_wrapped() {
        let script = CardScript::new().action(ActionSlot::Play, Effect::draw(2));
        let bundle = normalize(&key(), Some(&script)).unwrap();

        assert_eq!(bundle.play.as_slice(), &[Action::Effect(Effect::draw(2))]);
        assert!(bundle.deathrattle.is_empty());
    }

    #[test]
    fn test_sequence_is_kept_in_order() {
        let script = CardScript::new().actions(
            ActionSlot::Deathrattle,
            [Effect::hit(Target::AllMinions, 2), Effect::draw(1)],
        );
        let bundle = normalize(&key(), Some(&script)).unwrap();

        assert_eq!(
            bundle.deathrattle.as_slice(),
            &[
                Action::Effect(Effect::hit(Target::AllMinions, 2)),
                Action::Effect(Effect::draw(1)),
            ]
        );
    }

    #[test]
    fn test_script_callable_kept_as_single_action() {
        let action = Action::script(|ctx| vec![Effect::draw(ctx.get_int("combo", 0) as usize)]);
        let script = CardScript::new().action(ActionSlot::Combo, action.clone());
        let bundle = normalize(&key(), Some(&script)).unwrap();

        assert_eq!(bundle.combo.as_slice(), &[action]);
    }

    #[test]
    fn test_event_slots() {
        let listener = EventListener::new(GameEventKind::TurnEnd).then(Effect::draw(1));
        let aura = Action::from(Effect::buff(Target::SelfCard, 3, 0));
        let script = CardScript::new()
            .hook(EventSlot::Events, listener.clone())
            .with(EventSlot::Enrage.as_str(), aura.clone());
        let bundle = normalize(&key(), Some(&script)).unwrap();

        assert_eq!(bundle.events, vec![EventHook::Listener(listener)]);
        assert_eq!(bundle.enrage, vec![EventHook::Action(aura)]);
        assert!(bundle.update.is_empty());
        assert!(bundle.in_hand.is_empty());
    }

    #[test]
    fn test_eval_slot() {
        let eval = Evaluator::constant(-2);
        let script = CardScript::new().eval(EvalSlot::CostMod, eval.clone());
        let bundle = normalize(&key(), Some(&script)).unwrap();

        assert_eq!(bundle.cost_mod, Some(eval));
        assert_eq!(bundle.powered_up, None);
    }

    #[test]
    fn test_non_evaluator_in_eval_slot_is_rejected() {
        let script = CardScript::new().with("powered_up", Action::from(Effect::draw(1)));
        let err = normalize(&key(), Some(&script)).unwrap_err();

        match err {
            RegistryError::MalformedScript { id, slot, found } => {
                assert_eq!(id, "TEST_01");
                assert_eq!(slot, "powered_up");
                assert_eq!(found, "an action");
            }
            other => panic!("Expected MalformedScript, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluator_in_action_slot_is_rejected() {
        let script = CardScript::new().with("play", Evaluator::constant(1));
        assert!(matches!(
            normalize(&key(), Some(&script)),
            Err(RegistryError::MalformedScript { slot: "play", .. })
        ));
    }

    #[test]
    fn test_unknown_members_are_ignored() {
        let script = CardScript::new().with("battlecry", Action::from(Effect::draw(1)));
        let bundle = normalize(&key(), Some(&script)).unwrap();
        assert!(bundle.is_empty());
    }
}
