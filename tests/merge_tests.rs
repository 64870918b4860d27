//! Merge integration tests.
//!
//! Property tests over generated card pools: every merged card ends up with
//! fully shaped slots, and poison is derived exactly when the record says so.

use proptest::prelude::*;

use card_registry::cards::{CardAttributes, CardRegistry, CardType, StaticSource};
use card_registry::effects::{Effect, Evaluator, ScriptContext, Target};
use card_registry::scripts::{ActionSlot, CardScript, EvalSlot, EventSlot, ScriptLibrary, ScriptSet};
use card_registry::triggers::{EventHook, EventListener, GameEventKind, POISONOUS};

/// What one generated card declares.
#[derive(Clone, Debug)]
struct CardPlan {
    card_type: CardType,
    poisonous: bool,
    scripted: bool,
    play_count: usize,
    declares_poison: bool,
    extra_hook: bool,
    cost_mod: Option<i64>,
}

fn arb_card_type() -> impl Strategy<Value = CardType> {
    prop_oneof![
        Just(CardType::Minion),
        Just(CardType::Spell),
        Just(CardType::Weapon),
        Just(CardType::Hero),
        Just(CardType::HeroPower),
        Just(CardType::Enchantment),
    ]
}

fn arb_plan() -> impl Strategy<Value = CardPlan> {
    (
        arb_card_type(),
        any::<bool>(),
        any::<bool>(),
        0..4usize,
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-3..3i64),
    )
        .prop_map(
            |(card_type, poisonous, scripted, play_count, declares_poison, extra_hook, cost_mod)| {
                CardPlan {
                    card_type,
                    poisonous,
                    scripted,
                    play_count,
                    declares_poison,
                    extra_hook,
                    cost_mod,
                }
            },
        )
}

fn record(index: usize, plan: &CardPlan) -> CardAttributes {
    let card = CardAttributes::new(format!("GEN_{index:03}"), plan.card_type).with_cost(index as i64);
    if plan.poisonous {
        card.poisonous()
    } else {
        card
    }
}

fn script(plan: &CardPlan) -> CardScript {
    let mut script = match plan.play_count {
        0 => CardScript::new(),
        1 => CardScript::new().action(ActionSlot::Play, Effect::draw(1)),
        n => CardScript::new().actions(
            ActionSlot::Play,
            (0..n).map(|i| Effect::hit(Target::Chosen, i as i64 + 1)),
        ),
    };

    let mut hooks = Vec::new();
    if plan.extra_hook {
        hooks.push(EventHook::from(
            EventListener::new(GameEventKind::TurnEnd).then(Effect::heal(Target::FriendlyHero, 2)),
        ));
    }
    if plan.declares_poison {
        hooks.push(POISONOUS);
    }
    if !hooks.is_empty() {
        script = script.hooks(EventSlot::Events, hooks);
    }

    if let Some(delta) = plan.cost_mod {
        script = script.eval(EvalSlot::CostMod, Evaluator::constant(delta));
    }
    script
}

fn build(plans: &[CardPlan]) -> CardRegistry {
    let records: Vec<_> = plans.iter().enumerate().map(|(i, p)| record(i, p)).collect();
    let set = plans
        .iter()
        .enumerate()
        .filter(|(_, plan)| plan.scripted)
        .fold(ScriptSet::new("GEN"), |set, (i, plan)| {
            set.with(format!("GEN_{i:03}"), script(plan))
        });
    CardRegistry::new(StaticSource::new(records), ScriptLibrary::new().with_set(set))
}

proptest! {
    #[test]
    fn prop_every_slot_is_shaped(plans in prop::collection::vec(arb_plan(), 0..24)) {
        let registry = build(&plans);
        prop_assert_eq!(registry.len().unwrap(), plans.len());

        for (card, plan) in registry.iter().unwrap().zip(&plans) {
            let play_count = if plan.scripted { plan.play_count } else { 0 };
            prop_assert_eq!(card.scripts.actions(ActionSlot::Play).len(), play_count);

            for slot in ActionSlot::ALL.into_iter().filter(|&s| s != ActionSlot::Play) {
                prop_assert!(card.scripts.actions(slot).is_empty());
            }
            for slot in [EventSlot::Enrage, EventSlot::InHand, EventSlot::Update] {
                prop_assert!(card.scripts.hooks(slot).is_empty());
            }

            let cost_mod = if plan.scripted { plan.cost_mod } else { None };
            prop_assert_eq!(card.scripts.eval(EvalSlot::CostMod).is_some(), cost_mod.is_some());
            prop_assert!(card.scripts.eval(EvalSlot::PoweredUp).is_none());

            let state = Default::default();
            let ctx = ScriptContext::new(&card.attributes, &state);
            prop_assert_eq!(card.scripts.cost_modifier(&ctx), cost_mod.unwrap_or(0));
        }
    }

    #[test]
    fn prop_poison_is_derived(plans in prop::collection::vec(arb_plan(), 0..24)) {
        let registry = build(&plans);

        for (card, plan) in registry.iter().unwrap().zip(&plans) {
            let markers = card.scripts.events.iter().filter(|h| **h == POISONOUS).count();
            let declared = plan.scripted && plan.declares_poison;

            if plan.poisonous {
                prop_assert_eq!(markers, 1);
            } else {
                prop_assert_eq!(markers, usize::from(declared));
            }

            let listeners = usize::from(plan.scripted && plan.extra_hook);
            prop_assert_eq!(card.scripts.events.len(), listeners + markers);
        }
    }
}

#[test]
fn test_poison_lands_after_declared_events() {
    let plan = CardPlan {
        card_type: CardType::Minion,
        poisonous: true,
        scripted: true,
        play_count: 0,
        declares_poison: false,
        extra_hook: true,
        cost_mod: None,
    };
    let registry = build(&[plan]);
    let card = registry.get("GEN_000").unwrap();

    assert_eq!(card.scripts.events.len(), 2);
    assert!(card.scripts.events[0].listens_to(GameEventKind::TurnEnd));
    assert_eq!(card.scripts.events[1], POISONOUS);
    assert!(card.scripts.events[1].listens_to(GameEventKind::Damage));
}
