//! Normalized behavior bundle.
//!
//! Every card owns exactly one `BehaviorBundle`, with every slot present and
//! well-shaped. Consumers read slots without presence checks.

use smallvec::SmallVec;

use crate::effects::{Action, Evaluator, ScriptContext};
use crate::triggers::EventHook;

use super::slots::{ActionSlot, EvalSlot, EventSlot};

/// Actions of one action slot. Most cards declare zero or one.
pub type ActionList = SmallVec<[Action; 2]>;

/// Fixed-shape behavior of a card.
///
/// - Action slots: ordered actions, empty when undeclared.
/// - Event slots: appendable hook lists, empty when undeclared.
/// - Eval slots: exactly one evaluator, or `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BehaviorBundle {
    pub activate: ActionList,
    pub combo: ActionList,
    pub deathrattle: ActionList,
    pub draw: ActionList,
    pub inspire: ActionList,
    pub play: ActionList,

    pub enrage: Vec<EventHook>,
    pub events: Vec<EventHook>,
    pub in_hand: Vec<EventHook>,
    pub update: Vec<EventHook>,

    pub cost_mod: Option<Evaluator>,
    pub powered_up: Option<Evaluator>,
}

impl BehaviorBundle {
    /// A bundle with every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Actions in a slot.
    #[must_use]
    pub fn actions(&self, slot: ActionSlot) -> &[Action] {
        match slot {
            ActionSlot::Activate => self.activate.as_slice(),
            ActionSlot::Combo => self.combo.as_slice(),
            ActionSlot::Deathrattle => self.deathrattle.as_slice(),
            ActionSlot::Draw => self.draw.as_slice(),
            ActionSlot::Inspire => self.inspire.as_slice(),
            ActionSlot::Play => self.play.as_slice(),
        }
    }

    pub(crate) fn actions_mut(&mut self, slot: ActionSlot) -> &mut ActionList {
        match slot {
            ActionSlot::Activate => &mut self.activate,
            ActionSlot::Combo => &mut self.combo,
            ActionSlot::Deathrattle => &mut self.deathrattle,
            ActionSlot::Draw => &mut self.draw,
            ActionSlot::Inspire => &mut self.inspire,
            ActionSlot::Play => &mut self.play,
        }
    }

    /// Hooks in a slot.
    #[must_use]
    pub fn hooks(&self, slot: EventSlot) -> &[EventHook] {
        match slot {
            EventSlot::Enrage => self.enrage.as_slice(),
            EventSlot::Events => self.events.as_slice(),
            EventSlot::InHand => self.in_hand.as_slice(),
            EventSlot::Update => self.update.as_slice(),
        }
    }

    /// Mutable hook list of a slot, for derived events.
    pub fn hooks_mut(&mut self, slot: EventSlot) -> &mut Vec<EventHook> {
        match slot {
            EventSlot::Enrage => &mut self.enrage,
            EventSlot::Events => &mut self.events,
            EventSlot::InHand => &mut self.in_hand,
            EventSlot::Update => &mut self.update,
        }
    }

    /// Evaluator of a slot.
    #[must_use]
    pub fn eval(&self, slot: EvalSlot) -> Option<&Evaluator> {
        match slot {
            EvalSlot::CostMod => self.cost_mod.as_ref(),
            EvalSlot::PoweredUp => self.powered_up.as_ref(),
        }
    }

    pub(crate) fn eval_mut(&mut self, slot: EvalSlot) -> &mut Option<Evaluator> {
        match slot {
            EvalSlot::CostMod => &mut self.cost_mod,
            EvalSlot::PoweredUp => &mut self.powered_up,
        }
    }

    /// Cost adjustment in `ctx`; zero without a `cost_mod` evaluator.
    #[must_use]
    pub fn cost_modifier(&self, ctx: &ScriptContext<'_>) -> i64 {
        self.cost_mod.as_ref().map_or(0, |eval| eval.eval(ctx))
    }

    /// Whether the card's conditional bonus is active in `ctx`.
    #[must_use]
    pub fn is_powered_up(&self, ctx: &ScriptContext<'_>) -> bool {
        self.powered_up
            .as_ref()
            .is_some_and(|eval| eval.eval(ctx) != 0)
    }

    /// True when no slot holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ActionSlot::ALL.iter().all(|&s| self.actions(s).is_empty())
            && EventSlot::ALL.iter().all(|&s| self.hooks(s).is_empty())
            && EvalSlot::ALL.iter().all(|&s| self.eval(s).is_none())
    }
}
