//! The fixed set of behavior slots every card carries.

use serde::{Deserialize, Serialize};

/// Slots holding actions run when the card does something.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSlot {
    /// Hero power / activated ability.
    Activate,
    Combo,
    Deathrattle,
    /// Card drawn.
    Draw,
    Inspire,
    /// Battlecry / spell text.
    Play,
}

impl ActionSlot {
    pub const ALL: [ActionSlot; 6] = [
        ActionSlot::Activate,
        ActionSlot::Combo,
        ActionSlot::Deathrattle,
        ActionSlot::Draw,
        ActionSlot::Inspire,
        ActionSlot::Play,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionSlot::Activate => "activate",
            ActionSlot::Combo => "combo",
            ActionSlot::Deathrattle => "deathrattle",
            ActionSlot::Draw => "draw",
            ActionSlot::Inspire => "inspire",
            ActionSlot::Play => "play",
        }
    }
}

/// Slots holding hooks that react to game state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSlot {
    Enrage,
    /// Generic event listeners; derived rules land here.
    Events,
    InHand,
    Update,
}

impl EventSlot {
    pub const ALL: [EventSlot; 4] = [
        EventSlot::Enrage,
        EventSlot::Events,
        EventSlot::InHand,
        EventSlot::Update,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventSlot::Enrage => "enrage",
            EventSlot::Events => "events",
            EventSlot::InHand => "in_hand",
            EventSlot::Update => "update",
        }
    }
}

/// Slots holding at most one evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalSlot {
    /// Adjustment added to the card's cost.
    CostMod,
    /// Non-zero when the card's conditional bonus is active.
    PoweredUp,
}

impl EvalSlot {
    pub const ALL: [EvalSlot; 2] = [EvalSlot::CostMod, EvalSlot::PoweredUp];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EvalSlot::CostMod => "cost_mod",
            EvalSlot::PoweredUp => "powered_up",
        }
    }
}

/// Any behavior slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Action(ActionSlot),
    Event(EventSlot),
    Eval(EvalSlot),
}

impl Slot {
    /// Resolve a slot by name. Unknown names are not slots.
    #[must_use]
    pub fn parse(name: &str) -> Option<Slot> {
        let action = ActionSlot::ALL.into_iter().find(|s| s.as_str() == name);
        if let Some(slot) = action {
            return Some(Slot::Action(slot));
        }
        let event = EventSlot::ALL.into_iter().find(|s| s.as_str() == name);
        if let Some(slot) = event {
            return Some(Slot::Event(slot));
        }
        EvalSlot::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .map(Slot::Eval)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Slot::Action(slot) => slot.as_str(),
            Slot::Event(slot) => slot.as_str(),
            Slot::Eval(slot) => slot.as_str(),
        }
    }
}

impl From<ActionSlot> for Slot {
    fn from(slot: ActionSlot) -> Self {
        Slot::Action(slot)
    }
}

impl From<EventSlot> for Slot {
    fn from(slot: EventSlot) -> Self {
        Slot::Event(slot)
    }
}

impl From<EvalSlot> for Slot {
    fn from(slot: EvalSlot) -> Self {
        Slot::Eval(slot)
    }
}
