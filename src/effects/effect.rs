//! Effect definitions.
//!
//! Effects are atomic game actions that card scripts declare.
//! The registry only stores them; the rules engine resolves them
//! against live game state.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, CardKey};

/// Who an effect applies to.
///
/// Selectors are relative to the card carrying the script and, for event
/// hooks, to the event that fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The card carrying the script.
    SelfCard,
    /// The target chosen when the card was played.
    Chosen,
    FriendlyHero,
    EnemyHero,
    FriendlyMinions,
    EnemyMinions,
    AllMinions,
    /// The entity that caused the triggering event.
    EventSource,
    /// The entity affected by the triggering event.
    EventTarget,
}

/// An atomic game effect.
///
/// ## Combat
///
/// - `Hit`: Deal damage
/// - `Heal`: Restore health
/// - `Destroy`: Destroy outright
///
/// ## Card flow
///
/// - `Draw`: Draw cards for the controller
/// - `Summon`: Put a copy of a card onto the board
///
/// ## State
///
/// - `Buff`: Add attack/health
/// - `SetTag`: Set a numeric tag on the target
///
/// ## Composite
///
/// - `Batch`: Execute multiple effects in sequence
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Hit {
        target: Target,
        amount: i64,
    },

    Heal {
        target: Target,
        amount: i64,
    },

    Destroy {
        target: Target,
    },

    Draw {
        count: usize,
    },

    Summon {
        card: CardKey,
    },

    Buff {
        target: Target,
        attack: i64,
        health: i64,
    },

    SetTag {
        target: Target,
        tag: AttributeKey,
        value: i64,
    },

    /// Execute multiple effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a damage effect.
    pub fn hit(target: Target, amount: i64) -> Self {
        Self::Hit { target, amount }
    }

    /// Create a heal effect.
    pub fn heal(target: Target, amount: i64) -> Self {
        Self::Heal { target, amount }
    }

    /// Create a destroy effect.
    pub fn destroy(target: Target) -> Self {
        Self::Destroy { target }
    }

    /// Create a draw cards effect.
    pub fn draw(count: usize) -> Self {
        Self::Draw { count }
    }

    /// Create a summon effect.
    pub fn summon(card: impl Into<CardKey>) -> Self {
        Self::Summon { card: card.into() }
    }

    /// Create a stat buff effect.
    pub fn buff(target: Target, attack: i64, health: i64) -> Self {
        Self::Buff {
            target,
            attack,
            health,
        }
    }

    /// Create a set tag effect.
    pub fn set_tag(target: Target, tag: impl Into<AttributeKey>, value: i64) -> Self {
        Self::SetTag {
            target,
            tag: tag.into(),
            value,
        }
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }

    /// Flatten nested batches into a plain sequence.
    #[must_use]
    pub fn flatten(self) -> Vec<Effect> {
        match self {
            Effect::Batch(effects) => effects.into_iter().flat_map(Effect::flatten).collect(),
            other => vec![other],
        }
    }
}
