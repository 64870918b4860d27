//! Game event kinds.
//!
//! Event hooks name the kind of event they listen for. The registry does not
//! fire events; the rules engine matches fired events against these kinds.

use serde::{Deserialize, Serialize};

/// Kind of game event a listener reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEventKind {
    Attack,
    /// Damage was dealt. Source is the damage dealer, target the damaged entity.
    Damage,
    Heal,
    Death,
    Draw,
    Play,
    Summon,
    TurnBegin,
    TurnEnd,
}

impl std::fmt::Display for GameEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
