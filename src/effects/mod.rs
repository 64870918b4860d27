//! Effect vocabulary for card scripts.
//!
//! - `Effect`: Atomic, serializable game actions
//! - `Target`: Who an effect applies to
//! - `Action`: A fixed effect or a closure computing effects
//! - `Evaluator`: A closure answering one numeric question
//!
//! The registry stores these values; it never resolves them against game
//! state.

mod action;
mod effect;

pub use action::{Action, Evaluator, ScriptContext, ScriptFn};
pub use effect::{Effect, Target};
