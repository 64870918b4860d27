//! Card scripts: raw constructs, normalization and derived events.
//!
//! ## Key Types
//!
//! - `CardScript`: What a card author declares, member by member
//! - `ScriptLocator`: Finds the script for a card id (`ScriptLibrary`, closures)
//! - `BehaviorBundle`: Fixed-shape, fully normalized behavior
//! - `EventDeriver`: Hooks implied by static attributes
//!
//! ## Slots
//!
//! Every bundle carries the same slots, in three categories:
//! - action slots (`play`, `deathrattle`, ...) hold ordered actions
//! - event slots (`events`, `enrage`, ...) hold appendable hook lists
//! - eval slots (`cost_mod`, `powered_up`) hold one evaluator or nothing

mod bundle;
mod deriver;
mod normalize;
mod script;
mod slots;

pub use bundle::{ActionList, BehaviorBundle};
pub use deriver::{derive_poisonous, DeriveRule, EventDeriver};
pub use normalize::normalize;
pub use script::{CardScript, NoScripts, ScriptLibrary, ScriptLocator, ScriptSet, ScriptValue};
pub use slots::{ActionSlot, EvalSlot, EventSlot, Slot};
