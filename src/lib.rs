//! # card-registry
//!
//! Card definition registry for a collectible card game engine.
//!
//! Static card records come from a data source (a JSON card definition file
//! or a bincode snapshot). Behavior comes from card scripts. The registry
//! merges the two once, on first access, into `MergedCard`s whose behavior
//! slots all have a fixed shape, so the rest of the engine never has to
//! check what a script declared.
//!
//! ## Design Principles
//!
//! 1. **Lazy, one-shot load**: Nothing is read until the first lookup.
//!    Concurrent first lookups trigger a single load.
//!
//! 2. **Normalized behavior**: Action slots are always sequences, event
//!    slots are always hook lists, eval slots are always optional.
//!
//! 3. **Derived events**: Static keywords imply hooks. A poisonous card
//!    always carries the poison rule in its `events` slot.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `cards`: Card records, sources, merging, queries and the registry
//! - `scripts`: Card scripts, slots, normalization and event derivation
//! - `effects`: Effects, targets, actions and evaluators
//! - `triggers`: Game events and event hooks

pub mod core;
pub mod cards;
pub mod scripts;
pub mod effects;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{RegistryConfig, RegistryError, Result, SourceFormat};

pub use crate::cards::{
    AttributeKey, AttributeValue, Attributes,
    CardAttributes, CardClass, CardKey, CardType, Race, Rarity,
    CardDefsFile, CardRegistry, CardSource, MergedCard, Predicate, Query, RegistryState,
    StaticSource,
};

pub use crate::scripts::{
    BehaviorBundle, CardScript, EventDeriver, NoScripts, ScriptLibrary, ScriptLocator, ScriptSet,
    ScriptValue, Slot,
};

pub use crate::effects::{Action, Effect, Evaluator, ScriptContext, Target};

pub use crate::triggers::{EventHook, EventListener, GameEventKind, Rule, POISONOUS};
