//! Event hooks for scripted and derived behavior.
//!
//! ## Key Components
//!
//! - [`GameEventKind`]: Kind of event a hook reacts to
//! - [`EventListener`]: Script-declared reaction to an event
//! - [`Rule`]: Built-in behavior attached from static attributes
//! - [`EventHook`]: One entry in an event slot
//! - [`POISONOUS`]: Marker the registry adds to poisonous cards

mod event;
mod hook;

pub use event::GameEventKind;
pub use hook::{EventHook, EventListener, Rule, POISONOUS};
