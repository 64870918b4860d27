//! Card system: static definitions, sources, merging and the registry.
//!
//! ## Key Types
//!
//! - `CardKey`: Card identifier (e.g. `"CS2_231"`)
//! - `CardAttributes`: Static card data from the data source
//! - `CardSource`: Supplies raw records (`CardDefsFile`, `StaticSource`)
//! - `MergedCard`: Attributes plus normalized behavior
//! - `Query`: Attribute predicates for `CardRegistry::filter`
//! - `CardRegistry`: Lazily loaded lookup of merged cards

pub mod attributes;
pub mod definition;
pub mod merge;
pub mod query;
pub mod registry;
pub mod source;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use definition::{CardAttributes, CardClass, CardKey, CardType, Race, Rarity};
pub use merge::{merge, MergedCard};
pub use query::{Predicate, Query, TYPE_ATTR};
pub use registry::{CardRegistry, RegistryState};
pub use source::{bootstrap, write_snapshot, CardDefsFile, CardSource, StaticSource};
