//! Card registry.
//!
//! The `CardRegistry` owns every merged card. It reads its data source
//! lazily: the first read (`get`, `ids`, `filter`, ...) loads and merges the
//! whole source, and every later read sees the finished table.
//!
//! ## Lifecycle
//!
//! `Uninitialized -> Initializing -> Ready`. Loading is all-or-nothing: a
//! failure leaves the registry `Uninitialized` with nothing populated, and the
//! next read tries again. Concurrent first reads block until the loading
//! caller finishes; the source is merged at most once.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;

use crate::core::{RegistryConfig, RegistryError, Result, PLAYABLE_TYPES};
use crate::scripts::{EventDeriver, ScriptLocator};

use super::definition::{CardKey, CardType};
use super::merge::{merge, MergedCard};
use super::query::Query;
use super::source::{CardDefsFile, CardSource};

/// Where a registry is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Initializing,
    Ready,
}

/// Merged cards in source order, indexed by id.
#[derive(Debug, Default)]
struct CardTable {
    cards: Vec<MergedCard>,
    index: FxHashMap<CardKey, usize>,
}

impl CardTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn push(&mut self, card: MergedCard) {
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
    }

    fn get(&self, id: &str) -> Option<&MergedCard> {
        self.index.get(id).map(|&i| &self.cards[i])
    }
}

/// Registry of merged card definitions.
///
/// ## Example
///
/// ```
/// use card_registry::cards::{CardAttributes, CardRegistry, CardType, Query, StaticSource};
/// use card_registry::scripts::NoScripts;
///
/// let registry = CardRegistry::new(
///     StaticSource::new([
///         CardAttributes::new("CS2_231", CardType::Minion).with_name("Wisp"),
///         CardAttributes::new("HERO_01", CardType::Hero),
///     ]),
///     NoScripts,
/// );
///
/// let wisp = registry.get("CS2_231").unwrap();
/// assert_eq!(wisp.name, "Wisp");
/// assert!(wisp.scripts.play.is_empty());
///
/// assert_eq!(registry.filter(&Query::new()).unwrap(), vec!["CS2_231"]);
/// ```
pub struct CardRegistry {
    source: Box<dyn CardSource>,
    locator: Box<dyn ScriptLocator>,
    deriver: EventDeriver,
    playable_types: Vec<CardType>,
    table: OnceCell<CardTable>,
    loading: AtomicBool,
}

impl CardRegistry {
    /// Create an uninitialized registry over `source`.
    pub fn new(
        source: impl CardSource + 'static,
        locator: impl ScriptLocator + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            locator: Box::new(locator),
            deriver: EventDeriver::default(),
            playable_types: PLAYABLE_TYPES.to_vec(),
            table: OnceCell::new(),
            loading: AtomicBool::new(false),
        }
    }

    /// Create a registry reading the file named in `config`.
    pub fn from_config(config: &RegistryConfig, locator: impl ScriptLocator + 'static) -> Self {
        Self::new(CardDefsFile::from_config(config), locator)
            .with_playable_types(config.playable_types.iter().copied())
    }

    /// Replace the event deriver.
    #[must_use]
    pub fn with_deriver(mut self, deriver: EventDeriver) -> Self {
        self.deriver = deriver;
        self
    }

    /// Replace the types an unconstrained query falls back to.
    #[must_use]
    pub fn with_playable_types(mut self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.playable_types = types.into_iter().collect();
        self
    }

    /// Types an unconstrained query falls back to.
    #[must_use]
    pub fn playable_types(&self) -> &[CardType] {
        &self.playable_types
    }

    /// Load and merge the data source, once.
    ///
    /// Later calls return immediately. After a failure nothing is kept and
    /// the next call retries.
    pub fn initialize(&self) -> Result<()> {
        self.table().map(|_| ())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RegistryState {
        if self.table.get().is_some() {
            RegistryState::Ready
        } else if self.loading.load(Ordering::Acquire) {
            RegistryState::Initializing
        } else {
            RegistryState::Uninitialized
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.table.get().is_some()
    }

    /// Get a merged card by id.
    pub fn get(&self, id: &str) -> Result<&MergedCard> {
        self.table()?
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(CardKey::new(id)))
    }

    /// Check if a card id is registered.
    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.table()?.contains(id))
    }

    /// Number of merged cards.
    pub fn len(&self) -> Result<usize> {
        Ok(self.table()?.cards.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.table()?.cards.is_empty())
    }

    /// Card ids in source order.
    ///
    /// The iterator is `Clone`; call again (or clone it) to restart.
    pub fn ids(&self) -> Result<impl Iterator<Item = &CardKey> + Clone + '_> {
        Ok(self.table()?.cards.iter().map(|card| &card.id))
    }

    /// Merged cards in source order.
    pub fn iter(&self) -> Result<std::slice::Iter<'_, MergedCard>> {
        Ok(self.table()?.cards.iter())
    }

    /// Find cards matching a predicate.
    pub fn find<'a, F>(&'a self, predicate: F) -> Result<impl Iterator<Item = &'a MergedCard> + 'a>
    where
        F: Fn(&MergedCard) -> bool + 'a,
    {
        Ok(self.iter()?.filter(move |card| predicate(card)))
    }

    /// Ids of cards matching `query`, in source order.
    ///
    /// No match is an empty vector, not an error.
    pub fn filter(&self, query: &Query) -> Result<Vec<CardKey>> {
        let table = self.table()?;
        Ok(table
            .cards
            .iter()
            .filter(|card| query.matches(&card.attributes, &self.playable_types))
            .map(|card| card.id.clone())
            .collect())
    }

    fn table(&self) -> Result<&CardTable> {
        self.table.get_or_try_init(|| self.load())
    }

    fn load(&self) -> Result<CardTable> {
        self.loading.store(true, Ordering::Release);
        let result = self.merge_all();
        self.loading.store(false, Ordering::Release);

        if let Err(err) = &result {
            tracing::warn!(source = %self.source.describe(), error = %err, "Card database initialization failed");
        }
        result
    }

    fn merge_all(&self) -> Result<CardTable> {
        tracing::info!(source = %self.source.describe(), "Initializing card database");

        let records = self.source.load()?;
        let mut table = CardTable::with_capacity(records.len());
        for record in records {
            if table.contains(record.id.as_str()) {
                return Err(RegistryError::DuplicateCard(record.id));
            }
            table.push(merge(record, &*self.locator, &self.deriver)?);
        }

        tracing::info!("Merged {} cards", table.cards.len());
        Ok(table)
    }
}

impl fmt::Debug for CardRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRegistry")
            .field("source", &self.source.describe())
            .field("deriver", &self.deriver)
            .field("playable_types", &self.playable_types)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAttributes, StaticSource};
    use crate::scripts::NoScripts;
    use crate::triggers::POISONOUS;

    fn registry(records: Vec<CardAttributes>) -> CardRegistry {
        CardRegistry::new(StaticSource::new(records), NoScripts)
    }

    #[test]
    fn test_lazy_initialization() {
        let registry = registry(vec![CardAttributes::new("A", CardType::Minion)]);
        assert_eq!(registry.state(), RegistryState::Uninitialized);

        assert!(registry.get("A").is_ok());
        assert_eq!(registry.state(), RegistryState::Ready);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let registry = registry(vec![CardAttributes::new("A", CardType::Minion)]);

        match registry.get("Z") {
            Err(RegistryError::NotFound(id)) => assert_eq!(id, "Z"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
        assert!(registry.is_ready());
    }

    #[test]
    fn test_ids_follow_source_order_and_restart() {
        let registry = registry(vec![
            CardAttributes::new("C", CardType::Spell),
            CardAttributes::new("A", CardType::Minion),
            CardAttributes::new("B", CardType::Weapon),
        ]);

        let ids = registry.ids().unwrap();
        let first: Vec<_> = ids.clone().map(CardKey::as_str).collect();
        let second: Vec<_> = ids.map(CardKey::as_str).collect();

        assert_eq!(first, vec!["C", "A", "B"]);
        assert_eq!(first, second);
        assert_eq!(registry.len().unwrap(), 3);
    }

    #[test]
    fn test_duplicate_id_fails_initialization() {
        let registry = registry(vec![
            CardAttributes::new("A", CardType::Minion),
            CardAttributes::new("A", CardType::Spell),
        ]);

        assert!(matches!(
            registry.initialize(),
            Err(RegistryError::DuplicateCard(id)) if id == "A"
        ));
        assert_eq!(registry.state(), RegistryState::Uninitialized);
    }

    #[test]
    fn test_find_with_predicate() {
        let registry = registry(vec![
            CardAttributes::new("A", CardType::Minion).poisonous(),
            CardAttributes::new("B", CardType::Minion),
        ]);

        let poisonous: Vec<_> = registry
            .find(|card| card.scripts.events.contains(&POISONOUS))
            .unwrap()
            .map(|card| card.id.clone())
            .collect();
        assert_eq!(poisonous, vec!["A"]);
    }

    #[test]
    fn test_playable_types_override() {
        let registry = registry(vec![
            CardAttributes::new("M", CardType::Minion),
            CardAttributes::new("P", CardType::HeroPower),
        ])
        .with_playable_types([CardType::HeroPower]);

        assert_eq!(registry.filter(&Query::new()).unwrap(), vec!["P"]);
    }
}
