//! Attribute queries over card records.
//!
//! A `Query` maps attribute names to predicates. Every predicate must hold
//! for a card to match. A name mapped to `None` imposes no constraint.
//!
//! ## Default type constraint
//!
//! Queries that never mention `type` only match playable card types
//! (spells, weapons and minions by default). Mentioning `type`, even with
//! `None`, replaces that default.
//!
//! ## Example
//!
//! ```
//! use card_registry::cards::{CardType, Query, Rarity};
//!
//! let query = Query::new()
//!     .rarities([Rarity::Common, Rarity::Rare])
//!     .cost(2);
//!
//! assert!(!query.constrains_type());
//! ```

use super::attributes::{AttributeKey, AttributeValue};
use super::definition::{CardAttributes, CardClass, CardType, Race, Rarity};

/// Name of the attribute the default type constraint applies to.
pub const TYPE_ATTR: &str = "type";

/// Constraint on one attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Attribute equals the value.
    Exact(AttributeValue),
    /// Attribute is one of the values.
    AnyOf(Vec<AttributeValue>),
}

impl Predicate {
    pub fn exact(value: impl Into<AttributeValue>) -> Self {
        Predicate::Exact(value.into())
    }

    pub fn any_of<V: Into<AttributeValue>>(values: impl IntoIterator<Item = V>) -> Self {
        Predicate::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Whether `value` satisfies this predicate.
    ///
    /// A list-valued attribute also satisfies `AnyOf` when it equals the
    /// whole list.
    #[must_use]
    pub fn matches(&self, value: &AttributeValue) -> bool {
        match self {
            Predicate::Exact(expected) => value == expected,
            Predicate::AnyOf(values) => values.contains(value) || value.equals_list(values),
        }
    }
}

/// Conjunction of attribute predicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    predicates: Vec<(AttributeKey, Option<Predicate>)>,
}

impl Query {
    /// An empty query (only the default type constraint applies).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for `attr`, replacing any earlier one.
    #[must_use]
    pub fn with(mut self, attr: impl Into<AttributeKey>, predicate: Option<Predicate>) -> Self {
        let attr = attr.into();
        match self.predicates.iter_mut().find(|(key, _)| *key == attr) {
            Some(entry) => entry.1 = predicate,
            None => self.predicates.push((attr, predicate)),
        }
        self
    }

    /// Require `attr == value`.
    #[must_use]
    pub fn equals(self, attr: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.with(attr, Some(Predicate::exact(value)))
    }

    /// Require `attr` to be one of `values`.
    #[must_use]
    pub fn any_of<V: Into<AttributeValue>>(
        self,
        attr: impl Into<AttributeKey>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.with(attr, Some(Predicate::any_of(values)))
    }

    /// Require `attr == value` when `value` is `Some`; otherwise mention
    /// `attr` without constraining it.
    #[must_use]
    pub fn maybe_equals<V: Into<AttributeValue>>(
        self,
        attr: impl Into<AttributeKey>,
        value: Option<V>,
    ) -> Self {
        self.with(attr, value.map(Predicate::exact))
    }

    #[must_use]
    pub fn card_type(self, card_type: CardType) -> Self {
        self.equals(TYPE_ATTR, card_type)
    }

    #[must_use]
    pub fn types(self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.any_of(TYPE_ATTR, types)
    }

    /// Drop the default type constraint without adding one.
    #[must_use]
    pub fn any_type(self) -> Self {
        self.with(TYPE_ATTR, None)
    }

    #[must_use]
    pub fn race(self, race: Race) -> Self {
        self.equals("race", race)
    }

    #[must_use]
    pub fn rarity(self, rarity: Rarity) -> Self {
        self.equals("rarity", rarity)
    }

    #[must_use]
    pub fn rarities(self, rarities: impl IntoIterator<Item = Rarity>) -> Self {
        self.any_of("rarity", rarities)
    }

    #[must_use]
    pub fn card_class(self, card_class: CardClass) -> Self {
        self.equals("card_class", card_class)
    }

    #[must_use]
    pub fn cost(self, cost: i64) -> Self {
        self.equals("cost", cost)
    }

    #[must_use]
    pub fn collectible(self, collectible: bool) -> Self {
        self.equals("collectible", collectible)
    }

    #[must_use]
    pub fn poisonous(self, poisonous: bool) -> Self {
        self.equals("poisonous", poisonous)
    }

    /// Whether the query mentions `type` (with or without a predicate).
    #[must_use]
    pub fn constrains_type(&self) -> bool {
        self.predicates.iter().any(|(key, _)| key.as_str() == TYPE_ATTR)
    }

    /// Whether `card` satisfies every predicate.
    ///
    /// `playable_types` applies when the query does not mention `type`.
    /// A predicate on an attribute the card lacks never matches.
    #[must_use]
    pub fn matches(&self, card: &CardAttributes, playable_types: &[CardType]) -> bool {
        if !self.constrains_type() && !playable_types.contains(&card.card_type) {
            return false;
        }
        self.predicates.iter().all(|(key, predicate)| match predicate {
            None => true,
            Some(predicate) => card
                .attr(key.as_str())
                .is_some_and(|value| predicate.matches(&value)),
        })
    }
}

impl<K: Into<AttributeKey>> FromIterator<(K, Option<Predicate>)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, Option<Predicate>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (attr, predicate)| query.with(attr, predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PLAYABLE_TYPES;

    fn minion(id: &str) -> CardAttributes {
        CardAttributes::new(id, CardType::Minion)
    }

    #[test]
    fn test_empty_query_applies_default_types() {
        let query = Query::new();

        assert!(query.matches(&minion("A"), &PLAYABLE_TYPES));
        assert!(query.matches(&CardAttributes::new("S", CardType::Spell), &PLAYABLE_TYPES));
        assert!(query.matches(&CardAttributes::new("W", CardType::Weapon), &PLAYABLE_TYPES));
        assert!(!query.matches(&CardAttributes::new("H", CardType::Hero), &PLAYABLE_TYPES));
        assert!(!query.matches(&CardAttributes::new("E", CardType::Enchantment), &PLAYABLE_TYPES));
    }

    #[test]
    fn test_explicit_type_replaces_default() {
        let hero = CardAttributes::new("H", CardType::Hero);

        assert!(Query::new().card_type(CardType::Hero).matches(&hero, &PLAYABLE_TYPES));
        assert!(!Query::new().card_type(CardType::Hero).matches(&minion("A"), &PLAYABLE_TYPES));
        assert!(Query::new().any_type().matches(&hero, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_exact_vs_any_of() {
        let common = minion("C").with_rarity(Rarity::Common);
        let rare = minion("R").with_rarity(Rarity::Rare);
        let epic = minion("E").with_rarity(Rarity::Epic);

        let exact = Query::new().rarity(Rarity::Common);
        assert!(exact.matches(&common, &PLAYABLE_TYPES));
        assert!(!exact.matches(&rare, &PLAYABLE_TYPES));

        let either = Query::new().rarities([Rarity::Common, Rarity::Rare]);
        assert!(either.matches(&common, &PLAYABLE_TYPES));
        assert!(either.matches(&rare, &PLAYABLE_TYPES));
        assert!(!either.matches(&epic, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_none_is_ignored() {
        let card = minion("A").with_cost(4);
        let query = Query::new().maybe_equals("cost", None::<i64>).race(Race::Invalid);

        assert!(query.matches(&card, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_predicates_are_anded() {
        let card = minion("A").with_cost(2).collectible();

        assert!(Query::new().cost(2).collectible(true).matches(&card, &PLAYABLE_TYPES));
        assert!(!Query::new().cost(2).collectible(false).matches(&card, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let card = minion("A");
        assert!(!Query::new().equals("ATK", 1i64).matches(&card, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_list_attribute_equals_whole_list() {
        let card = minion("A").with_attr("MECHANICS", vec!["TAUNT".to_string(), "POISONOUS".to_string()]);

        let whole = Query::new().any_of("MECHANICS", ["TAUNT", "POISONOUS"]);
        assert!(whole.matches(&card, &PLAYABLE_TYPES));

        let partial = Query::new().any_of("MECHANICS", ["TAUNT"]);
        assert!(!partial.matches(&card, &PLAYABLE_TYPES));
    }

    #[test]
    fn test_later_predicate_replaces_earlier() {
        let query = Query::new().cost(1).cost(3);
        assert!(query.matches(&minion("A").with_cost(3), &PLAYABLE_TYPES));
        assert!(!query.matches(&minion("A").with_cost(1), &PLAYABLE_TYPES));
    }

    #[test]
    fn test_from_pairs() {
        let query: Query = [
            ("cost", Some(Predicate::exact(2i64))),
            ("race", None),
            ("type", Some(Predicate::any_of([CardType::Hero]))),
        ]
        .into_iter()
        .collect();

        assert!(query.constrains_type());
        let hero = CardAttributes::new("H", CardType::Hero).with_cost(2);
        assert!(query.matches(&hero, &PLAYABLE_TYPES));
    }
}
