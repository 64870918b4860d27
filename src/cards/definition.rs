//! Card definitions - static card data.
//!
//! `CardAttributes` holds the immutable properties of a card as produced by
//! the data source: "Wisp" is a 0-cost common neutral minion, and that never
//! changes. Scripted behavior is attached separately by the merge step.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Unique identifier for a card definition (e.g. `"CS2_231"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardKey(pub String);

impl CardKey {
    /// Create a new card key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CardKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CardKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card type.
///
/// Only spells, weapons and minions are playable from hand; the rest are
/// service cards that queries skip unless asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    #[default]
    Invalid,
    Hero,
    Minion,
    Spell,
    Enchantment,
    Weapon,
    HeroPower,
}

impl CardType {
    /// Canonical upper-case name, as it appears in card data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Invalid => "INVALID",
            CardType::Hero => "HERO",
            CardType::Minion => "MINION",
            CardType::Spell => "SPELL",
            CardType::Enchantment => "ENCHANTMENT",
            CardType::Weapon => "WEAPON",
            CardType::HeroPower => "HERO_POWER",
        }
    }
}

/// Minion race (tribe).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    #[default]
    Invalid,
    Beast,
    Demon,
    Dragon,
    Elemental,
    Mech,
    Murloc,
    Pirate,
    Totem,
}

impl Race {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Race::Invalid => "INVALID",
            Race::Beast => "BEAST",
            Race::Demon => "DEMON",
            Race::Dragon => "DRAGON",
            Race::Elemental => "ELEMENTAL",
            Race::Mech => "MECH",
            Race::Murloc => "MURLOC",
            Race::Pirate => "PIRATE",
            Race::Totem => "TOTEM",
        }
    }
}

/// Card rarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    #[default]
    Invalid,
    Common,
    Free,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Invalid => "INVALID",
            Rarity::Common => "COMMON",
            Rarity::Free => "FREE",
            Rarity::Rare => "RARE",
            Rarity::Epic => "EPIC",
            Rarity::Legendary => "LEGENDARY",
        }
    }
}

/// Hero class a card belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardClass {
    #[default]
    Neutral,
    Druid,
    Hunter,
    Mage,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl CardClass {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardClass::Neutral => "NEUTRAL",
            CardClass::Druid => "DRUID",
            CardClass::Hunter => "HUNTER",
            CardClass::Mage => "MAGE",
            CardClass::Paladin => "PALADIN",
            CardClass::Priest => "PRIEST",
            CardClass::Rogue => "ROGUE",
            CardClass::Shaman => "SHAMAN",
            CardClass::Warlock => "WARLOCK",
            CardClass::Warrior => "WARRIOR",
        }
    }
}

impl From<CardType> for AttributeValue {
    fn from(v: CardType) -> Self {
        AttributeValue::Text(v.as_str().to_string())
    }
}

impl From<Race> for AttributeValue {
    fn from(v: Race) -> Self {
        AttributeValue::Text(v.as_str().to_string())
    }
}

impl From<Rarity> for AttributeValue {
    fn from(v: Rarity) -> Self {
        AttributeValue::Text(v.as_str().to_string())
    }
}

impl From<CardClass> for AttributeValue {
    fn from(v: CardClass) -> Self {
        AttributeValue::Text(v.as_str().to_string())
    }
}

/// Static card attributes, one record per card id.
///
/// ## Example
///
/// ```
/// use card_registry::cards::{CardAttributes, CardType, Rarity};
///
/// let wisp = CardAttributes::new("CS2_231", CardType::Minion)
///     .with_name("Wisp")
///     .with_rarity(Rarity::Common)
///     .with_attr("ATK", 1i32);
///
/// assert_eq!(wisp.get_int("ATK", 0), 1);
/// assert_eq!(wisp.attr("rarity"), Some("COMMON".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardAttributes {
    /// Unique identifier for this card.
    pub id: CardKey,

    /// Display name.
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub card_type: CardType,

    #[serde(default)]
    pub race: Race,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub card_class: CardClass,

    /// Mana cost.
    #[serde(default)]
    pub cost: i64,

    /// Damage dealt by this card to a minion destroys it.
    #[serde(default)]
    pub poisonous: bool,

    /// Obtainable by players (as opposed to tokens and service cards).
    #[serde(default)]
    pub collectible: bool,

    /// Remaining static fields.
    #[serde(default)]
    pub tags: Attributes,
}

impl CardAttributes {
    /// Create a card record with default attributes.
    #[must_use]
    pub fn new(id: impl Into<CardKey>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            card_type,
            race: Race::default(),
            rarity: Rarity::default(),
            card_class: CardClass::default(),
            cost: 0,
            poisonous: false,
            collectible: false,
            tags: Attributes::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_class(mut self, card_class: CardClass) -> Self {
        self.card_class = card_class;
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn poisonous(mut self) -> Self {
        self.poisonous = true;
        self
    }

    #[must_use]
    pub fn collectible(mut self) -> Self {
        self.collectible = true;
        self
    }

    /// Add a generic attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up any attribute by name.
    ///
    /// Named fields come first (`id`, `name`, `type`, `race`, `rarity`,
    /// `card_class`, `cost`, `poisonous`, `collectible`), then `tags`.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<AttributeValue> {
        let value = match key {
            "id" => AttributeValue::Text(self.id.0.clone()),
            "name" => AttributeValue::Text(self.name.clone()),
            "type" => self.card_type.into(),
            "race" => self.race.into(),
            "rarity" => self.rarity.into(),
            "card_class" => self.card_class.into(),
            "cost" => AttributeValue::Int(self.cost),
            "poisonous" => AttributeValue::Bool(self.poisonous),
            "collectible" => AttributeValue::Bool(self.collectible),
            _ => return self.tags.get(key).cloned(),
        };
        Some(value)
    }

    /// Get an integer tag with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.tags.get(key).and_then(|v| v.as_int()).unwrap_or(default)
    }

    /// Get a boolean tag with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.tags.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
    }

    /// Get a text tag.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(|v| v.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_key() {
        let key = CardKey::new("EX1_001");
        assert_eq!(key.as_str(), "EX1_001");
        assert_eq!(format!("{}", key), "EX1_001");
        assert_eq!(key, "EX1_001");
    }

    #[test]
    fn test_builder() {
        let card = CardAttributes::new("EX1_170", CardType::Minion)
            .with_name("Emperor Cobra")
            .with_race(Race::Beast)
            .with_rarity(Rarity::Rare)
            .with_cost(3)
            .poisonous()
            .collectible()
            .with_attr("ATK", 2i32)
            .with_attr("HEALTH", 3i32);

        assert_eq!(card.name, "Emperor Cobra");
        assert!(card.poisonous);
        assert!(card.collectible);
        assert_eq!(card.get_int("ATK", 0), 2);
        assert_eq!(card.get_int("DURABILITY", 0), 0);
        assert_eq!(card.get_bool("TAUNT", false), false);
    }

    #[test]
    fn test_attr_by_name() {
        let card = CardAttributes::new("CS2_106", CardType::Weapon)
            .with_class(CardClass::Warrior)
            .with_cost(2)
            .with_attr("DURABILITY", 2i32);

        assert_eq!(card.attr("id"), Some("CS2_106".into()));
        assert_eq!(card.attr("type"), Some("WEAPON".into()));
        assert_eq!(card.attr("card_class"), Some("WARRIOR".into()));
        assert_eq!(card.attr("race"), Some("INVALID".into()));
        assert_eq!(card.attr("cost"), Some(AttributeValue::Int(2)));
        assert_eq!(card.attr("poisonous"), Some(AttributeValue::Bool(false)));
        assert_eq!(card.attr("DURABILITY"), Some(AttributeValue::Int(2)));
        assert_eq!(card.attr("ATK"), None);
    }

    #[test]
    fn test_enum_names_match_serde() {
        let json = serde_json::to_string(&CardType::HeroPower).unwrap();
        assert_eq!(json, format!("\"{}\"", CardType::HeroPower.as_str()));

        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, format!("\"{}\"", Rarity::Legendary.as_str()));
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let card: CardAttributes =
            serde_json::from_str(r#"{ "id": "GAME_005", "type": "SPELL", "cost": 0 }"#).unwrap();

        assert_eq!(card.id, "GAME_005");
        assert_eq!(card.card_type, CardType::Spell);
        assert_eq!(card.rarity, Rarity::Invalid);
        assert!(!card.poisonous);
        assert!(card.tags.is_empty());
    }
}
