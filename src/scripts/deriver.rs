//! Event derivation from static attributes.
//!
//! Some behavior is implied by card data rather than written in a script:
//! a poisonous minion destroys whatever it damages. The deriver runs after
//! normalization and appends those hooks to the bundle.

use crate::cards::CardAttributes;
use crate::triggers::POISONOUS;

use super::bundle::BehaviorBundle;
use super::slots::EventSlot;

/// A derivation rule. Must only append to event slots.
pub type DeriveRule = fn(&CardAttributes, &mut BehaviorBundle);

/// Appends `POISONOUS` to the `events` slot of poisonous cards.
pub fn derive_poisonous(card: &CardAttributes, bundle: &mut BehaviorBundle) {
    if !card.poisonous {
        return;
    }
    let events = bundle.hooks_mut(EventSlot::Events);
    if !events.contains(&POISONOUS) {
        events.push(POISONOUS);
    }
}

/// Ordered list of derivation rules.
#[derive(Clone)]
pub struct EventDeriver {
    rules: Vec<(&'static str, DeriveRule)>,
}

impl std::fmt::Debug for EventDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}

impl Default for EventDeriver {
    fn default() -> Self {
        Self::new().with_rule("poisonous", derive_poisonous)
    }
}

impl EventDeriver {
    /// A deriver with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule (builder pattern). Rules run in insertion order.
    #[must_use]
    pub fn with_rule(mut self, name: &'static str, rule: DeriveRule) -> Self {
        self.rules.push((name, rule));
        self
    }

    /// Rule names, in run order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|(name, _)| *name)
    }

    /// Apply every rule to `bundle`.
    pub fn derive(&self, card: &CardAttributes, bundle: &mut BehaviorBundle) {
        for (name, rule) in &self.rules {
            let before = hook_count(bundle);
            rule(card, bundle);
            if hook_count(bundle) != before {
                tracing::debug!(card = %card.id, rule = *name, "derived event hook");
            }
        }
    }
}

fn hook_count(bundle: &BehaviorBundle) -> usize {
    EventSlot::ALL.iter().map(|&slot| bundle.hooks(slot).len()).sum()
}
