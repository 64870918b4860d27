//! Merging static card data with scripted behavior.

use std::ops::Deref;

use crate::core::Result;
use crate::scripts::{normalize, BehaviorBundle, EventDeriver, ScriptLocator};

use super::definition::CardAttributes;

/// A card's static attributes together with its normalized behavior.
///
/// Derefs to `CardAttributes`, so `card.cost` and `card.poisonous` read
/// straight through.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedCard {
    pub attributes: CardAttributes,
    pub scripts: BehaviorBundle,
}

impl Deref for MergedCard {
    type Target = CardAttributes;

    fn deref(&self) -> &Self::Target {
        &self.attributes
    }
}

/// Merge one record with its script.
///
/// Looks the script up, normalizes every slot, then applies derived events.
/// Fails only on a malformed script.
pub fn merge(
    card: CardAttributes,
    locator: &dyn ScriptLocator,
    deriver: &EventDeriver,
) -> Result<MergedCard> {
    let script = locator.locate(card.id.as_str());
    let mut scripts = normalize(&card.id, script.as_ref())?;
    deriver.derive(&card, &mut scripts);

    Ok(MergedCard {
        attributes: card,
        scripts,
    })
}
