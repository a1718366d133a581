//! Name-keyed rule selection.

use gildedrose_core::Item;

use crate::rules::{BoundRule, Rule};

/// Exact item names with a dedicated rule. Everything else is [`Rule::Normal`].
///
/// New item categories are added here (plus a [`Rule`] variant).
pub const RULE_TABLE: &[(&str, Rule)] = &[
    ("Aged Brie", Rule::AgedBrie),
    ("Backstage passes to a TAFKAL80ETC concert", Rule::BackstagePass),
    ("Sulfuras, Hand of Ragnaros", Rule::Legendary),
];

/// Select the rule for an item name.
///
/// Matching is exact and case-sensitive. Unknown names fall back to
/// [`Rule::Normal`]; this is not an error.
pub fn rule_for(name: &str) -> Rule {
    RULE_TABLE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, rule)| *rule)
        .unwrap_or(Rule::Normal)
}

/// Bind the matching rule to `item`.
pub fn bind(item: &mut Item) -> BoundRule<'_> {
    rule_for(item.name()).bind(item)
}
