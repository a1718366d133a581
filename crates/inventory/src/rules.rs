//! Per-category daily update rules.
//!
//! Every rule except [`Rule::Legendary`] first counts `sell_in` down by one and
//! then branches on the **already decremented** value. The quality bound is
//! applied last, as a plain min/max over the computed value.
//!
//! Arithmetic saturates: an item already at `sell_in == i32::MIN` stays there
//! instead of counting down, and quality never wraps.

use gildedrose_core::{Item, MAX_QUALITY, MIN_QUALITY};

/// Update rule for one item category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Degrades by 1 per day, by 2 once past due. Never below 0.
    Normal,
    /// Improves by 1 per day, by 2 once past due. Never above 50.
    AgedBrie,
    /// Improves faster as the concert nears, worthless after it.
    BackstagePass,
    /// Never sold, never degrades.
    Legendary,
}

impl Rule {
    /// Stable label for logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Normal => "normal",
            Rule::AgedBrie => "aged_brie",
            Rule::BackstagePass => "backstage_pass",
            Rule::Legendary => "legendary",
        }
    }

    /// Advance `item` by one simulated day.
    pub fn apply(self, item: &mut Item) {
        match self {
            Rule::Normal => {
                let sell_in = item.advance_sell_in();
                let degrade = if sell_in < 0 { 2 } else { 1 };
                item.set_quality(MIN_QUALITY.max(item.quality().saturating_sub(degrade)));
            }
            Rule::AgedBrie => {
                let sell_in = item.advance_sell_in();
                let increase = if sell_in < 0 { 2 } else { 1 };
                item.set_quality(MAX_QUALITY.min(item.quality().saturating_add(increase)));
            }
            Rule::BackstagePass => {
                let sell_in = item.advance_sell_in();
                let quality = match sell_in {
                    s if s < 0 => 0,
                    s if s < 5 => MAX_QUALITY.min(item.quality().saturating_add(3)),
                    s if s < 10 => MAX_QUALITY.min(item.quality().saturating_add(2)),
                    _ => MAX_QUALITY.min(item.quality().saturating_add(1)),
                };
                item.set_quality(quality);
            }
            Rule::Legendary => {}
        }
    }

    /// Bind this rule to `item` for a single update.
    pub fn bind(self, item: &mut Item) -> BoundRule<'_> {
        BoundRule { rule: self, item }
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule bound to the item it updates.
///
/// Bindings live for one update call; nothing is carried across days.
#[derive(Debug)]
pub struct BoundRule<'a> {
    rule: Rule,
    item: &'a mut Item,
}

impl BoundRule<'_> {
    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn item(&self) -> &Item {
        self.item
    }

    pub fn update(&mut self) {
        self.rule.apply(self.item);
    }
}
