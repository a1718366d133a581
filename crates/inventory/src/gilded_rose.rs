use std::io::{self, Write};

use gildedrose_core::Item;

use crate::dispatch;

/// First line of every snapshot printed by [`GildedRose::display_items`].
pub const DISPLAY_HEADER: &str = "Updated Items:";

/// Inventory manager: advances a caller-owned collection one day at a time.
///
/// Holds a borrow of the caller's items, never a copy, so the caller observes
/// every update directly.
#[derive(Debug)]
pub struct GildedRose<'a> {
    items: &'a mut [Item],
}

impl<'a> GildedRose<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    /// Advance every item by exactly one simulated day.
    ///
    /// Items are visited once each, in collection order. Each rule only sees
    /// its own item.
    pub fn update_quality(&mut self) {
        for item in self.items.iter_mut() {
            let mut rule = dispatch::bind(item);
            rule.update();
            tracing::debug!(
                item = rule.item().name(),
                rule = rule.rule().name(),
                sell_in = rule.item().sell_in(),
                quality = rule.item().quality(),
                "item updated"
            );
        }
        tracing::trace!(items = self.items.len(), "day advanced");
    }

    /// The snapshot text: header, then `"  - {item}"` per item.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the snapshot to `out`.
    pub fn write_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Print the snapshot to standard output.
    ///
    /// Never panics; a failed write (e.g. a closed pipe) is logged and dropped.
    pub fn display_items(&self) {
        if let Err(err) = self.write_items(&mut io::stdout().lock()) {
            tracing::warn!(%err, "failed to display items");
        }
    }
}

impl core::fmt::Display for GildedRose<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{DISPLAY_HEADER}")?;
        for item in self.items.iter() {
            writeln!(f, "  - {item}")?;
        }
        Ok(())
    }
}
