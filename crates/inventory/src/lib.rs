//! Inventory domain module.
//!
//! Daily update rules for shop items, the name-keyed dispatcher that picks
//! them, and the `GildedRose` manager that applies them across a collection.
//! Pure, deterministic domain logic (no storage, no HTTP).

pub mod dispatch;
pub mod gilded_rose;
pub mod rules;

pub use dispatch::{RULE_TABLE, bind, rule_for};
pub use gilded_rose::{DISPLAY_HEADER, GildedRose};
pub use rules::{BoundRule, Rule};

pub use gildedrose_core::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
