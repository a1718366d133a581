//! `gildedrose-core` — shop item data model.
//!
//! This crate contains **pure domain** primitives (no IO, no rule logic).

pub mod error;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
