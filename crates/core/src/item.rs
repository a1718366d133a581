use core::str::FromStr;

use serde::Serialize;

use crate::error::DomainError;

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Quality of a legendary item. It never changes.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A shop item: identity plus its two daily-evolving attributes.
///
/// Construction performs no validation. An item may start with an
/// out-of-range quality; the update rules enforce the bounds from the next
/// day onwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Identity used for rule lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left to sell. Negative once the item is past due.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Count down one day and return the new `sell_in`.
    ///
    /// Reserved for the update rules in `gildedrose-inventory`; not part of
    /// the public API. Saturates at `i32::MIN`.
    #[doc(hidden)]
    pub fn advance_sell_in(&mut self) -> i32 {
        self.sell_in = self.sell_in.saturating_sub(1);
        self.sell_in
    }

    /// Overwrite the quality.
    ///
    /// Reserved for the update rules in `gildedrose-inventory`, which clamp
    /// first; not part of the public API.
    #[doc(hidden)]
    pub fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }
}

/// Canonical display form: `"{name}, {sell_in}, {quality}"`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses the canonical display form.
///
/// The name may itself contain commas (`"Sulfuras, Hand of Ragnaros, 0, 80"`);
/// only the last two fields are numeric.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::validation(format!(
                "expected \"<name>, <sell_in>, <quality>\", got {s:?}"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let sell_in = sell_in
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::invalid_number("sell_in", sell_in.trim()))?;
        let quality = quality
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::invalid_number("quality", quality.trim()))?;

        Ok(Self::new(name, sell_in, quality))
    }
}
