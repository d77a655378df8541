//! Closed set of item categories and their daily quality rules.
//!
//! Each category owns one pure transition `(sell_in, quality) -> quality`.
//! The rules deliberately reproduce the shop's historical behavior, including
//! its boundary quirks:
//!
//! - Aged Brie checks the cap once, before both increments, so it can end a
//!   day above 50.
//! - Backstage passes are never capped inside the rule.
//! - Decreasing rules only guard against a quality of exactly zero, so a
//!   double step from 1 lands on -1.

use serde::{Deserialize, Serialize};

use gildedrose_core::MAX_QUALITY;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Item";

const SINGLE_STEP: i32 = 1;
const DOUBLE_STEP: i32 = 2;
const TRIPLE_STEP: i32 = 3;

/// Category of an item, resolved once by exact name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Generic,
    AgedBrie,
    Legendary,
    BackstagePass,
    Conjured,
}

impl Category {
    /// Resolve the category for an item name. Unknown names are `Generic`.
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASS => Category::BackstagePass,
            CONJURED => Category::Conjured,
            _ => Category::Generic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
        }
    }

    /// Whether the item counts down towards a sell date at all.
    pub fn ages(self) -> bool {
        !matches!(self, Category::Legendary)
    }

    /// Quality after one day, given the item's current `sell_in` and quality.
    pub fn next_quality(self, sell_in: i32, quality: i32) -> i32 {
        match self {
            Category::Generic => generic(sell_in, quality),
            Category::AgedBrie => aged_brie(sell_in, quality),
            Category::Legendary => quality,
            Category::BackstagePass => backstage_pass(sell_in, quality),
            Category::Conjured => conjured(quality),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn generic(sell_in: i32, quality: i32) -> i32 {
    if quality == 0 {
        return quality;
    }
    let step = if sell_in > 0 { SINGLE_STEP } else { DOUBLE_STEP };
    quality.saturating_sub(step)
}

fn aged_brie(sell_in: i32, quality: i32) -> i32 {
    if quality >= MAX_QUALITY {
        return quality;
    }
    let mut next = quality.saturating_add(SINGLE_STEP);
    if sell_in < 0 {
        next = next.saturating_add(SINGLE_STEP);
    }
    next
}

fn backstage_pass(sell_in: i32, quality: i32) -> i32 {
    // Order matters: negative days fall into the "< 6" band.
    if sell_in == 0 {
        0
    } else if sell_in < 6 {
        quality.saturating_add(TRIPLE_STEP)
    } else if sell_in < 11 {
        quality.saturating_add(DOUBLE_STEP)
    } else {
        quality.saturating_add(SINGLE_STEP)
    }
}

fn conjured(quality: i32) -> i32 {
    if quality == 0 {
        return quality;
    }
    quality.saturating_sub(DOUBLE_STEP)
}
