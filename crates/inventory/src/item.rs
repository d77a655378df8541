use serde::{Deserialize, Serialize};

use gildedrose_core::{LEGENDARY_QUALITY, cap_quality};

use crate::category::Category;

/// Raw item record: a name, days left to sell, and a quality score.
///
/// This is the shape items arrive in (and are reported back in). It carries
/// no behavior and performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left to sell. Negative once the sell date has passed.
    #[serde(alias = "sellIn")]
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// An item held by an [`Inventory`](crate::Inventory), bound to its category.
///
/// The category is resolved once from the name when the item is stocked and
/// never re-evaluated. The name cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockedItem {
    #[serde(flatten)]
    item: Item,
    category: Category,
}

impl StockedItem {
    /// Categorize `item` by name and apply the construction-time quality rule.
    ///
    /// Legendary items are pinned to 80. Everything else is capped at 50 but
    /// never floored, so a negative quality is stored as given.
    pub fn new(item: Item) -> Self {
        let category = Category::of(&item.name);
        let quality = match category {
            Category::Legendary => LEGENDARY_QUALITY,
            _ => cap_quality(item.quality),
        };

        Self {
            item: Item { quality, ..item },
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn sell_in(&self) -> i32 {
        self.item.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.item.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn as_item(&self) -> &Item {
        &self.item
    }

    /// Apply this item's category rule once. Returns the previous quality.
    pub(crate) fn update_quality(&mut self) -> i32 {
        let before = self.item.quality;
        self.item.quality = self.category.next_quality(self.item.sell_in, before);
        before
    }

    /// Count down one day unless the category never has to be sold.
    pub(crate) fn close_day(&mut self) {
        if self.category.ages() {
            self.item.sell_in = self.item.sell_in.saturating_sub(1);
        }
    }
}

impl From<Item> for StockedItem {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

impl From<StockedItem> for Item {
    fn from(stocked: StockedItem) -> Self {
        stocked.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};

    #[test]
    fn item_keeps_fields_as_given() {
        let item = Item::new("foo", 10, 8);

        assert_eq!(item.name, "foo");
        assert_eq!(item.sell_in, 10);
        assert_eq!(item.quality, 8);
    }

    #[test]
    fn item_display_matches_report_line() {
        assert_eq!(Item::new("Aged Brie", -2, 30).to_string(), "Aged Brie, -2, 30");
    }

    #[test]
    fn stocking_resolves_category_by_exact_name() {
        assert_eq!(StockedItem::new(Item::new(AGED_BRIE, 2, 0)).category(), Category::AgedBrie);
        assert_eq!(StockedItem::new(Item::new(SULFURAS, 0, 80)).category(), Category::Legendary);
        assert_eq!(
            StockedItem::new(Item::new(BACKSTAGE_PASS, 15, 20)).category(),
            Category::BackstagePass
        );
        assert_eq!(StockedItem::new(Item::new(CONJURED, 3, 6)).category(), Category::Conjured);
        assert_eq!(StockedItem::new(Item::new("aged brie", 2, 0)).category(), Category::Generic);
        assert_eq!(
            StockedItem::new(Item::new("Conjured Mana Cake", 3, 6)).category(),
            Category::Generic
        );
    }

    #[test]
    fn stocking_caps_quality_at_fifty() {
        let stocked = StockedItem::new(Item::new(AGED_BRIE, 2, 60));
        assert_eq!(stocked.quality(), 50);

        let stocked = StockedItem::new(Item::new("foo", 2, 50));
        assert_eq!(stocked.quality(), 50);
    }

    #[test]
    fn stocking_keeps_negative_quality() {
        let stocked = StockedItem::new(Item::new("foo", 2, -4));
        assert_eq!(stocked.quality(), -4);
    }

    #[test]
    fn stocking_pins_legendary_quality() {
        let stocked = StockedItem::new(Item::new(SULFURAS, 10, 8));
        assert_eq!(stocked.quality(), 80);
        assert_eq!(stocked.sell_in(), 10);
    }

    #[test]
    fn close_day_skips_legendary_items() {
        let mut legendary = StockedItem::new(Item::new(SULFURAS, -1, 80));
        let mut generic = StockedItem::new(Item::new("foo", 0, 8));

        legendary.close_day();
        generic.close_day();

        assert_eq!(legendary.sell_in(), -1);
        assert_eq!(generic.sell_in(), -1);
        assert_eq!(generic.quality(), 8);
    }

    #[test]
    fn conversions_stock_and_unwrap_items() {
        let stocked: StockedItem = Item::new(SULFURAS, 4, 3).into();
        assert_eq!(stocked.category(), Category::Legendary);

        let item: Item = stocked.into();
        assert_eq!(item, Item::new(SULFURAS, 4, 80));
    }

    #[test]
    fn item_accepts_camel_case_sell_in() {
        let item: Item =
            serde_json::from_str(r#"{"name":"foo","sellIn":3,"quality":9}"#).unwrap();
        assert_eq!(item, Item::new("foo", 3, 9));
    }

    #[test]
    fn stocked_item_serializes_flat_with_category() {
        let stocked = StockedItem::new(Item::new(CONJURED, 0, 20));
        let json = serde_json::to_value(&stocked).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Conjured Item",
                "sell_in": 0,
                "quality": 20,
                "category": "conjured",
            })
        );
    }
}
