//! Stock lists: decoding raw item triples and the default shop stock.

use gildedrose_core::{StockError, StockResult};

use crate::category::{AGED_BRIE, BACKSTAGE_PASS, CONJURED, SULFURAS};
use crate::item::Item;

/// Decode a JSON array of `{ "name", "sell_in", "quality" }` objects.
///
/// Values are taken as given: unknown names and out-of-range numbers are
/// not errors. Only a document that is not such a list fails.
pub fn decode(json: &str) -> StockResult<Vec<Item>> {
    serde_json::from_str(json).map_err(|e| StockError::decode(e.to_string()))
}

/// The shop's standing stock, used when no stock list is supplied.
pub fn fixture() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new(CONJURED, 3, 6),
    ]
}
