use serde::Serialize;
use tracing::{debug, info};

use crate::item::{Item, StockedItem};

/// Ordered collection of stocked items.
///
/// Items are categorized when the inventory is built and keep their position
/// for its whole lifetime. Nothing is added or removed after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<StockedItem>,
}

impl Inventory {
    /// Stock every item in order, categorizing each by name.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(StockedItem::from).collect(),
        }
    }

    pub fn items(&self) -> &[StockedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items.into_iter().map(Item::from).collect()
    }

    /// Apply one day's quality rule to every item, in order.
    ///
    /// `sell_in` is read but never written here; counting days down is
    /// [`close_day`](Self::close_day)'s job.
    pub fn advance(&mut self) -> &[StockedItem] {
        let mut changed = 0usize;
        for item in &mut self.items {
            let before = item.update_quality();
            if before != item.quality() {
                changed += 1;
            }
            debug!(
                name = item.name(),
                category = %item.category(),
                sell_in = item.sell_in(),
                from = before,
                to = item.quality(),
                "quality updated"
            );
        }

        info!(items = self.items.len(), changed, "inventory advanced");
        &self.items
    }

    /// Count every item that has a sell date one day closer to it.
    ///
    /// Legendary items are skipped. Quality is left untouched.
    pub fn close_day(&mut self) {
        for item in &mut self.items {
            item.close_day();
        }
        info!(items = self.items.len(), "day closed");
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter)
    }
}
