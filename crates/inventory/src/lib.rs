//! Gilded Rose inventory rules.
//!
//! This crate contains the per-category quality rules and the shop-level
//! orchestration that applies them, implemented purely as deterministic
//! domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod shop;
pub mod stock;


pub use category::Category;
pub use item::{Item, StockedItem};
pub use shop::Inventory;
