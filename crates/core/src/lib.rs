//! `gildedrose-core` — shared building blocks for the Gilded Rose workspace.
//!
//! This crate contains **pure** primitives (no IO): quality bounds and the
//! error model used at the stock-input boundary.

pub mod error;
pub mod quality;

pub use error::{StockError, StockResult};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, cap_quality};
