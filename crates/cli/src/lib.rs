//! `gildedrose` command-line front end: load a stock list, advance it one
//! day, and print the result.

pub mod config;
pub mod render;
pub mod source;

use anyhow::Context;

use gildedrose_inventory::Inventory;

pub use config::{Config, OutputFormat};

/// Load the configured stock, advance it once, and render the result.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let items = source::load(config.stock_path.as_deref()).context("loading stock")?;

    let mut inventory = Inventory::new(items);
    tracing::info!(items = inventory.len(), "stock loaded");
    inventory.advance();

    render::render(&inventory, config.output).context("rendering report")
}
