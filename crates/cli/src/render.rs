//! Report rendering.

use gildedrose_inventory::Inventory;

use crate::config::OutputFormat;

/// Render the inventory as a plain `name, sellIn, quality` table or as JSON.
pub fn render(inventory: &Inventory, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(table(inventory)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(inventory)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn table(inventory: &Inventory) -> String {
    inventory.items().iter().fold(
        String::from("name, sellIn, quality\n"),
        |mut out, item| {
            out.push_str(&format!("{}\n", item.as_item()));
            out
        },
    )
}
