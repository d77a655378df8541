//! Where the stock list comes from.

use std::path::Path;

use gildedrose_core::{StockError, StockResult};
use gildedrose_inventory::{Item, stock};

/// Read and decode the stock file at `path`, or fall back to the fixture.
pub fn load(path: Option<&Path>) -> StockResult<Vec<Item>> {
    let Some(path) = path else {
        tracing::debug!("no stock file configured; using fixture stock");
        return Ok(stock::fixture());
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|e| StockError::io(path.display().to_string(), e.to_string()))?;
    let items = stock::decode(&raw)?;

    tracing::debug!(path = %path.display(), items = items.len(), "stock file decoded");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "gildedrose-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn no_path_loads_fixture() {
        assert_eq!(load(None).unwrap(), stock::fixture());
    }

    #[test]
    fn loads_items_from_file() {
        let path = scratch_file("loads", r#"[{"name": "Conjured Item", "sell_in": 0, "quality": 20}]"#);
        let items = load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(items, vec![Item::new("Conjured Item", 0, 20)]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Some(Path::new("/nonexistent/gildedrose/stock.json"))).unwrap_err();
        match err {
            StockError::Io { source_name, .. } => {
                assert_eq!(source_name, "/nonexistent/gildedrose/stock.json");
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_is_a_decode_error() {
        let path = scratch_file("malformed", "not json");
        let err = load(Some(path.as_path())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        match err {
            StockError::Decode(_) => {}
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }
}
