//! `itemlink describe` – show each item's catalog field values.

use anyhow::Result;
use itemlink_core::catalog::{load_items, Catalog};
use std::path::Path;

pub fn run_describe(catalog: &Catalog, items_path: &Path) -> Result<()> {
    let items = load_items(items_path)?;
    for (index, item) in items.into_iter().enumerate() {
        let assoc = catalog.associate(item);
        println!("item {}", index);
        for (name, value) in assoc.describe() {
            let shown = match value {
                Ok(v) => v.to_string(),
                Err(err) => format!("<{}>", err),
            };
            println!("  {:<16} {}", name, shown);
        }
    }
    Ok(())
}
