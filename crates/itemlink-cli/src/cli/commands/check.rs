//! `itemlink check` – validate a catalog and list its actions.

use anyhow::Result;
use itemlink_core::catalog::Catalog;
use itemlink_core::config::ItemlinkConfig;
use std::path::Path;

pub fn run_check(path: &Path, cfg: &ItemlinkConfig) -> Result<()> {
    let catalog = Catalog::load(path, cfg)?;
    if catalog.actions().is_empty() {
        println!("No actions in {}.", path.display());
        return Ok(());
    }

    println!("{:<16} {:<8} {:<40} {}", "ACTION", "MODE", "TEMPLATE", "PLACEHOLDERS");
    for action in catalog.actions() {
        println!(
            "{:<16} {:<8} {:<40} {}",
            action.name(),
            format!("{:?}", action.mode()).to_lowercase(),
            action.template(),
            action.placeholders().join(",")
        );
    }
    println!(
        "{}: {} field(s), {} action(s) OK",
        path.display(),
        catalog.fields().len(),
        catalog.actions().len()
    );
    Ok(())
}
