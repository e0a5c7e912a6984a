//! The `casebook facets` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::resolve_catalog;
use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>, catalog_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = resolve_catalog(&config, catalog_path)?;

    println!("Catalog: {} ({} scenarios)", catalog.name, catalog.len());

    println!("\nCategories:");
    println!("  All Categories");
    for category in catalog.categories() {
        println!("  {category}");
    }

    println!("\nDifficulties:");
    println!("  All Difficulties");
    for difficulty in catalog.difficulties() {
        println!("  {difficulty}");
    }

    Ok(())
}
