//! The `casebook featured` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::resolve_catalog;
use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    count: Option<usize>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = resolve_catalog(&config, catalog_path)?;
    let count = count.unwrap_or(config.featured_count);

    let featured = catalog.featured(count);
    if featured.is_empty() {
        println!("No featured scenarios.");
        return Ok(());
    }

    println!("Featured Scenarios");
    for scenario in featured {
        println!();
        println!(
            "{} [{}] {}",
            scenario.title, scenario.difficulty, scenario.duration
        );
        if !scenario.description.is_empty() {
            println!("  {}", scenario.description);
        }
        if !scenario.tags.is_empty() {
            println!("  Tags: {}", scenario.tags.join(", "));
        }
    }

    Ok(())
}
