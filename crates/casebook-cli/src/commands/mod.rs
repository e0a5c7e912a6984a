pub mod exams;
pub mod facets;
pub mod featured;
pub mod init;
pub mod progress;
pub mod search;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use casebook_core::model::{Catalog, Scenario};
use casebook_core::parser;
use casebook_core::sample::sample_catalog;

use crate::config::CasebookConfig;

/// Resolve the catalog a command works on.
///
/// An explicit path wins, then the configured catalog, then the built-in
/// sample catalog. A directory is merged into a single catalog in file order.
pub fn resolve_catalog(config: &CasebookConfig, explicit: Option<PathBuf>) -> Result<Catalog> {
    match explicit.or_else(|| config.catalog.clone()) {
        Some(path) => load_merged(&path),
        None => {
            tracing::debug!("no catalog configured, using built-in sample catalog");
            Ok(sample_catalog())
        }
    }
}

fn load_merged(path: &Path) -> Result<Catalog> {
    let mut catalogs = parser::load_catalogs(path)?;
    match catalogs.len() {
        0 => anyhow::bail!("no catalogs found in {}", path.display()),
        1 => Ok(catalogs.remove(0)),
        n => {
            tracing::info!("merging {n} catalogs from {}", path.display());
            let name = catalogs
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(" + ");
            let scenarios = catalogs.into_iter().flat_map(|c| c.scenarios).collect();
            Ok(Catalog {
                id: "combined".into(),
                name,
                description: format!("All catalogs under {}", path.display()),
                scenarios,
            })
        }
    }
}

/// Render scenarios as a table.
pub fn scenario_table<'a>(scenarios: impl IntoIterator<Item = &'a Scenario>) -> comfy_table::Table {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Title",
        "Category",
        "Difficulty",
        "Duration",
        "Tags",
    ]);

    for s in scenarios {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.title),
            Cell::new(&s.category),
            Cell::new(s.difficulty),
            Cell::new(&s.duration),
            Cell::new(s.tags.join(", ")),
        ]);
    }

    table
}
