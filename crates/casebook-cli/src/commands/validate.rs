//! The `casebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use casebook_core::parser::{catalog_files, parse_catalog, validate_catalog};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let files = if catalog_path.is_dir() {
        catalog_files(&catalog_path)?
    } else {
        vec![catalog_path.clone()]
    };

    let mut total_warnings = 0;
    let mut failed = 0;
    let mut loaded = 0;

    for path in &files {
        let catalog = match parse_catalog(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                println!("{}: ERROR: {e:#}", path.display());
                failed += 1;
                continue;
            }
        };
        loaded += 1;

        println!("Catalog: {} ({} scenarios)", catalog.name, catalog.len());

        let warnings = validate_catalog(&catalog);
        for w in &warnings {
            let prefix = w
                .scenario_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if failed > 0 {
        anyhow::bail!(
            "{failed} of {} catalog file(s) failed to load under {}",
            files.len(),
            catalog_path.display()
        );
    }

    if loaded == 0 {
        println!("No catalogs found.");
    } else if total_warnings == 0 {
        println!("All catalogs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
