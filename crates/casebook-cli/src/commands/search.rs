//! The `casebook search` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use casebook_core::filter::ScenarioFilter;
use casebook_core::model::Difficulty;
use casebook_core::report::CatalogView;

use crate::commands::{resolve_catalog, scenario_table};
use crate::config::load_config_from;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    query: String,
    category: Option<String>,
    difficulty: Option<String>,
    tags: Option<String>,
    format: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = resolve_catalog(&config, catalog_path)?;

    let difficulty = match difficulty.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(d) => Some(d.parse::<Difficulty>()?),
    };

    let tags: Vec<String> = tags
        .map(|t| t.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();

    let filter = ScenarioFilter::new()
        .with_query(query)
        .with_category(category.unwrap_or_default())
        .with_difficulty(difficulty)
        .with_tags(tags);

    let view = CatalogView::build(&catalog, &filter);
    tracing::info!(
        catalog = %catalog.id,
        matched = view.matches.len(),
        total = catalog.len(),
        "search complete"
    );

    let format = format.unwrap_or_else(|| config.default_format.clone());
    let rendered = match format.as_str() {
        "json" => {
            if let Some(path) = &output {
                view.save_json(path)?;
                eprintln!("Results saved to: {}", path.display());
                return Ok(());
            }
            serde_json::to_string_pretty(&view)?
        }
        "markdown" | "md" => view.to_markdown(),
        "text" => render_text(&view),
        other => anyhow::bail!("unknown format: {other} (expected text, json, or markdown)"),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Results saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_text(view: &CatalogView) -> String {
    let header = format!(
        "{}: showing {} of {} scenarios",
        view.catalog.name,
        view.matches.len(),
        view.catalog.scenario_count
    );
    if view.matches.is_empty() {
        format!("{header}\nNo scenarios match the current filters.")
    } else {
        format!("{header}\n{}", scenario_table(&view.matches))
    }
}
