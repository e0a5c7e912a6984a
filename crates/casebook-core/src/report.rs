//! Catalog views: a filtered snapshot of a catalog with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::filter::{filter_owned, ScenarioFilter};
use crate::model::{Catalog, Difficulty, Scenario};

/// The result of applying a filter to a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogView {
    /// Unique view identifier.
    pub id: Uuid,
    /// When the view was built.
    pub created_at: DateTime<Utc>,
    /// Summary of the source catalog.
    pub catalog: CatalogSummary,
    /// The predicates that were applied.
    pub filter: ScenarioFilter,
    /// Category options, taken from the full catalog.
    pub categories: Vec<String>,
    /// Difficulty options, taken from the full catalog.
    pub difficulties: Vec<Difficulty>,
    /// Matching scenarios in catalog order.
    pub matches: Vec<Scenario>,
}

/// Summary of a catalog (without the scenario records).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub scenario_count: usize,
}

impl CatalogView {
    /// Apply `filter` to `catalog` and capture the result.
    pub fn build(catalog: &Catalog, filter: &ScenarioFilter) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary {
                id: catalog.id.clone(),
                name: catalog.name.clone(),
                scenario_count: catalog.len(),
            },
            filter: filter.clone(),
            categories: catalog.categories().into_iter().map(String::from).collect(),
            difficulties: catalog.difficulties(),
            matches: filter_owned(&catalog.scenarios, filter),
        }
    }

    /// Save the view as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize view")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write view to {}", path.display()))?;
        Ok(())
    }

    /// Load a view from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read view from {}", path.display()))?;
        let view: CatalogView =
            serde_json::from_str(&content).context("failed to parse view JSON")?;
        Ok(view)
    }

    /// Format the matches as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.catalog.name));
        md.push_str(&format!(
            "**Showing:** {} of {} scenarios\n\n",
            self.matches.len(),
            self.catalog.scenario_count
        ));

        if self.matches.is_empty() {
            md.push_str("No scenarios match the current filters.\n");
            return md;
        }

        md.push_str("| ID | Title | Category | Difficulty | Duration | Tags |\n");
        md.push_str("|----|-------|----------|------------|----------|------|\n");
        for s in &self.matches {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                escape_cell(&s.id),
                escape_cell(&s.title),
                escape_cell(&s.category),
                escape_cell(&s.difficulty.to_string()),
                escape_cell(&s.duration),
                escape_cell(&s.tags.join(", "))
            ));
        }

        md
    }
}

/// Make a value safe for a single table cell: pipes are escaped and line
/// breaks collapse to spaces.
fn escape_cell(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;

    #[test]
    fn build_applies_filter_but_keeps_full_facets() {
        let catalog = sample_catalog();
        let filter = ScenarioFilter::new().with_category("Pediatrics");
        let view = CatalogView::build(&catalog, &filter);

        assert_eq!(view.catalog.scenario_count, 3);
        assert_eq!(view.matches.len(), 1);
        assert_eq!(view.matches[0].id, "2");
        assert_eq!(view.categories.len(), 3);
        assert_eq!(view.difficulties.len(), 3);
    }

    #[test]
    fn json_roundtrip() {
        let catalog = sample_catalog();
        let filter = ScenarioFilter::new()
            .with_query("chest")
            .with_difficulty(Some(Difficulty::Intermediate));
        let view = CatalogView::build(&catalog, &filter);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("views/view.json");
        view.save_json(&path).unwrap();
        let loaded = CatalogView::load_json(&path).unwrap();

        assert_eq!(loaded.id, view.id);
        assert_eq!(loaded.filter, filter);
        assert_eq!(loaded.matches, view.matches);
    }

    #[test]
    fn load_missing_file() {
        assert!(CatalogView::load_json(Path::new("no_such_view.json")).is_err());
    }

    #[test]
    fn markdown_output() {
        let view = CatalogView::build(&sample_catalog(), &ScenarioFilter::new().with_query("history"));
        let md = view.to_markdown();
        assert!(md.contains("1 of 3 scenarios"));
        assert!(md.contains("Basic Patient History Taking"));
        assert!(md.contains("Communication, History Taking, Basic Skills"));
        assert!(!md.contains("Acute Chest Pain"));
    }

    #[test]
    fn markdown_without_matches() {
        let view = CatalogView::build(&sample_catalog(), &ScenarioFilter::new().with_query("zzz"));
        assert!(view.to_markdown().contains("No scenarios match"));
    }

    #[test]
    fn markdown_escapes_pipes() {
        let mut catalog = sample_catalog();
        catalog.scenarios[0].title = "Chest | Pain".into();
        let view = CatalogView::build(&catalog, &ScenarioFilter::new());
        assert!(view.to_markdown().contains("Chest \\| Pain"));
    }

    #[test]
    fn markdown_escapes_every_cell() {
        let mut catalog = sample_catalog();
        catalog.scenarios[0].id = "a|b".into();
        catalog.scenarios[0].title = "Chest\nPain\r\nOnset".into();
        catalog.scenarios[0].duration = "15\rmin".into();
        let view = CatalogView::build(&catalog, &ScenarioFilter::new());
        let md = view.to_markdown();

        assert!(md.contains("| a\\|b | Chest Pain Onset |"));
        assert!(md.contains("15 min"));
        let rows: Vec<&str> = md.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(rows.len(), 2 + catalog.scenarios.len());
    }
}
