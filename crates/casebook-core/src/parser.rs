//! TOML catalog parser.
//!
//! Loads scenario catalogs from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Difficulty, Scenario};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    scenarios: Vec<TomlScenario>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlScenario {
    id: String,
    title: String,
    category: String,
    difficulty: String,
    duration: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let scenarios = parsed
        .scenarios
        .into_iter()
        .map(|s| {
            let difficulty = s
                .difficulty
                .parse::<Difficulty>()
                .with_context(|| format!("scenario '{}' in {}", s.id, source_path.display()))?;

            Ok(Scenario {
                id: s.id,
                title: s.title,
                category: s.category,
                difficulty,
                duration: s.duration,
                description: s.description,
                tags: s.tags,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        catalog = %parsed.catalog.id,
        scenarios = scenarios.len(),
        "parsed catalog from {}",
        source_path.display()
    );

    Ok(Catalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        scenarios,
    })
}

/// Recursively list all `.toml` files under a directory, in sorted order.
pub fn catalog_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    let mut files = Vec::new();
    for path in entries {
        if path.is_dir() {
            files.extend(catalog_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }

    Ok(files)
}

/// Recursively load all `.toml` catalog files from a directory.
///
/// Files that fail to parse are skipped with a warning.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    for path in catalog_files(dir)? {
        match parse_catalog(&path) {
            Ok(catalog) => catalogs.push(catalog),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(catalogs)
}

/// Load a catalog file, or every catalog in a directory.
pub fn load_catalogs(path: &Path) -> Result<Vec<Catalog>> {
    if path.is_dir() {
        load_catalog_directory(path)
    } else {
        Ok(vec![parse_catalog(path)?])
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The scenario ID (if applicable).
    pub scenario_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn scenario(id: &str, message: impl Into<String>) -> Self {
        Self {
            scenario_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.scenarios.is_empty() {
        warnings.push(ValidationWarning {
            scenario_id: None,
            message: "catalog has no scenarios".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for scenario in &catalog.scenarios {
        if !seen_ids.insert(scenario.id.as_str()) {
            warnings.push(ValidationWarning::scenario(
                &scenario.id,
                format!("duplicate scenario ID: {}", scenario.id),
            ));
        }
    }

    for scenario in &catalog.scenarios {
        let blank = [
            ("title", &scenario.title),
            ("description", &scenario.description),
            ("category", &scenario.category),
            ("duration", &scenario.duration),
        ];
        for (field, value) in blank {
            if value.trim().is_empty() {
                warnings.push(ValidationWarning::scenario(
                    &scenario.id,
                    format!("{field} is empty"),
                ));
            }
        }

        if scenario.category != scenario.category.trim() {
            warnings.push(ValidationWarning::scenario(
                &scenario.id,
                format!(
                    "category '{}' has surrounding whitespace and will not match filters",
                    scenario.category
                ),
            ));
        }

        let mut seen_tags = HashSet::new();
        for tag in &scenario.tags {
            if !seen_tags.insert(tag.to_lowercase()) {
                warnings.push(ValidationWarning::scenario(
                    &scenario.id,
                    format!("duplicate tag: {tag}"),
                ));
            }
        }
    }

    warnings
}
