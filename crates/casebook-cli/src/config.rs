//! casebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use casebook_core::progress::TimeRange;

/// Top-level casebook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasebookConfig {
    /// Catalog file or directory used when `--catalog` is not given.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// How many scenarios `featured` shows.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    /// Output format for `search`: text, json, or markdown.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Reporting window for `progress`.
    #[serde(default)]
    pub default_range: TimeRange,
}

fn default_featured_count() -> usize {
    2
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for CasebookConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            featured_count: default_featured_count(),
            default_format: default_format(),
            default_range: TimeRange::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted verbatim and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + 2 + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `casebook.toml` in the current directory
/// 2. `~/.config/casebook/config.toml`
///
/// `CASEBOOK_CATALOG` overrides the configured catalog path.
pub fn load_config_from(path: Option<&Path>) -> Result<CasebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("casebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<CasebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CasebookConfig::default(),
    };

    if let Ok(catalog) = std::env::var("CASEBOOK_CATALOG") {
        if !catalog.is_empty() {
            config.catalog = Some(PathBuf::from(catalog));
        }
    }

    config.catalog = config
        .catalog
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    tracing::debug!(
        source = ?config_path,
        catalog = ?config.catalog,
        "loaded configuration"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("casebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_CASEBOOK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_CASEBOOK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_CASEBOOK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_vars"), "no_vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_CASEBOOK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_CASEBOOK_SELF_REF", "${_CASEBOOK_SELF_REF}");
        std::env::set_var("_CASEBOOK_INNER", "inner");
        std::env::set_var("_CASEBOOK_OUTER", "a/${_CASEBOOK_INNER}/b");
        assert_eq!(
            resolve_env_vars("${_CASEBOOK_SELF_REF}/catalogs"),
            "${_CASEBOOK_SELF_REF}/catalogs"
        );
        assert_eq!(
            resolve_env_vars("${_CASEBOOK_OUTER}-${_CASEBOOK_INNER}"),
            "a/${_CASEBOOK_INNER}/b-inner"
        );
        assert_eq!(resolve_env_vars("${_CASEBOOK_UNSET_VAR}x"), "x");
        std::env::remove_var("_CASEBOOK_SELF_REF");
        std::env::remove_var("_CASEBOOK_INNER");
        std::env::remove_var("_CASEBOOK_OUTER");
    }

    #[test]
    fn default_config() {
        let config = CasebookConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.featured_count, 2);
        assert_eq!(config.default_format, "text");
        assert_eq!(config.default_range, TimeRange::Week);
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
catalog = "catalogs/plab2-core.toml"
featured_count = 3
default_format = "markdown"
default_range = "month"
"#;
        let config: CasebookConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.catalog,
            Some(PathBuf::from("catalogs/plab2-core.toml"))
        );
        assert_eq!(config.featured_count, 3);
        assert_eq!(config.default_format, "markdown");
        assert_eq!(config.default_range, TimeRange::Month);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: CasebookConfig = toml::from_str("featured_count = 1").unwrap();
        assert_eq!(config.featured_count, 1);
        assert_eq!(config.default_format, "text");
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = load_config_from(Some(Path::new("/no/such/casebook.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casebook.toml");
        std::fs::write(&path, "featured_count = 5\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.featured_count, 5);
    }
}
