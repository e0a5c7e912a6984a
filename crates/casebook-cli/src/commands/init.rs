//! The `casebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("casebook.toml").exists() {
        println!("casebook.toml already exists, skipping.");
    } else {
        std::fs::write("casebook.toml", SAMPLE_CONFIG)?;
        println!("Created casebook.toml");
    }

    std::fs::create_dir_all("catalogs")?;
    let sample_path = std::path::Path::new("catalogs/sample.toml");
    if sample_path.exists() {
        println!("catalogs/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_CATALOG)?;
        println!("Created catalogs/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add scenarios to catalogs/sample.toml");
    println!("  2. Run: casebook validate --catalog catalogs/sample.toml");
    println!("  3. Run: casebook search --query chest");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# casebook configuration

catalog = "catalogs/sample.toml"
featured_count = 2
default_format = "text"
default_range = "week"
"#;

const SAMPLE_CATALOG: &str = r#"[catalog]
id = "sample"
name = "Medical Scenarios"
description = "Practice with our comprehensive collection of medical scenarios"

[[scenarios]]
id = "1"
title = "Acute Chest Pain Assessment"
category = "Emergency Medicine"
difficulty = "Intermediate"
duration = "20 mins"
description = "Practice evaluating a patient presenting with acute chest pain and determine the appropriate diagnosis and treatment plan."
tags = ["Cardiology", "Emergency", "Assessment"]

[[scenarios]]
id = "2"
title = "Pediatric Respiratory Distress"
category = "Pediatrics"
difficulty = "Advanced"
duration = "25 mins"
description = "Handle a case of severe respiratory distress in a young patient, focusing on quick assessment and intervention."
tags = ["Pediatrics", "Emergency", "Respiratory"]

[[scenarios]]
id = "3"
title = "Basic Patient History Taking"
category = "General Practice"
difficulty = "Beginner"
duration = "15 mins"
description = "Learn and practice the fundamentals of taking a comprehensive patient history."
tags = ["Communication", "History Taking", "Basic Skills"]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn sample_catalog_matches_builtin() {
        let parsed =
            casebook_core::parser::parse_catalog_str(SAMPLE_CATALOG, Path::new("sample.toml"))
                .unwrap();
        assert_eq!(
            parsed.scenarios,
            casebook_core::sample::sample_catalog().scenarios
        );
    }

    #[test]
    fn sample_config_parses() {
        let config: crate::config::CasebookConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.featured_count, 2);
    }
}
