//! Core data model types for casebook.
//!
//! These are the records the rest of the system works with: practice
//! scenarios, their difficulty levels, and the catalog that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::filter::{distinct_categories, distinct_difficulties};

/// A single practice case shown in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier for this scenario.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Clinical area, e.g. "Emergency Medicine". Open set.
    pub category: String,
    /// How demanding the scenario is.
    pub difficulty: Difficulty,
    /// Display string for the expected length, e.g. "20 mins".
    pub duration: String,
    /// What the learner practices in this scenario.
    #[serde(default)]
    pub description: String,
    /// Ordered labels shown alongside the scenario.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Scenario difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(ValueError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A named, ordered collection of scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this catalog.
    #[serde(default)]
    pub description: String,
    /// The scenarios, in display order.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Distinct categories across the whole catalog, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct_categories(&self.scenarios)
    }

    /// Distinct difficulties across the whole catalog, first-seen order.
    pub fn difficulties(&self) -> Vec<Difficulty> {
        distinct_difficulties(&self.scenarios)
    }

    /// The first `count` scenarios, highlighted ahead of the full list.
    pub fn featured(&self, count: usize) -> &[Scenario] {
        &self.scenarios[..count.min(self.scenarios.len())]
    }

    /// Look up a scenario by identifier.
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
