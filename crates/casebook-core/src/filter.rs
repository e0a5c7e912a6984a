//! Catalog filtering and facet projection.
//!
//! A [`ScenarioFilter`] combines up to four independent predicates. Every
//! predicate that is unset lets all scenarios through, so the default
//! filter is the identity. Filtering never reorders: the result is always
//! a subsequence of the input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Scenario};

/// User-supplied predicate values narrowing the visible set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFilter {
    /// Case-insensitive substring of the title or description. Empty matches all.
    #[serde(default)]
    pub query: String,
    /// Exact category match.
    #[serde(default)]
    pub category: Option<String>,
    /// Exact difficulty match.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Scenario must carry at least one of these tags (case-insensitive).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScenarioFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// An empty category is the same as no category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .collect();
        self
    }

    /// Returns `true` if no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.category.as_deref().is_none_or(str::is_empty)
            && self.difficulty.is_none()
            && self.tags.is_empty()
    }

    /// Returns `true` if the scenario passes every set predicate.
    pub fn matches(&self, scenario: &Scenario) -> bool {
        Matcher::new(self).matches(scenario)
    }
}

/// A filter with its text predicates lowercased once up front.
struct Matcher<'a> {
    filter: &'a ScenarioFilter,
    query: String,
    tags: Vec<String>,
}

impl<'a> Matcher<'a> {
    fn new(filter: &'a ScenarioFilter) -> Self {
        Self {
            filter,
            query: filter.query.to_lowercase(),
            tags: filter.tags.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    fn matches(&self, scenario: &Scenario) -> bool {
        self.matches_query(scenario)
            && self.matches_category(scenario)
            && self.matches_difficulty(scenario)
            && self.matches_tags(scenario)
    }

    fn matches_query(&self, scenario: &Scenario) -> bool {
        self.query.is_empty()
            || scenario.title.to_lowercase().contains(&self.query)
            || scenario.description.to_lowercase().contains(&self.query)
    }

    fn matches_category(&self, scenario: &Scenario) -> bool {
        match self.filter.category.as_deref() {
            None | Some("") => true,
            Some(category) => scenario.category == category,
        }
    }

    fn matches_difficulty(&self, scenario: &Scenario) -> bool {
        self.filter
            .difficulty
            .is_none_or(|difficulty| scenario.difficulty == difficulty)
    }

    fn matches_tags(&self, scenario: &Scenario) -> bool {
        self.tags.is_empty()
            || scenario
                .tags
                .iter()
                .any(|t| self.tags.contains(&t.to_lowercase()))
    }
}

/// Return the scenarios that pass `filter`, in their original order.
pub fn filter_scenarios<'a>(
    scenarios: &'a [Scenario],
    filter: &ScenarioFilter,
) -> Vec<&'a Scenario> {
    let matcher = Matcher::new(filter);
    let matches: Vec<&Scenario> = scenarios.iter().filter(|s| matcher.matches(s)).collect();
    tracing::debug!(
        total = scenarios.len(),
        matched = matches.len(),
        query = %filter.query,
        "filtered scenarios"
    );
    matches
}

/// Like [`filter_scenarios`], but returns owned records.
pub fn filter_owned(scenarios: &[Scenario], filter: &ScenarioFilter) -> Vec<Scenario> {
    filter_scenarios(scenarios, filter)
        .into_iter()
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order.
pub fn distinct_categories(scenarios: &[Scenario]) -> Vec<&str> {
    let mut seen = HashSet::new();
    scenarios
        .iter()
        .map(|s| s.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Distinct difficulties in first-seen order.
pub fn distinct_difficulties(scenarios: &[Scenario]) -> Vec<Difficulty> {
    let mut seen = HashSet::new();
    scenarios
        .iter()
        .map(|s| s.difficulty)
        .filter(|d| seen.insert(*d))
        .collect()
}
