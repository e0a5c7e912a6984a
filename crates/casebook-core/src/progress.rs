//! Learner progress: completed scenarios, practice streaks, and summaries.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A scenario the learner has finished, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedScenario {
    pub id: String,
    pub title: String,
    pub completed_at: NaiveDate,
    /// Percentage, 0 to 100.
    pub score: u8,
    pub feedback: String,
}

/// Practice activity for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakDay {
    pub date: NaiveDate,
    pub completed: bool,
    pub minutes: u32,
}

/// Reporting window for progress summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    /// Length of the window in days.
    pub fn days(self) -> u64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Year => 365,
        }
    }

    /// Whether `date` falls in the window ending at `as_of` (inclusive).
    pub fn contains(self, date: NaiveDate, as_of: NaiveDate) -> bool {
        if date > as_of {
            return false;
        }
        match as_of.checked_sub_days(Days::new(self.days())) {
            Some(start) => date > start,
            None => true,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
            TimeRange::Year => write!(f, "year"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            _ => Err(ValueError::UnknownTimeRange(s.to_string())),
        }
    }
}

/// Consecutive completed days, counted back from the most recent recorded day.
///
/// Stops at the first day without completed practice, or at a calendar gap
/// between recorded days. Input order does not matter.
pub fn current_streak(days: &[StreakDay]) -> u32 {
    let mut sorted: Vec<&StreakDay> = days.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;
    for day in sorted {
        if !day.completed {
            break;
        }
        if let Some(expected) = expected {
            if day.date != expected {
                break;
            }
        }
        streak += 1;
        expected = day.date.pred_opt();
    }
    streak
}

/// The latest date with any recorded activity.
pub fn latest_activity(completed: &[CompletedScenario], days: &[StreakDay]) -> Option<NaiveDate> {
    completed
        .iter()
        .map(|c| c.completed_at)
        .chain(days.iter().map(|d| d.date))
        .max()
}

/// Aggregate progress over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub range: TimeRange,
    pub as_of: NaiveDate,
    /// Scenarios completed inside the window.
    pub completed: usize,
    /// Mean score of those scenarios, if any.
    pub average_score: Option<f64>,
    pub best_score: Option<u8>,
    /// Practice minutes recorded inside the window.
    pub practice_minutes: u32,
    /// Days with completed practice inside the window.
    pub active_days: usize,
    /// See [`current_streak`]; computed over days up to `as_of`.
    pub current_streak: u32,
}

impl ProgressSummary {
    pub fn compute(
        completed: &[CompletedScenario],
        days: &[StreakDay],
        range: TimeRange,
        as_of: NaiveDate,
    ) -> Self {
        let in_range: Vec<&CompletedScenario> = completed
            .iter()
            .filter(|c| range.contains(c.completed_at, as_of))
            .collect();

        let average_score = if in_range.is_empty() {
            None
        } else {
            let total: u32 = in_range.iter().map(|c| u32::from(c.score)).sum();
            Some(f64::from(total) / in_range.len() as f64)
        };
        let best_score = in_range.iter().map(|c| c.score).max();

        let window_days: Vec<&StreakDay> = days
            .iter()
            .filter(|d| range.contains(d.date, as_of))
            .collect();
        let practice_minutes = window_days.iter().map(|d| d.minutes).sum();
        let active_days = window_days.iter().filter(|d| d.completed).count();

        let up_to: Vec<StreakDay> = days.iter().copied().filter(|d| d.date <= as_of).collect();

        Self {
            range,
            as_of,
            completed: in_range.len(),
            average_score,
            best_score,
            practice_minutes,
            active_days,
            current_streak: current_streak(&up_to),
        }
    }

    /// Practice time as fractional hours.
    pub fn practice_hours(&self) -> f64 {
        f64::from(self.practice_minutes) / 60.0
    }
}
