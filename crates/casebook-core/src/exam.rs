//! Mock exam records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A timed, multi-station practice exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockExam {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Total time allowed.
    pub duration_minutes: u32,
    /// Number of stations in the circuit.
    pub stations: u32,
    pub difficulty: ExamDifficulty,
}

impl MockExam {
    /// Whole minutes available per station; zero when there are no stations.
    pub fn minutes_per_station(&self) -> u32 {
        self.duration_minutes
            .checked_div(self.stations)
            .unwrap_or(0)
    }
}

/// Mock exam difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamDifficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for ExamDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamDifficulty::Easy => write!(f, "Easy"),
            ExamDifficulty::Medium => write!(f, "Medium"),
            ExamDifficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for ExamDifficulty {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(ExamDifficulty::Easy),
            "medium" => Ok(ExamDifficulty::Medium),
            "hard" => Ok(ExamDifficulty::Hard),
            _ => Err(ValueError::UnknownExamDifficulty(s.to_string())),
        }
    }
}

/// Exams of the given difficulty, or all of them, in their original order.
pub fn exams_by_difficulty(
    exams: &[MockExam],
    difficulty: Option<ExamDifficulty>,
) -> Vec<&MockExam> {
    exams
        .iter()
        .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
        .collect()
}
