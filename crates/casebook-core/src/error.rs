//! Value parsing errors.
//!
//! Returned when a string from a catalog file, the command line, or a
//! config file does not name a known enumerated value.

use thiserror::Error;

/// Errors that can occur when parsing enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not one of Beginner, Intermediate, Advanced.
    #[error("unknown difficulty: {0} (expected Beginner, Intermediate, or Advanced)")]
    UnknownDifficulty(String),

    /// Not one of Easy, Medium, Hard.
    #[error("unknown exam difficulty: {0} (expected Easy, Medium, or Hard)")]
    UnknownExamDifficulty(String),

    /// Not one of week, month, year.
    #[error("unknown time range: {0} (expected week, month, or year)")]
    UnknownTimeRange(String),
}

impl ValueError {
    /// The offending input.
    pub fn input(&self) -> &str {
        match self {
            ValueError::UnknownDifficulty(s)
            | ValueError::UnknownExamDifficulty(s)
            | ValueError::UnknownTimeRange(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_input_and_choices() {
        let err = ValueError::UnknownDifficulty("Expert".into());
        assert_eq!(err.input(), "Expert");
        let msg = err.to_string();
        assert!(msg.contains("Expert"));
        assert!(msg.contains("Beginner"));
    }
}
