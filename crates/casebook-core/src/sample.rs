//! Built-in sample data.
//!
//! Used when no catalog file is configured, and as fixtures in tests.

use chrono::NaiveDate;

use crate::exam::{ExamDifficulty, MockExam};
use crate::model::{Catalog, Difficulty, Scenario};
use crate::progress::{CompletedScenario, StreakDay};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Only called with literal calendar dates below.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The three sample practice scenarios.
pub fn sample_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "1".into(),
            title: "Acute Chest Pain Assessment".into(),
            category: "Emergency Medicine".into(),
            difficulty: Difficulty::Intermediate,
            duration: "20 mins".into(),
            description: "Practice evaluating a patient presenting with acute chest pain and \
                          determine the appropriate diagnosis and treatment plan."
                .into(),
            tags: tags(&["Cardiology", "Emergency", "Assessment"]),
        },
        Scenario {
            id: "2".into(),
            title: "Pediatric Respiratory Distress".into(),
            category: "Pediatrics".into(),
            difficulty: Difficulty::Advanced,
            duration: "25 mins".into(),
            description: "Handle a case of severe respiratory distress in a young patient, \
                          focusing on quick assessment and intervention."
                .into(),
            tags: tags(&["Pediatrics", "Emergency", "Respiratory"]),
        },
        Scenario {
            id: "3".into(),
            title: "Basic Patient History Taking".into(),
            category: "General Practice".into(),
            difficulty: Difficulty::Beginner,
            duration: "15 mins".into(),
            description: "Learn and practice the fundamentals of taking a comprehensive \
                          patient history."
                .into(),
            tags: tags(&["Communication", "History Taking", "Basic Skills"]),
        },
    ]
}

/// The sample scenarios wrapped in a catalog.
pub fn sample_catalog() -> Catalog {
    Catalog {
        id: "sample".into(),
        name: "Medical Scenarios".into(),
        description: "Practice with our comprehensive collection of medical scenarios".into(),
        scenarios: sample_scenarios(),
    }
}

/// Full, mini, and practice mock exams.
pub fn sample_mock_exams() -> Vec<MockExam> {
    vec![
        MockExam {
            id: 1,
            title: "Full PLAB 2 Mock Exam".into(),
            description: "Complete mock exam with 16 stations covering various clinical \
                          scenarios."
                .into(),
            duration_minutes: 180,
            stations: 16,
            difficulty: ExamDifficulty::Hard,
        },
        MockExam {
            id: 2,
            title: "Mini Mock Exam".into(),
            description: "Short mock exam with 8 stations focusing on common scenarios.".into(),
            duration_minutes: 90,
            stations: 8,
            difficulty: ExamDifficulty::Medium,
        },
        MockExam {
            id: 3,
            title: "Practice Mock Exam".into(),
            description: "Beginner-friendly mock exam with 4 stations and extended time \
                          limits."
                .into(),
            duration_minutes: 60,
            stations: 4,
            difficulty: ExamDifficulty::Easy,
        },
    ]
}

/// Recently completed scenarios, newest first.
pub fn sample_completed() -> Vec<CompletedScenario> {
    vec![
        CompletedScenario {
            id: "1".into(),
            title: "Acute Chest Pain Assessment".into(),
            completed_at: date(2024, 3, 15),
            score: 92,
            feedback: "Excellent communication skills and thorough assessment.".into(),
        },
        CompletedScenario {
            id: "2".into(),
            title: "Pediatric Respiratory Distress".into(),
            completed_at: date(2024, 3, 14),
            score: 85,
            feedback: "Good clinical reasoning, could improve on time management.".into(),
        },
        CompletedScenario {
            id: "3".into(),
            title: "Basic Patient History Taking".into(),
            completed_at: date(2024, 3, 13),
            score: 90,
            feedback: "Very thorough history taking, well-structured approach.".into(),
        },
    ]
}

/// One week of practice activity, newest first.
pub fn sample_streak() -> Vec<StreakDay> {
    [
        (15, true, 45),
        (14, true, 30),
        (13, true, 60),
        (12, false, 0),
        (11, true, 25),
        (10, true, 40),
        (9, true, 35),
    ]
    .into_iter()
    .map(|(day, completed, minutes)| StreakDay {
        date: date(2024, 3, day),
        completed,
        minutes,
    })
    .collect()
}
