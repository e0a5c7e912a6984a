//! The `casebook exams` command.

use anyhow::Result;

use casebook_core::exam::{exams_by_difficulty, ExamDifficulty};
use casebook_core::sample::sample_mock_exams;

pub fn execute(difficulty: Option<String>) -> Result<()> {
    use comfy_table::{Cell, Table};

    let difficulty = difficulty
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::parse::<ExamDifficulty>)
        .transpose()?;

    let exams = sample_mock_exams();
    let selected = exams_by_difficulty(&exams, difficulty);

    if selected.is_empty() {
        println!("No mock exams match.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Title",
        "Difficulty",
        "Duration",
        "Stations",
        "Per Station",
    ]);

    for exam in selected {
        table.add_row(vec![
            Cell::new(exam.id),
            Cell::new(&exam.title),
            Cell::new(exam.difficulty),
            Cell::new(format!("{} min", exam.duration_minutes)),
            Cell::new(exam.stations),
            Cell::new(format!("{} min", exam.minutes_per_station())),
        ]);
    }

    println!("Mock Exams\n{table}");

    Ok(())
}
