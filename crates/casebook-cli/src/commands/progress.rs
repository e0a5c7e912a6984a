//! The `casebook progress` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use casebook_core::progress::{latest_activity, ProgressSummary, TimeRange};
use casebook_core::sample::{sample_completed, sample_streak};

use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    range: Option<String>,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    use comfy_table::{Cell, Table};

    let config = load_config_from(config_path.as_deref())?;

    let range = match range {
        Some(r) => r.parse::<TimeRange>()?,
        None => config.default_range,
    };

    let completed = sample_completed();
    let days = sample_streak();

    let as_of = as_of
        .or_else(|| latest_activity(&completed, &days))
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let summary = ProgressSummary::compute(&completed, &days, range, as_of);
    tracing::debug!(?summary, "computed progress summary");

    println!("Progress for the {range} ending {as_of}");
    println!();
    println!("  Learning streak:      {} days", summary.current_streak);
    println!("  Scenarios completed:  {}", summary.completed);
    match summary.average_score {
        Some(avg) => println!("  Average score:        {avg:.0}%"),
        None => println!("  Average score:        -"),
    }
    if let Some(best) = summary.best_score {
        println!("  Best score:           {best}%");
    }
    println!(
        "  Practice time:        {:.1} hours over {} active days",
        summary.practice_hours(),
        summary.active_days
    );

    let streak_line: String = {
        let mut ordered = days.clone();
        ordered.sort_by_key(|d| d.date);
        ordered
            .iter()
            .filter(|d| d.date <= as_of)
            .map(|d| if d.completed { '✓' } else { '×' })
            .collect()
    };
    if !streak_line.is_empty() {
        println!("  Recent days:          {streak_line}");
    }

    let recent: Vec<_> = completed
        .iter()
        .filter(|c| range.contains(c.completed_at, as_of))
        .collect();
    if !recent.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Scenario", "Completed", "Score", "Feedback"]);
        for c in recent {
            table.add_row(vec![
                Cell::new(&c.title),
                Cell::new(c.completed_at),
                Cell::new(format!("{}%", c.score)),
                Cell::new(&c.feedback),
            ]);
        }
        println!("\nRecently Completed\n{table}");
    }

    Ok(())
}
