//! casebook CLI: browse and search the exam-practice scenario catalog.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "casebook",
    version,
    about = "Exam-practice scenario catalog and progress tracker"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter scenarios
    Search {
        /// Catalog file or directory (defaults to the configured catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Case-insensitive text matched against titles and descriptions
        #[arg(long, short, default_value = "")]
        query: String,

        /// Exact category name
        #[arg(long)]
        category: Option<String>,

        /// Beginner, Intermediate, or Advanced
        #[arg(long)]
        difficulty: Option<String>,

        /// Comma-separated tags; a scenario needs at least one
        #[arg(long)]
        tags: Option<String>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Write the result to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the category and difficulty filter options
    Facets {
        /// Catalog file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show featured scenarios
    Featured {
        /// Catalog file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Number of scenarios to feature
        #[arg(long)]
        count: Option<usize>,
    },

    /// List mock exams
    Exams {
        /// Easy, Medium, or Hard
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Summarise practice progress
    Progress {
        /// Reporting window: week, month, year
        #[arg(long)]
        range: Option<String>,

        /// End of the reporting window (YYYY-MM-DD); defaults to the latest activity
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create starter config and sample catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("casebook=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config;

    let result = match cli.command {
        Commands::Search {
            catalog,
            query,
            category,
            difficulty,
            tags,
            format,
            output,
        } => commands::search::execute(
            config_path,
            catalog,
            query,
            category,
            difficulty,
            tags,
            format,
            output,
        ),
        Commands::Facets { catalog } => commands::facets::execute(config_path, catalog),
        Commands::Featured { catalog, count } => {
            commands::featured::execute(config_path, catalog, count)
        }
        Commands::Exams { difficulty } => commands::exams::execute(difficulty),
        Commands::Progress { range, as_of } => {
            commands::progress::execute(config_path, range, as_of)
        }
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
