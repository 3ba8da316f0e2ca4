//! Schedule Gen command-line entry point.
//!
//! Generates `schedule.html` and `style.css` for one term from the term's
//! `schedule.json`.
//!
//! # Usage
//!
//! ```bash
//! schedule-gen fall 24 --school-dir ~/Documents/school
//! schedule-gen winter 25 --minutes-per-row 15 --emit-layout --dry-run
//! ```
//!
//! # Environment Variables
//!
//! - `SCHEDULE_GEN_SCHOOL_DIR`: root directory holding `<season>_<yy>` term directories
//! - `SCHEDULE_GEN_MINUTES_PER_ROW`: row granularity in minutes (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use schedule_gen::config::ScheduleConfig;
use schedule_gen::services::{generate_term, ScheduleMaker, Term, TermPaths};

#[derive(Parser)]
#[command(name = "schedule-gen")]
#[command(about = "Generate a weekly class calendar page for one term")]
#[command(version)]
struct Cli {
    /// Term season: fall, winter, spring or summer
    season: String,

    /// Last two digits of the year
    year: String,

    /// Directory containing the term directories
    #[arg(long, value_name = "DIR")]
    school_dir: Option<PathBuf>,

    /// Configuration file (default: schedule_gen.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minutes represented by one calendar row
    #[arg(long)]
    minutes_per_row: Option<u32>,

    /// Fail on weekday keys other than M, T, W, R, F
    #[arg(long)]
    strict: bool,

    /// Print the computed layout as JSON on stdout
    #[arg(long)]
    emit_layout: bool,

    /// Compute everything but do not write any files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config =
        ScheduleConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(minutes) = cli.minutes_per_row {
        config.layout.minutes_per_row = minutes;
    }
    if cli.strict {
        config.layout.strict_weekdays = true;
    }
    if let Some(dir) = cli.school_dir {
        config.paths.school_dir = Some(dir);
    }
    config.validate()?;

    let term = Term::parse(&cli.season, &cli.year)?;
    let school_dir = config.paths.school_dir.clone().context(
        "No school directory configured; pass --school-dir or set SCHEDULE_GEN_SCHOOL_DIR",
    )?;
    let paths = TermPaths::new(&school_dir, &term, &config);
    info!("Term directory: {}", paths.term_dir.display());

    let maker = if cli.dry_run {
        ScheduleMaker::from_file(&paths.source, &config)?
    } else {
        generate_term(&paths, &config)
            .with_context(|| format!("Failed to generate schedule for {}", term.directory_name()))?
    };

    if cli.emit_layout {
        println!("{}", serde_json::to_string_pretty(maker.layout())?);
    }

    info!(
        "Done: {} courses, {} events",
        maker.schedule().courses.len(),
        maker.layout().blocks.len()
    );
    Ok(())
}
