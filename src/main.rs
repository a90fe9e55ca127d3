mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use u_timetable::config::TimetableConfig;
use u_timetable::export::{semester_tables, SemesterTable, EXPORT_MIME};
use u_timetable::scheduler::{FulfillmentReport, SlotAssigner};

use crate::cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TimetableConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => TimetableConfig::default(),
    };
    let config = config
        .with_seed_override(args.seed)
        .with_extra_faculty(args.faculty.iter().cloned());

    let request = config.to_request().context("invalid faculty input")?;
    if request.faculty.is_empty() {
        warn!("no faculty with subjects entered, nothing generated");
        eprintln!("Please enter at least one faculty with subjects.");
        return Ok(());
    }

    let export_semester = args
        .export_semester(&request.shape)
        .context("invalid --semester")?;

    info!(
        faculty = request.faculty.len(),
        semesters = request.shape.semesters.len(),
        seed = ?request.seed,
        "generating timetable"
    );
    let timetable =
        SlotAssigner::assign_request(&request).context("failed to generate timetable")?;

    let report = FulfillmentReport::calculate(&timetable, &request.faculty);
    for shortfall in report.shortfalls() {
        warn!(
            semester = %shortfall.semester,
            faculty = %shortfall.faculty,
            requested = shortfall.requested,
            assigned = shortfall.assigned,
            "weekly hours not fully assigned"
        );
    }

    if args.json {
        let json =
            serde_json::to_string_pretty(&timetable).context("failed to encode timetable")?;
        println!("{json}");
    } else {
        for table in semester_tables(&timetable) {
            println!("{} Timetable", table.semester());
            println!("{table}");
        }
    }

    let Some(semester) = export_semester else {
        return Ok(());
    };
    let csv = SemesterTable::new(&timetable, semester)
        .and_then(|table| table.to_csv())
        .with_context(|| format!("failed to export semester '{semester}'"))?;
    std::fs::write(&args.csv, csv)
        .with_context(|| format!("failed to write {}", args.csv.display()))?;
    info!(path = %args.csv.display(), mime = EXPORT_MIME, semester, "timetable exported");
    eprintln!("Saved {semester} to {}", args.csv.display());

    Ok(())
}
