use std::path::PathBuf;

use clap::Parser;
use u_timetable::form::FacultyForm;
use u_timetable::models::GridShape;
use u_timetable::TimetableError;

/// Randomized semester timetable generator.
///
/// Reads faculty rows from a TOML file and/or `--faculty` flags, fills every
/// semester with random slot assignments, prints one table per semester and
/// exports one semester as CSV.
#[derive(Parser, Debug)]
#[command(name = "u-timetable", version, about = "Randomized semester timetable generator")]
pub struct CliArgs {
    /// TOML input file (seed, shape, faculty rows)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Extra faculty row: "Name|Subject, Subject|Hours" (repeatable)
    #[arg(long = "faculty", short = 'f')]
    pub faculty: Vec<FacultyForm>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Semester to export (default: the last one)
    #[arg(long, conflicts_with = "no_csv")]
    pub semester: Option<String>,

    /// CSV output path
    #[arg(long, default_value = u_timetable::export::EXPORT_FILE_NAME)]
    pub csv: PathBuf,

    /// Do not write a CSV file
    #[arg(long)]
    pub no_csv: bool,

    /// Print the timetable as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// The semester to write as CSV, or `None` with `--no-csv`.
    ///
    /// `--semester` must name a semester of `shape`; otherwise the last
    /// semester is exported.
    pub fn export_semester<'a>(
        &'a self,
        shape: &'a GridShape,
    ) -> Result<Option<&'a str>, TimetableError> {
        if self.no_csv {
            return Ok(None);
        }
        match &self.semester {
            Some(s) if shape.semesters.contains(s) => Ok(Some(s.as_str())),
            Some(s) => Err(TimetableError::UnknownSemester(s.clone())),
            None => shape
                .semesters
                .last()
                .map(|s| Some(s.as_str()))
                .ok_or_else(|| TimetableError::Config("grid has no semesters".into())),
        }
    }
}
