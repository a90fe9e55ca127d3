use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum TimetableError {
    /// Generation was requested without any faculty.
    #[error("no faculty supplied; enter at least one faculty with subjects")]
    EmptyFacultyList,

    /// One or more faculty records failed validation.
    #[error("invalid faculty record: {}", join(.0))]
    InvalidFacultyRecord(Vec<ValidationError>),

    /// The grid axes failed validation.
    #[error("invalid grid shape: {}", join(.0))]
    InvalidGridShape(Vec<ValidationError>),

    /// A semester name that is not part of the grid.
    #[error("unknown semester: {0}")]
    UnknownSemester(String),

    /// Input file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// CSV encoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, TimetableError>;
