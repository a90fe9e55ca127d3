//! Input validation for timetable generation.
//!
//! Checks structural integrity of faculty records and grid shapes before
//! assignment. Detects:
//! - Empty faculty lists
//! - Blank or duplicate faculty names
//! - Faculty without subjects, or with blank subjects
//! - Weekly-hours targets outside the accepted range
//! - Grid shapes with an empty axis or duplicate axis names
//!
//! Every check runs; all problems are reported together.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Faculty, GridShape, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No faculty were supplied.
    EmptyFacultyList,
    /// A faculty name is empty or whitespace.
    BlankName,
    /// Two faculty share the same name.
    DuplicateName,
    /// A faculty has no subjects.
    NoSubjects,
    /// A subject entry is empty or whitespace.
    BlankSubject,
    /// Weekly hours outside the accepted range.
    HoursOutOfRange,
    /// A grid axis has no entries.
    EmptyAxis,
    /// A grid axis repeats a name.
    DuplicateAxisEntry,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the faculty list for a generation request.
///
/// Checks:
/// 1. At least one faculty
/// 2. Every name is non-blank
/// 3. No duplicate names
/// 4. Every faculty has at least one subject, none blank
/// 5. Weekly hours within `MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_faculty(faculty: &[Faculty]) -> ValidationResult {
    if faculty.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyFacultyList,
            "At least one faculty with subjects is required",
        )]);
    }

    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (i, f) in faculty.iter().enumerate() {
        if f.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Faculty #{} has a blank name", i + 1),
            ));
        } else if !names.insert(f.name.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate faculty name: {}", f.name),
            ));
        }

        if f.subjects.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoSubjects,
                format!("Faculty '{}' has no subjects", f.name),
            ));
        }
        if f.subjects.iter().any(|s| s.trim().is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                format!("Faculty '{}' has a blank subject", f.name),
            ));
        }

        if !(MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS).contains(&f.weekly_hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HoursOutOfRange,
                format!(
                    "Faculty '{}' weekly hours {} not in {}..={}",
                    f.name, f.weekly_hours, MIN_WEEKLY_HOURS, MAX_WEEKLY_HOURS
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a grid shape: every axis non-empty, no repeated names.
pub fn validate_shape(shape: &GridShape) -> ValidationResult {
    let mut errors = Vec::new();

    for (axis, entries) in [
        ("semesters", &shape.semesters),
        ("days", &shape.days),
        ("time slots", &shape.time_slots),
    ] {
        if entries.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAxis,
                format!("Grid has no {axis}"),
            ));
            continue;
        }
        let mut seen = HashSet::new();
        for entry in entries {
            if !seen.insert(entry.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAxisEntry,
                    format!("Duplicate entry in {axis}: {entry}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
