//! Form-style faculty input.
//!
//! A [`FacultyForm`] is one row as a person types it: a name, a
//! comma-separated subject list and a weekly-hours number. Rows missing a
//! name or every subject are dropped rather than rejected, so a half-filled
//! form still produces a usable faculty list.
//!
//! On the command line a row is written `"Name|Subject, Subject|Hours"`;
//! the hours part is optional.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::TimetableError;
use crate::models::{Faculty, DEFAULT_WEEKLY_HOURS};

/// Most faculty rows one form accepts.
pub const MAX_FACULTY_ROWS: usize = 20;

/// One raw faculty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyForm {
    /// Faculty name as entered.
    #[serde(default)]
    pub name: String,
    /// Subjects as entered.
    #[serde(default)]
    pub subjects: SubjectsField,
    /// Weekly-hours target.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u32,
}

fn default_weekly_hours() -> u32 {
    DEFAULT_WEEKLY_HOURS
}

/// Subjects either as one comma-separated string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectsField {
    /// `"Algebra, Calculus"`
    Text(String),
    /// `["Algebra", "Calculus"]`
    List(Vec<String>),
}

impl Default for SubjectsField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl SubjectsField {
    /// Trimmed, non-blank subject names in entry order.
    pub fn to_subjects(&self) -> Vec<String> {
        let pieces: Vec<&str> = match self {
            Self::Text(text) => text.split(',').collect(),
            Self::List(items) => items.iter().map(String::as_str).collect(),
        };
        pieces
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl FacultyForm {
    /// Creates a row.
    pub fn new(name: impl Into<String>, subjects: impl Into<String>, weekly_hours: u32) -> Self {
        Self {
            name: name.into(),
            subjects: SubjectsField::Text(subjects.into()),
            weekly_hours,
        }
    }

    /// Converts the row, or `None` if the name or every subject is blank.
    pub fn into_faculty(self) -> Option<Faculty> {
        let name = self.name.trim();
        let subjects = self.subjects.to_subjects();
        if name.is_empty() || subjects.is_empty() {
            return None;
        }
        Some(
            Faculty::new(name)
                .with_subjects(subjects)
                .with_weekly_hours(self.weekly_hours),
        )
    }
}

/// Converts rows to faculty, skipping incomplete ones.
///
/// # Errors
/// [`TimetableError::Config`] if more than [`MAX_FACULTY_ROWS`] rows are given.
pub fn collect_faculty<I>(rows: I) -> Result<Vec<Faculty>, TimetableError>
where
    I: IntoIterator<Item = FacultyForm>,
{
    let rows: Vec<FacultyForm> = rows.into_iter().collect();
    if rows.len() > MAX_FACULTY_ROWS {
        return Err(TimetableError::Config(format!(
            "{} faculty rows given, at most {MAX_FACULTY_ROWS} allowed",
            rows.len()
        )));
    }

    let mut faculty = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match row.into_faculty() {
            Some(f) => faculty.push(f),
            None => warn!(row = i + 1, "incomplete faculty row skipped"),
        }
    }
    Ok(faculty)
}

impl FromStr for FacultyForm {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('|') {
            return Err(TimetableError::Config(format!(
                "expected 'Name|Subjects|Hours', got '{s}'"
            )));
        }
        let mut parts = s.split('|');
        let name = parts.next().unwrap_or_default();
        let subjects = parts.next().unwrap_or_default();
        let weekly_hours = match parts.next().map(str::trim) {
            None | Some("") => DEFAULT_WEEKLY_HOURS,
            Some(hours) => hours.parse().map_err(|_| {
                TimetableError::Config(format!("invalid weekly hours '{hours}' in '{s}'"))
            })?,
        };
        if parts.next().is_some() {
            return Err(TimetableError::Config(format!(
                "expected 'Name|Subjects|Hours', got '{s}'"
            )));
        }
        Ok(Self::new(name, subjects, weekly_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_row() {
        let f = FacultyForm::new(" Rao ", "Algebra, Calculus ,Stats", 4)
            .into_faculty()
            .unwrap();
        assert_eq!(f.name, "Rao");
        assert_eq!(f.subjects, vec!["Algebra", "Calculus", "Stats"]);
        assert_eq!(f.weekly_hours, 4);
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        assert!(FacultyForm::new("", "Math", 3).into_faculty().is_none());
        assert!(FacultyForm::new("Rao", "", 3).into_faculty().is_none());
        assert!(FacultyForm::new("Rao", " , ,", 3).into_faculty().is_none());
    }

    #[test]
    fn test_blank_pieces_dropped() {
        let f = FacultyForm::new("Rao", "Math,,  ,Physics,", 3)
            .into_faculty()
            .unwrap();
        assert_eq!(f.subjects, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_list_subjects() {
        let field = SubjectsField::List(vec![" Math ".into(), "".into(), "Art".into()]);
        assert_eq!(field.to_subjects(), vec!["Math", "Art"]);
    }

    #[test]
    fn test_collect_faculty() {
        let rows = vec![
            FacultyForm::new("A", "Math", 3),
            FacultyForm::new("", "", 3),
            FacultyForm::new("B", "Art", 2),
        ];
        let faculty = collect_faculty(rows).unwrap();
        assert_eq!(faculty.len(), 2);
        assert_eq!(faculty[1].name, "B");
    }

    #[test]
    fn test_collect_too_many_rows() {
        let rows = (0..=MAX_FACULTY_ROWS).map(|i| FacultyForm::new(format!("F{i}"), "Math", 1));
        assert!(matches!(
            collect_faculty(rows),
            Err(TimetableError::Config(_))
        ));
    }

    #[test]
    fn test_parse_row() {
        let row: FacultyForm = "Rao|Algebra, Calculus|5".parse().unwrap();
        assert_eq!(row.name, "Rao");
        assert_eq!(row.weekly_hours, 5);
        assert_eq!(row.subjects.to_subjects(), vec!["Algebra", "Calculus"]);
    }

    #[test]
    fn test_parse_row_default_hours() {
        let row: FacultyForm = "Rao|Algebra".parse().unwrap();
        assert_eq!(row.weekly_hours, DEFAULT_WEEKLY_HOURS);
        let row: FacultyForm = "Rao|Algebra|".parse().unwrap();
        assert_eq!(row.weekly_hours, DEFAULT_WEEKLY_HOURS);
    }

    #[test]
    fn test_parse_row_errors() {
        assert!("Rao|Math|lots".parse::<FacultyForm>().is_err());
        assert!("Rao|Math|3|extra".parse::<FacultyForm>().is_err());
    }

    #[test]
    fn test_parse_row_without_separator() {
        assert!("Rao".parse::<FacultyForm>().is_err());
        assert!("Rao,Math,3".parse::<FacultyForm>().is_err());
        assert!("".parse::<FacultyForm>().is_err());
    }
}
