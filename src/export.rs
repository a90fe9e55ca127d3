//! Table views and CSV export.
//!
//! A [`SemesterTable`] is one semester laid out for display: one row per
//! day, one column per time slot. It renders as an aligned text table and
//! encodes to CSV with the day name as the row index.

use std::fmt;
use std::io;

use crate::error::{Result, TimetableError};
use crate::models::Timetable;

/// Default download file name.
pub const EXPORT_FILE_NAME: &str = "timetable.csv";

/// MIME type of the exported file.
pub const EXPORT_MIME: &str = "text/csv";

/// One semester of a timetable, borrowed.
#[derive(Debug, Clone, Copy)]
pub struct SemesterTable<'a> {
    timetable: &'a Timetable,
    semester: &'a str,
    cells: &'a [String],
}

impl<'a> SemesterTable<'a> {
    /// Borrows one semester.
    ///
    /// # Errors
    /// [`TimetableError::UnknownSemester`] if the semester is not in the grid.
    pub fn new(timetable: &'a Timetable, semester: &'a str) -> Result<Self> {
        let cells = timetable
            .semester_cells(semester)
            .ok_or_else(|| TimetableError::UnknownSemester(semester.to_string()))?;
        Ok(Self {
            timetable,
            semester,
            cells,
        })
    }

    /// Semester name.
    pub fn semester(&self) -> &str {
        self.semester
    }

    /// Column headers (time slots).
    pub fn columns(&self) -> &'a [String] {
        &self.timetable.shape().time_slots
    }

    /// Rows as `(day, cells)`, in day order.
    pub fn rows(&self) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        let width = self.timetable.shape().time_slots.len();
        let cells = self.cells;
        self.timetable
            .shape()
            .days
            .iter()
            .enumerate()
            .map(move |(d, day)| (day.as_str(), &cells[d * width..(d + 1) * width]))
    }

    /// Encodes the table as UTF-8 CSV.
    ///
    /// The header row is an empty index header followed by the slot names;
    /// each following row starts with the day name.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec![""];
        header.extend(self.columns().iter().map(String::as_str));
        writer.write_record(&header)?;

        for (day, cells) in self.rows() {
            let mut record = vec![day];
            record.extend(cells.iter().map(String::as_str));
            writer.write_record(&record)?;
        }

        writer.into_inner().map_err(|e| {
            let err = e.error();
            TimetableError::Io(io::Error::new(err.kind(), err.to_string()))
        })
    }
}

impl fmt::Display for SemesterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self
            .timetable
            .shape()
            .days
            .iter()
            .map(|d| d.chars().count())
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .columns()
            .iter()
            .enumerate()
            .map(|(t, header)| {
                self.rows()
                    .map(|(_, cells)| cells[t].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (header, width) in self.columns().iter().zip(widths.iter().copied()) {
            write!(f, " | {header:width$}")?;
        }
        writeln!(f)?;

        let rule_len = index_width + widths.iter().map(|w| w + 3).sum::<usize>();
        writeln!(f, "{}", "-".repeat(rule_len))?;

        for (day, cells) in self.rows() {
            write!(f, "{day:index_width$}")?;
            for (cell, width) in cells.iter().zip(widths.iter().copied()) {
                write!(f, " | {cell:width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Encodes one semester of `timetable` as CSV.
pub fn semester_csv(timetable: &Timetable, semester: &str) -> Result<Vec<u8>> {
    SemesterTable::new(timetable, semester)?.to_csv()
}

/// Every semester of `timetable` as tables, in grid order.
pub fn semester_tables(timetable: &Timetable) -> Vec<SemesterTable<'_>> {
    timetable
        .shape()
        .semesters
        .iter()
        .filter_map(|s| SemesterTable::new(timetable, s).ok())
        .collect()
}
