//! Faculty model.
//!
//! A faculty member is the entity that gets placed into slots: a name,
//! the subjects they can teach, and how many slots they should receive
//! per semester.

use serde::{Deserialize, Serialize};

/// Lowest accepted weekly-hours target.
pub const MIN_WEEKLY_HOURS: u32 = 1;
/// Highest accepted weekly-hours target.
pub const MAX_WEEKLY_HOURS: u32 = 10;
/// Weekly hours used when a form row leaves the field out.
pub const DEFAULT_WEEKLY_HOURS: u32 = 3;

/// A faculty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty name.
    pub name: String,
    /// Subjects this faculty teaches, in entry order.
    pub subjects: Vec<String>,
    /// Slots to assign per semester.
    pub weekly_hours: u32,
}

impl Faculty {
    /// Creates a faculty record with no subjects and the default hours.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: Vec::new(),
            weekly_hours: DEFAULT_WEEKLY_HOURS,
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Replaces the subject list.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = subjects.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weekly-hours target.
    pub fn with_weekly_hours(mut self, weekly_hours: u32) -> Self {
        self.weekly_hours = weekly_hours;
        self
    }

    /// Whether this faculty teaches `subject`.
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Cell label for one of this faculty's subjects: `"<subject> (<name>)"`.
    pub fn label(&self, subject: &str) -> String {
        format!("{subject} ({})", self.name)
    }
}
