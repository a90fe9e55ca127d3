//! Generation input loaded from TOML.
//!
//! ```toml
//! seed = 42
//!
//! [shape]
//! semesters = ["Fall"]
//! days = ["Monday", "Tuesday"]
//! time_slots = ["9-10 AM", "10-11 AM"]
//!
//! [[faculty]]
//! name = "Dr. Rao"
//! subjects = "Algebra, Calculus"
//! weekly_hours = 4
//! ```
//!
//! Every key is optional. A missing `[shape]` means the default grid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TimetableError};
use crate::form::{collect_faculty, FacultyForm};
use crate::models::{Faculty, GridShape};
use crate::scheduler::AssignRequest;

/// Generation input: faculty rows, grid shape and RNG seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableConfig {
    /// RNG seed. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Grid axes.
    #[serde(default)]
    pub shape: GridShape,

    /// Faculty rows as entered.
    #[serde(default)]
    pub faculty: Vec<FacultyForm>,
}

impl TimetableConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Loads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Overrides the seed when `seed` is set.
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Appends faculty rows.
    pub fn with_extra_faculty<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = FacultyForm>,
    {
        self.faculty.extend(rows);
        self
    }

    /// Complete faculty records, incomplete rows dropped.
    pub fn faculty(&self) -> Result<Vec<Faculty>> {
        collect_faculty(self.faculty.iter().cloned())
    }

    /// Builds the assignment request this config describes.
    pub fn to_request(&self) -> Result<AssignRequest> {
        let mut request = AssignRequest::new(self.faculty()?).with_shape(self.shape.clone());
        request.seed = self.seed;
        Ok(request)
    }
}
