//! Timetable (solution) model.
//!
//! A timetable is a grid of semester × day × time-slot cells. Each cell
//! is either empty or holds exactly one `"<subject> (<faculty>)"` label.
//! Cells are write-once: the first accepted assignment wins and later
//! writes to the same cell are refused.

use serde::{Deserialize, Serialize};

/// Semesters in the default grid.
pub const SEMESTERS: [&str; 3] = ["2nd Semester", "4th Semester", "6th Semester"];

/// Teaching days in the default grid.
pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Time slots per day in the default grid.
pub const TIME_SLOTS: [&str; 6] = [
    "9-10 AM", "10-11 AM", "11-12 PM", "1-2 PM", "2-3 PM", "3-4 PM",
];

/// The axes of a timetable grid.
///
/// Order matters: semesters are filled in order, and days/slots define the
/// row and column order of rendered tables. Axes left out when
/// deserializing fall back to the default grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridShape {
    /// Semester names.
    pub semesters: Vec<String>,
    /// Day names (table rows).
    pub days: Vec<String>,
    /// Time-slot names (table columns).
    pub time_slots: Vec<String>,
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(SEMESTERS, DAYS, TIME_SLOTS)
    }
}

impl GridShape {
    /// Creates a grid shape from the three axes.
    pub fn new<A, B, C>(semesters: A, days: B, time_slots: C) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            semesters: semesters.into_iter().map(Into::into).collect(),
            days: days.into_iter().map(Into::into).collect(),
            time_slots: time_slots.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of cells in one semester (days × slots).
    #[inline]
    pub fn cells_per_semester(&self) -> usize {
        self.days.len() * self.time_slots.len()
    }

    /// Every (day index, slot index) pair, day-major.
    pub fn slot_pairs(&self) -> Vec<(usize, usize)> {
        (0..self.days.len())
            .flat_map(|d| (0..self.time_slots.len()).map(move |t| (d, t)))
            .collect()
    }

    /// Position of a semester by name.
    pub fn semester_index(&self, semester: &str) -> Option<usize> {
        self.semesters.iter().position(|s| s == semester)
    }

    /// Position of a day by name.
    pub fn day_index(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d == day)
    }

    /// Position of a time slot by name.
    pub fn slot_index(&self, slot: &str) -> Option<usize> {
        self.time_slots.iter().position(|t| t == slot)
    }
}

/// One accepted placement of a faculty's subject into a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Semester name.
    pub semester: String,
    /// Day name.
    pub day: String,
    /// Time-slot name.
    pub time_slot: String,
    /// Subject taught.
    pub subject: String,
    /// Faculty name.
    pub faculty: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        semester: impl Into<String>,
        day: impl Into<String>,
        time_slot: impl Into<String>,
        subject: impl Into<String>,
        faculty: impl Into<String>,
    ) -> Self {
        Self {
            semester: semester.into(),
            day: day.into(),
            time_slot: time_slot.into(),
            subject: subject.into(),
            faculty: faculty.into(),
        }
    }

    /// Cell content for this assignment.
    pub fn label(&self) -> String {
        format!("{} ({})", self.subject, self.faculty)
    }
}

/// A filled (or partially filled) timetable.
///
/// Deserializing rebuilds the grid from `shape` and the assignment log and
/// rejects input whose cells disagree with that rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimetableData")]
pub struct Timetable {
    shape: GridShape,
    /// Per semester, `days × time_slots` cells in day-major order.
    cells: Vec<Vec<String>>,
    /// Accepted assignments in placement order.
    assignments: Vec<Assignment>,
}

/// Wire form of a [`Timetable`], checked before it becomes one.
#[derive(Deserialize)]
struct TimetableData {
    shape: GridShape,
    cells: Vec<Vec<String>>,
    assignments: Vec<Assignment>,
}

impl TryFrom<TimetableData> for Timetable {
    type Error = String;

    fn try_from(data: TimetableData) -> Result<Self, Self::Error> {
        let per_semester = data.shape.cells_per_semester();
        if data.cells.len() != data.shape.semesters.len() {
            return Err(format!(
                "expected {} semester grids, got {}",
                data.shape.semesters.len(),
                data.cells.len()
            ));
        }
        if let Some(row) = data.cells.iter().find(|row| row.len() != per_semester) {
            return Err(format!(
                "expected {per_semester} cells per semester, got {}",
                row.len()
            ));
        }

        let mut timetable = Self::new(data.shape);
        for assignment in data.assignments {
            let at = format!(
                "{} / {} / {}",
                assignment.semester, assignment.day, assignment.time_slot
            );
            if !timetable.try_place(assignment) {
                return Err(format!("assignment at {at} is unknown or repeated"));
            }
        }
        if timetable.cells != data.cells {
            return Err("cells do not match the assignment log".to_string());
        }
        Ok(timetable)
    }
}

impl Timetable {
    /// Creates a timetable with every cell empty.
    pub fn new(shape: GridShape) -> Self {
        let per_semester = shape.cells_per_semester();
        let cells = vec![vec![String::new(); per_semester]; shape.semesters.len()];
        Self {
            shape,
            cells,
            assignments: Vec::new(),
        }
    }

    /// Grid axes.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    #[inline]
    fn offset(&self, day: usize, slot: usize) -> usize {
        day * self.shape.time_slots.len() + slot
    }

    fn locate(&self, semester: &str, day: &str, slot: &str) -> Option<(usize, usize, usize)> {
        Some((
            self.shape.semester_index(semester)?,
            self.shape.day_index(day)?,
            self.shape.slot_index(slot)?,
        ))
    }

    /// Cell content by index. Empty string means unfilled.
    pub fn cell_at(&self, semester: usize, day: usize, slot: usize) -> Option<&str> {
        if day >= self.shape.days.len() || slot >= self.shape.time_slots.len() {
            return None;
        }
        let offset = self.offset(day, slot);
        self.cells
            .get(semester)
            .and_then(|row| row.get(offset))
            .map(String::as_str)
    }

    /// Cell content by name. `None` if any name is not part of the shape.
    pub fn cell(&self, semester: &str, day: &str, slot: &str) -> Option<&str> {
        let (s, d, t) = self.locate(semester, day, slot)?;
        self.cell_at(s, d, t)
    }

    /// Whether the cell exists and is still empty.
    pub fn is_free_at(&self, semester: usize, day: usize, slot: usize) -> bool {
        self.cell_at(semester, day, slot)
            .is_some_and(str::is_empty)
    }

    /// Writes an assignment into an empty cell by index.
    ///
    /// Returns `false` (and changes nothing) if the cell is out of range
    /// or already filled.
    pub(crate) fn place_at(
        &mut self,
        semester: usize,
        day: usize,
        slot: usize,
        subject: &str,
        faculty: &str,
    ) -> bool {
        if !self.is_free_at(semester, day, slot) {
            return false;
        }
        let assignment = Assignment::new(
            &self.shape.semesters[semester],
            &self.shape.days[day],
            &self.shape.time_slots[slot],
            subject,
            faculty,
        );
        let offset = self.offset(day, slot);
        self.cells[semester][offset] = assignment.label();
        self.assignments.push(assignment);
        true
    }

    /// Writes an assignment into its cell if that cell is empty.
    ///
    /// Returns `false` for unknown semester/day/slot names or a filled cell.
    pub fn try_place(&mut self, assignment: Assignment) -> bool {
        match self.locate(&assignment.semester, &assignment.day, &assignment.time_slot) {
            Some((s, d, t)) => self.place_at(s, d, t, &assignment.subject, &assignment.faculty),
            None => false,
        }
    }

    /// All cells of one semester, day-major.
    pub fn semester_cells(&self, semester: &str) -> Option<&[String]> {
        let s = self.shape.semester_index(semester)?;
        self.cells.get(s).map(Vec::as_slice)
    }

    /// Accepted assignments in placement order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of accepted assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Every assignment of one faculty across all semesters.
    pub fn assignments_for_faculty(&self, faculty: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.faculty == faculty)
            .collect()
    }

    /// Every assignment in one semester.
    pub fn assignments_in_semester(&self, semester: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.semester == semester)
            .collect()
    }

    /// Number of slots a faculty holds in one semester.
    pub fn count_for(&self, semester: &str, faculty: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.semester == semester && a.faculty == faculty)
            .count()
    }

    /// Number of filled cells in one semester (0 for unknown semesters).
    pub fn filled_count(&self, semester: &str) -> usize {
        self.semester_cells(semester)
            .map(|cells| cells.iter().filter(|c| !c.is_empty()).count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_shape() -> GridShape {
        GridShape::new(["S1", "S2"], ["Mon", "Tue"], ["AM", "PM", "EVE"])
    }

    #[test]
    fn test_default_shape() {
        let shape = GridShape::default();
        assert_eq!(shape.semesters.len(), 3);
        assert_eq!(shape.days.len(), 5);
        assert_eq!(shape.time_slots.len(), 6);
        assert_eq!(shape.cells_per_semester(), 30);
        assert_eq!(shape.semesters[0], "2nd Semester");
        assert_eq!(shape.time_slots[5], "3-4 PM");
    }

    #[test]
    fn test_slot_pairs_day_major() {
        let pairs = small_shape().slot_pairs();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (0, 0));
        assert_eq!(pairs[2], (0, 2));
        assert_eq!(pairs[3], (1, 0));
    }

    #[test]
    fn test_new_timetable_is_empty() {
        let t = Timetable::new(small_shape());
        for s in ["S1", "S2"] {
            let cells = t.semester_cells(s).unwrap();
            assert_eq!(cells.len(), 6);
            assert!(cells.iter().all(String::is_empty));
            assert_eq!(t.filled_count(s), 0);
        }
        assert_eq!(t.assignment_count(), 0);
    }

    #[test]
    fn test_first_writer_wins() {
        let mut t = Timetable::new(small_shape());
        assert!(t.try_place(Assignment::new("S1", "Mon", "AM", "Math", "A")));
        assert!(!t.try_place(Assignment::new("S1", "Mon", "AM", "Physics", "B")));

        assert_eq!(t.cell("S1", "Mon", "AM"), Some("Math (A)"));
        assert_eq!(t.assignment_count(), 1);
        assert_eq!(t.count_for("S1", "B"), 0);
    }

    #[test]
    fn test_unknown_names() {
        let mut t = Timetable::new(small_shape());
        assert!(t.cell("S9", "Mon", "AM").is_none());
        assert!(t.cell("S1", "Sun", "AM").is_none());
        assert!(!t.try_place(Assignment::new("S1", "Sun", "AM", "Math", "A")));
        assert!(t.cell_at(0, 0, 3).is_none());
        assert!(!t.is_free_at(5, 0, 0));
        assert_eq!(t.filled_count("nope"), 0);
    }

    #[test]
    fn test_queries() {
        let mut t = Timetable::new(small_shape());
        t.try_place(Assignment::new("S1", "Mon", "AM", "Math", "A"));
        t.try_place(Assignment::new("S1", "Tue", "PM", "Stats", "A"));
        t.try_place(Assignment::new("S2", "Mon", "AM", "Art", "B"));

        assert_eq!(t.assignments_for_faculty("A").len(), 2);
        assert_eq!(t.assignments_in_semester("S2").len(), 1);
        assert_eq!(t.count_for("S1", "A"), 2);
        assert_eq!(t.filled_count("S1"), 2);
        assert_eq!(t.cell_at(0, 1, 1), Some("Stats (A)"));
        assert_eq!(t.assignments()[2].label(), "Art (B)");
    }

    #[test]
    fn test_json_round_trip() {
        let mut t = Timetable::new(small_shape());
        t.try_place(Assignment::new("S1", "Mon", "AM", "Math", "A"));
        t.try_place(Assignment::new("S2", "Tue", "EVE", "Art", "B"));

        let json = serde_json::to_string(&t).unwrap();
        let back: Timetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.cell("S2", "Tue", "EVE"), Some("Art (B)"));
    }

    #[test]
    fn test_json_rejects_short_cell_grid() {
        let json = r#"{"shape":{"semesters":["S"],"days":["Mon","Tue"],"time_slots":["P1"]},"cells":[["X"]],"assignments":[]}"#;
        let err = serde_json::from_str::<Timetable>(json).unwrap_err();
        assert!(err.to_string().contains("cells per semester"));
    }

    #[test]
    fn test_json_rejects_missing_semester_grid() {
        let json = r#"{"shape":{"semesters":["S1","S2"],"days":["Mon"],"time_slots":["P1"]},"cells":[[""]],"assignments":[]}"#;
        let err = serde_json::from_str::<Timetable>(json).unwrap_err();
        assert!(err.to_string().contains("semester grids"));
    }

    #[test]
    fn test_json_rejects_cells_without_assignments() {
        let json = r#"{"shape":{"semesters":["S"],"days":["Mon","Tue"],"time_slots":["P1"]},"cells":[["X",""]],"assignments":[]}"#;
        let err = serde_json::from_str::<Timetable>(json).unwrap_err();
        assert!(err.to_string().contains("assignment log"));
    }

    #[test]
    fn test_json_rejects_repeated_assignment() {
        let json = r#"{"shape":{"semesters":["S"],"days":["Mon"],"time_slots":["P1"]},"cells":[["Math (A)"]],"assignments":[
            {"semester":"S","day":"Mon","time_slot":"P1","subject":"Math","faculty":"A"},
            {"semester":"S","day":"Mon","time_slot":"P1","subject":"Art","faculty":"B"}]}"#;
        let err = serde_json::from_str::<Timetable>(json).unwrap_err();
        assert!(err.to_string().contains("unknown or repeated"));
    }

    #[test]
    fn test_same_slot_different_semesters() {
        let mut t = Timetable::new(small_shape());
        assert!(t.try_place(Assignment::new("S1", "Mon", "AM", "Math", "A")));
        assert!(t.try_place(Assignment::new("S2", "Mon", "AM", "Math", "A")));
        assert_eq!(t.assignments_for_faculty("A").len(), 2);
    }
}
