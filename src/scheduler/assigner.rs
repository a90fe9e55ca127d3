//! Randomized greedy slot assigner.
//!
//! # Algorithm
//!
//! For each semester, for each faculty in input order:
//! 1. Build every (day, slot) pair of the semester and shuffle it.
//! 2. Pop pairs from the end until the faculty holds `weekly_hours` slots
//!    or the list runs out.
//! 3. A free cell gets a uniformly chosen subject of that faculty; a filled
//!    cell is skipped and the popped pair is not retried.
//!
//! Running out of pairs leaves the faculty short for that semester. That is
//! accepted silently; see [`FulfillmentReport`](super::FulfillmentReport).
//!
//! # Complexity
//! O(s * f * d * t) where s=semesters, f=faculty, d=days, t=slots per day.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::error::{Result, TimetableError};
use crate::models::{Faculty, GridShape, Timetable};
use crate::random::RandomSource;
use crate::validation::{validate_faculty, validate_shape};

/// Input container for one generation run.
#[derive(Debug, Clone)]
pub struct AssignRequest {
    /// Faculty to place.
    pub faculty: Vec<Faculty>,
    /// Grid axes.
    pub shape: GridShape,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl AssignRequest {
    /// Creates a request over the default grid with an unseeded RNG.
    pub fn new(faculty: Vec<Faculty>) -> Self {
        Self {
            faculty,
            shape: GridShape::default(),
            seed: None,
        }
    }

    /// Sets the grid shape.
    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Randomized greedy slot assigner.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_timetable::models::{Faculty, GridShape};
/// use u_timetable::scheduler::SlotAssigner;
///
/// let faculty = vec![Faculty::new("A").with_subject("Math").with_weekly_hours(3)];
/// let assigner = SlotAssigner::new().with_shape(GridShape::new(
///     ["Fall"],
///     ["Mon", "Tue", "Wed", "Thu", "Fri"],
///     ["P1", "P2", "P3", "P4", "P5", "P6"],
/// ));
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let timetable = assigner.assign(&faculty, &mut rng).unwrap();
/// assert_eq!(timetable.count_for("Fall", "A"), 3);
/// assert_eq!(timetable.filled_count("Fall"), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotAssigner {
    shape: GridShape,
}

impl SlotAssigner {
    /// Creates an assigner over the default grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid shape.
    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }

    /// Grid shape this assigner fills.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Fills a fresh timetable.
    ///
    /// # Errors
    /// - [`TimetableError::EmptyFacultyList`] if `faculty` is empty.
    /// - [`TimetableError::InvalidFacultyRecord`] if any record is malformed.
    /// - [`TimetableError::InvalidGridShape`] if the grid has an empty or
    ///   repeated axis.
    pub fn assign<R: RandomSource>(&self, faculty: &[Faculty], rng: &mut R) -> Result<Timetable> {
        if faculty.is_empty() {
            return Err(TimetableError::EmptyFacultyList);
        }
        validate_faculty(faculty).map_err(TimetableError::InvalidFacultyRecord)?;
        validate_shape(&self.shape).map_err(TimetableError::InvalidGridShape)?;

        let mut timetable = Timetable::new(self.shape.clone());

        for (s, semester) in self.shape.semesters.iter().enumerate() {
            for f in faculty {
                let placed = place_faculty(&mut timetable, s, f, rng);
                if placed < f.weekly_hours {
                    debug!(
                        semester = %semester,
                        faculty = %f.name,
                        requested = f.weekly_hours,
                        placed,
                        "faculty partially placed"
                    );
                }
            }
            debug!(
                semester = %semester,
                filled = timetable.filled_count(semester),
                total = self.shape.cells_per_semester(),
                "semester filled"
            );
        }

        Ok(timetable)
    }

    /// Runs a request, seeding the RNG from the request.
    pub fn assign_request(request: &AssignRequest) -> Result<Timetable> {
        let assigner = Self::new().with_shape(request.shape.clone());
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        assigner.assign(&request.faculty, &mut rng)
    }
}

/// Places one faculty into one semester. Returns the number of slots taken.
fn place_faculty<R: RandomSource>(
    timetable: &mut Timetable,
    semester: usize,
    faculty: &Faculty,
    rng: &mut R,
) -> u32 {
    let mut candidates = timetable.shape().slot_pairs();
    rng.shuffle(&mut candidates);

    let mut placed = 0;
    while placed < faculty.weekly_hours {
        let Some((day, slot)) = candidates.pop() else {
            break;
        };
        if !timetable.is_free_at(semester, day, slot) {
            trace!(faculty = %faculty.name, day, slot, "slot taken, skipped");
            continue;
        }
        let subject = &faculty.subjects[rng.choose_index(faculty.subjects.len())];
        if timetable.place_at(semester, day, slot, subject, &faculty.name) {
            trace!(faculty = %faculty.name, subject = %subject, day, slot, "placed");
            placed += 1;
        }
    }
    placed
}

/// Fills a fresh timetable over `shape`. Shorthand for
/// `SlotAssigner::new().with_shape(shape).assign(faculty, rng)`.
pub fn assign<R: RandomSource>(
    faculty: &[Faculty],
    shape: GridShape,
    rng: &mut R,
) -> Result<Timetable> {
    SlotAssigner::new().with_shape(shape).assign(faculty, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SEMESTERS;
    use crate::random::FixedOrder;

    fn one_semester() -> GridShape {
        GridShape::new(
            ["Fall"],
            ["Mon", "Tue", "Wed", "Thu", "Fri"],
            ["P1", "P2", "P3", "P4", "P5", "P6"],
        )
    }

    #[test]
    fn test_single_faculty_scenario() {
        let faculty = vec![Faculty::new("A").with_subject("Math").with_weekly_hours(3)];
        let mut rng = StdRng::seed_from_u64(42);
        let t = assign(&faculty, one_semester(), &mut rng).unwrap();

        let cells = t.semester_cells("Fall").unwrap();
        assert_eq!(cells.iter().filter(|c| *c == "Math (A)").count(), 3);
        assert_eq!(cells.iter().filter(|c| c.is_empty()).count(), 27);
    }

    #[test]
    fn test_every_semester_filled_independently() {
        let faculty = vec![Faculty::new("A")
            .with_subjects(["Math", "Stats"])
            .with_weekly_hours(4)];
        let mut rng = StdRng::seed_from_u64(7);
        let t = SlotAssigner::new().assign(&faculty, &mut rng).unwrap();

        for semester in SEMESTERS {
            assert_eq!(t.count_for(semester, "A"), 4);
        }
        assert_eq!(t.assignments_for_faculty("A").len(), 12);
    }

    #[test]
    fn test_labels_use_known_subjects() {
        let faculty = vec![
            Faculty::new("A").with_subjects(["Math", "Stats"]).with_weekly_hours(10),
            Faculty::new("B").with_subject("Art").with_weekly_hours(10),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let t = SlotAssigner::new().assign(&faculty, &mut rng).unwrap();

        for a in t.assignments() {
            let f = faculty.iter().find(|f| f.name == a.faculty).unwrap();
            assert!(f.teaches(&a.subject));
            assert_eq!(t.cell(&a.semester, &a.day, &a.time_slot), Some(a.label().as_str()));
        }
    }

    #[test]
    fn test_deterministic_under_seed() {
        let faculty = vec![
            Faculty::new("A").with_subjects(["Math", "Stats"]).with_weekly_hours(6),
            Faculty::new("B").with_subjects(["Art", "Music"]).with_weekly_hours(6),
        ];
        let request = AssignRequest::new(faculty).with_seed(2024);
        let a = SlotAssigner::assign_request(&request).unwrap();
        let b = SlotAssigner::assign_request(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_order_collisions_are_skipped() {
        // Every faculty probes cells in the same order, so each one walks
        // past the cells its predecessors took.
        let faculty = vec![
            Faculty::new("A").with_subject("Math").with_weekly_hours(6),
            Faculty::new("B").with_subject("Art").with_weekly_hours(6),
        ];
        let t = assign(&faculty, one_semester(), &mut FixedOrder).unwrap();

        assert_eq!(t.count_for("Fall", "A"), 6);
        assert_eq!(t.count_for("Fall", "B"), 6);
        // A takes the last day, B the day before it.
        assert_eq!(t.cell("Fall", "Fri", "P1"), Some("Math (A)"));
        assert_eq!(t.cell("Fall", "Thu", "P6"), Some("Art (B)"));
        assert_eq!(t.filled_count("Fall"), 12);
    }

    #[test]
    fn test_partial_fulfillment_is_not_an_error() {
        let faculty = vec![
            Faculty::new("A").with_subject("Math").with_weekly_hours(10),
            Faculty::new("B").with_subject("Art").with_weekly_hours(10),
            Faculty::new("C").with_subject("Law").with_weekly_hours(8),
            Faculty::new("D").with_subject("Bio").with_weekly_hours(5),
        ];
        let t = assign(&faculty, one_semester(), &mut FixedOrder).unwrap();

        assert_eq!(t.count_for("Fall", "A"), 10);
        assert_eq!(t.count_for("Fall", "B"), 10);
        assert_eq!(t.count_for("Fall", "C"), 8);
        assert_eq!(t.count_for("Fall", "D"), 2);
        assert_eq!(t.filled_count("Fall"), 30);
    }

    #[test]
    fn test_full_grid_leaves_later_faculty_empty() {
        let shape = GridShape::new(["S"], ["Mon"], ["P1", "P2"]);
        let faculty = vec![
            Faculty::new("A").with_subject("Math").with_weekly_hours(5),
            Faculty::new("B").with_subject("Art").with_weekly_hours(5),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let t = assign(&faculty, shape, &mut rng).unwrap();

        assert_eq!(t.count_for("S", "A"), 2);
        assert_eq!(t.count_for("S", "B"), 0);
    }

    #[test]
    fn test_empty_faculty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = SlotAssigner::new().assign(&[], &mut rng).unwrap_err();
        assert!(matches!(err, TimetableError::EmptyFacultyList));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let faculty = vec![Faculty::new("A").with_weekly_hours(2)];
        let mut rng = StdRng::seed_from_u64(1);
        let err = SlotAssigner::new().assign(&faculty, &mut rng).unwrap_err();
        match err {
            TimetableError::InvalidFacultyRecord(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_shape_rejected() {
        let faculty = vec![Faculty::new("A").with_subject("Math")];
        let shape = GridShape::new(["S"], Vec::<String>::new(), ["P1"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = assign(&faculty, shape, &mut rng).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidGridShape(_)));
    }
}
