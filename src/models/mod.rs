//! Timetabling domain models.
//!
//! Provides the data types for describing who needs slots and the grid
//! those slots live in.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Clinic |
//! |-------------|------------|--------|--------|
//! | Faculty | Lecturer | Instructor | Doctor |
//! | GridShape | Semesters × Days × Periods | Terms × Days × Lessons | Weeks × Days × Shifts |
//! | Timetable | Semester Timetable | School Timetable | Rota |

mod faculty;
mod timetable;

pub use faculty::{Faculty, DEFAULT_WEEKLY_HOURS, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS};
pub use timetable::{Assignment, GridShape, Timetable, DAYS, SEMESTERS, TIME_SLOTS};
