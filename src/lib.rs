//! Randomized semester timetable generation.
//!
//! Takes a list of faculty (name, subjects, weekly-hours target) and fills a
//! semester × day × time-slot grid with `"<subject> (<faculty>)"` labels by
//! randomized greedy placement. There is no optimization and no conflict
//! resolution beyond "a filled cell stays filled".
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Faculty`, `GridShape`, `Timetable`, `Assignment`
//! - **`random`**: Injectable randomness (`RandomSource`, `FixedOrder`)
//! - **`validation`**: Input integrity checks (blank/duplicate names, hours range, grid axes)
//! - **`scheduler`**: `SlotAssigner` and `FulfillmentReport`
//! - **`form`**: Raw form rows → faculty records
//! - **`export`**: Per-semester tables, text rendering, CSV
//! - **`config`**: TOML generation input
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_timetable::export::semester_csv;
//! use u_timetable::models::Faculty;
//! use u_timetable::scheduler::SlotAssigner;
//!
//! let faculty = vec![
//!     Faculty::new("Rao").with_subjects(["Algebra", "Calculus"]).with_weekly_hours(4),
//!     Faculty::new("Iyer").with_subject("Physics"),
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let timetable = SlotAssigner::new().assign(&faculty, &mut rng).unwrap();
//!
//! assert_eq!(timetable.count_for("2nd Semester", "Rao"), 4);
//! let csv = semester_csv(&timetable, "6th Semester").unwrap();
//! assert!(csv.starts_with(b",9-10 AM"));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod random;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
