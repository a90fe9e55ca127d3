//! Timetable fulfillment metrics.
//!
//! Computes how well a filled timetable meets each faculty's weekly-hours
//! target.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Requested | Faculty weekly hours (per semester) |
//! | Assigned | Slots the faculty actually holds in that semester |
//! | Shortfall | Requested - Assigned |
//! | Fill Rate | Filled cells / total cells, per semester |
//! | Fulfillment Rate | Total assigned / total requested, whole timetable |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Faculty, Timetable};

/// Requested vs. assigned hours for one faculty in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fulfillment {
    /// Semester name.
    pub semester: String,
    /// Faculty name.
    pub faculty: String,
    /// Weekly-hours target.
    pub requested: u32,
    /// Slots actually assigned.
    pub assigned: u32,
}

impl Fulfillment {
    /// Slots missing from the target.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.assigned)
    }

    /// Whether the target was met.
    #[inline]
    pub fn is_met(&self) -> bool {
        self.assigned >= self.requested
    }
}

/// Fulfillment metrics for a whole timetable.
#[derive(Debug, Clone, Serialize)]
pub struct FulfillmentReport {
    /// One entry per (semester, faculty), semester-major, input order.
    pub entries: Vec<Fulfillment>,
    /// Filled-cell ratio per semester (0.0..1.0).
    pub fill_rate_by_semester: HashMap<String, f64>,
    /// Total assigned / total requested (0.0..1.0).
    pub fulfillment_rate: f64,
}

impl FulfillmentReport {
    /// Computes the report from a timetable and the faculty it was built from.
    pub fn calculate(timetable: &Timetable, faculty: &[Faculty]) -> Self {
        let shape = timetable.shape();
        let mut entries = Vec::with_capacity(shape.semesters.len() * faculty.len());
        let mut fill_rate_by_semester = HashMap::new();
        let mut requested_total: u64 = 0;
        let mut assigned_total: u64 = 0;

        for semester in &shape.semesters {
            for f in faculty {
                let assigned = timetable.count_for(semester, &f.name) as u32;
                requested_total += u64::from(f.weekly_hours);
                assigned_total += u64::from(assigned.min(f.weekly_hours));
                entries.push(Fulfillment {
                    semester: semester.clone(),
                    faculty: f.name.clone(),
                    requested: f.weekly_hours,
                    assigned,
                });
            }

            let total = shape.cells_per_semester();
            let rate = if total == 0 {
                0.0
            } else {
                timetable.filled_count(semester) as f64 / total as f64
            };
            fill_rate_by_semester.insert(semester.clone(), rate);
        }

        let fulfillment_rate = if requested_total == 0 {
            1.0
        } else {
            assigned_total as f64 / requested_total as f64
        };

        Self {
            entries,
            fill_rate_by_semester,
            fulfillment_rate,
        }
    }

    /// Entries whose target was not met.
    pub fn shortfalls(&self) -> impl Iterator<Item = &Fulfillment> {
        self.entries.iter().filter(|e| !e.is_met())
    }

    /// Sum of all shortfalls.
    pub fn total_shortfall(&self) -> u32 {
        self.entries.iter().map(Fulfillment::shortfall).sum()
    }

    /// Whether every faculty got its full target in every semester.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Fulfillment::is_met)
    }
}
