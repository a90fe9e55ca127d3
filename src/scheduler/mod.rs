//! Slot assignment and fulfillment evaluation.
//!
//! # Algorithm
//!
//! `SlotAssigner` is a randomized greedy placer: each faculty walks a
//! freshly shuffled list of the semester's cells and takes free ones until
//! its weekly-hours target is met or the list is exhausted. There is no
//! backtracking, no optimization and no cross-semester coordination.
//!
//! # KPI
//!
//! `FulfillmentReport` compares the requested weekly hours with the slots
//! actually placed, and reports how full each semester is.

mod assigner;
mod kpi;

pub use assigner::{assign, AssignRequest, SlotAssigner};
pub use kpi::{Fulfillment, FulfillmentReport};
