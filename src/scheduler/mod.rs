//! Lesson-to-slot colorer and timetable KPIs.
//!
//! # Algorithm
//!
//! `DsaturScheduler` is a DSATUR-derived greedy colorer: it repeatedly
//! picks the most constrained uncolored lesson, gives it the best usable
//! slot, and propagates restrictions and pairing hints to its neighbors.
//! It is a heuristic, not an exact solver: a run either colors every
//! lesson or stops at the first lesson with no usable slot.
//!
//! # KPI
//!
//! `TimetableKpi` reports completion, soft-blocked placements, honored
//! teacher preferences, and back-to-back pairs and triples.
//!
//! # References
//!
//! - Brélaz (1979), "New methods to color the vertices of a graph"
//! - de Werra (1985), "An introduction to timetabling"

mod config;
mod dsatur;
mod kpi;
mod placement;

pub use config::{SchedulerConfig, TieBreak};
pub use dsatur::DsaturScheduler;
pub use kpi::TimetableKpi;
pub use placement::{select_slot, SlotChoice};
