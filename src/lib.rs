//! Weekly school timetabling as graph coloring.
//!
//! Lesson sessions become vertices of a conflict graph, (day, period) slots
//! become colors, and a DSATUR-derived greedy colorer assigns slots while
//! honoring hard unavailability, avoiding soft-blocked slots, favoring
//! teacher preferences, and pairing repeated lessons back to back.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `SlotCatalog`, `ConstraintHolder`,
//!   `LessonVertex`, `Timetable`, `Schedule`
//! - **`input`**: Input records and timetable construction
//! - **`graph`**: Conflict graph over lesson vertices
//! - **`dispatching`**: Vertex-selection rules and the rule engine
//! - **`scheduler`**: The colorer, slot placement and KPIs
//! - **`report`**: Per class group and per teacher weekly grids
//! - **`validation`**: Input integrity checks
//!
//! # Example
//!
//! ```
//! use u_timetable::input::TimetableInput;
//! use u_timetable::report::class_grid;
//! use u_timetable::scheduler::DsaturScheduler;
//!
//! let mut timetable = TimetableInput::new(["P1", "P2"])
//!     .with_lesson("Math", "7A", "Ana", 2)
//!     .with_lesson("Art", "7A", "Bia", 1)
//!     .build()
//!     .unwrap();
//!
//! let schedule = DsaturScheduler::new().schedule(&mut timetable);
//! assert!(schedule.is_complete());
//!
//! let grid = class_grid(&timetable, "7A").unwrap();
//! assert_eq!(grid.occupied_count(), 3);
//! ```
//!
//! # References
//!
//! - Brélaz (1979), "New methods to color the vertices of a graph"
//! - de Werra (1985), "An introduction to timetabling"

pub mod dispatching;
pub mod error;
pub mod graph;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
