//! Timetabling domain models.
//!
//! The problem is a conflict graph: every weekly lesson session is a
//! vertex, every (day, period) slot is a color.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Graph coloring |
//! |-------------|--------|----------------|
//! | LessonVertex | Weekly lesson session | Vertex |
//! | TimeSlot | Day × period | Color |
//! | ConstraintHolder | Teacher / class group | Source of vertex restrictions |
//! | Schedule | Weekly timetable | Coloring |

mod holder;
mod lesson;
mod schedule;
mod slot;
mod timetable;

pub use holder::{ConstraintHolder, HolderId, HolderKind};
pub use lesson::{LessonId, LessonKey, LessonVertex};
pub use schedule::{Assignment, Placement, RunStatus, Schedule};
pub use slot::{SlotCatalog, SlotId, TimeSlot, Weekday};
pub use timetable::Timetable;
