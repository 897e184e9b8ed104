//! Error types for timetable construction and reporting.
//!
//! Unknown references inside restriction or preference records are not
//! errors: ingestion skips them. Errors here are structural faults the
//! caller has to fix before a run makes sense.

use thiserror::Error;

/// Main error type for timetable operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// Day text that does not name a teaching weekday.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// No period labels were configured.
    #[error("Period catalog is empty")]
    EmptyPeriodCatalog,

    /// The same period label appears twice in the catalog.
    #[error("Duplicate period label: {0}")]
    DuplicatePeriod(String),

    /// A lesson requirement asks for zero weekly sessions.
    #[error("Lesson {subject}/{class_group}/{teacher} requires at least one weekly session")]
    ZeroWeeklyCount {
        subject: String,
        class_group: String,
        teacher: String,
    },

    /// Reporter query for a class group that is not registered.
    #[error("Unknown class group: {0}")]
    UnknownClassGroup(String),

    /// Reporter query for a teacher that is not registered.
    #[error("Unknown teacher: {0}")]
    UnknownTeacher(String),

    /// The run aborted on this lesson: no free or soft-blocked slot was left.
    #[error("Lesson {0} could not be placed in any slot")]
    Unschedulable(String),
}

/// Result alias for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
