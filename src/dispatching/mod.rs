//! Dispatching rules and rule engine for lesson selection.
//!
//! Decides which uncolored lesson the colorer places next. Rules are
//! applied as a lexicographic chain: each rule keeps only the lessons with
//! its best score, and the next rule breaks the remaining ties.
//!
//! # Usage
//!
//! ```
//! use u_timetable::dispatching::{RuleEngine, rules};
//!
//! // The extended DSATUR chain
//! let engine = RuleEngine::dsatur();
//! assert_eq!(engine.len(), 5);
//!
//! // A custom chain
//! let engine = RuleEngine::new()
//!     .with_rule(rules::MaxSaturation)
//!     .with_rule(rules::MaxPreferences);
//! ```
//!
//! # References
//!
//! - Brélaz (1979), "New methods to color the vertices of a graph"

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::LessonId;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Higher scores = dispatched first.
pub type RuleScore = usize;

/// A rule that scores an uncolored lesson.
///
/// # Score Convention
/// **Higher score = higher priority.** The engine keeps the lessons that
/// share the maximum score.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Short rule name (e.g., "SAT", "DEG").
    fn name(&self) -> &'static str;

    /// Scores `lesson` in the current coloring state.
    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
