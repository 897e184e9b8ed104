//! Schedule (run result) model.
//!
//! A schedule lists lesson-to-slot assignments in the order the colorer
//! made them, plus the final run status. An aborted run keeps every
//! assignment made before the failing lesson.

use serde::{Deserialize, Serialize};

use super::{LessonId, SlotId, Timetable};
use crate::error::{Result, TimetableError};

/// How a slot was reached during slot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Taken from the ranked-preference list.
    Preferred,
    /// First free slot of the catalog scan.
    Free,
    /// No free slot was left; a soft-restricted slot was used.
    SoftBlocked,
}

/// A lesson placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub lesson: LessonId,
    pub slot: SlotId,
    pub placement: Placement,
}

impl Assignment {
    pub fn new(lesson: LessonId, slot: SlotId, placement: Placement) -> Self {
        Self {
            lesson,
            slot,
            placement,
        }
    }
}

/// Final state of a coloring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Every lesson received a slot.
    Complete,
    /// `lesson` had neither a free nor a soft-blocked slot left.
    Aborted { lesson: LessonId },
}

/// Result of a coloring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    assignments: Vec<Assignment>,
    status: RunStatus,
}

impl Schedule {
    /// A run in which every lesson was placed.
    pub fn complete(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            status: RunStatus::Complete,
        }
    }

    /// A run that stopped at `lesson`.
    pub fn aborted(assignments: Vec<Assignment>, lesson: LessonId) -> Self {
        Self {
            assignments,
            status: RunStatus::Aborted { lesson },
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == RunStatus::Complete
    }

    /// The lesson the run stopped at, if it aborted.
    pub fn failed_lesson(&self) -> Option<LessonId> {
        match self.status {
            RunStatus::Complete => None,
            RunStatus::Aborted { lesson } => Some(lesson),
        }
    }

    /// Assignments in assignment order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn assignment_for_lesson(&self, lesson: LessonId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.lesson == lesson)
    }

    pub fn assignments_in_slot(&self, slot: SlotId) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.slot == slot).collect()
    }

    pub fn count_placement(&self, placement: Placement) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.placement == placement)
            .count()
    }

    /// Converts an aborted run into an error naming the failing lesson.
    pub fn ensure_complete(&self, timetable: &Timetable) -> Result<()> {
        match self.status {
            RunStatus::Complete => Ok(()),
            RunStatus::Aborted { lesson } => {
                Err(TimetableError::Unschedulable(timetable.lesson_label(lesson)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Assignment> {
        vec![
            Assignment::new(LessonId(0), SlotId(0), Placement::Free),
            Assignment::new(LessonId(1), SlotId(1), Placement::Preferred),
            Assignment::new(LessonId(2), SlotId(0), Placement::SoftBlocked),
        ]
    }

    #[test]
    fn test_complete_schedule() {
        let s = Schedule::complete(sample());
        assert!(s.is_complete());
        assert_eq!(s.failed_lesson(), None);
        assert_eq!(s.assignment_count(), 3);
        assert_eq!(
            s.assignment_for_lesson(LessonId(1)).map(|a| a.slot),
            Some(SlotId(1))
        );
        assert_eq!(s.assignments_in_slot(SlotId(0)).len(), 2);
        assert_eq!(s.count_placement(Placement::SoftBlocked), 1);
    }

    #[test]
    fn test_aborted_schedule() {
        let s = Schedule::aborted(sample(), LessonId(9));
        assert!(!s.is_complete());
        assert_eq!(s.failed_lesson(), Some(LessonId(9)));
        assert_eq!(s.status(), RunStatus::Aborted { lesson: LessonId(9) });
    }
}
