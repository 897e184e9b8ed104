//! Grid reporting.
//!
//! Read-only views of a (possibly partial) timetable: for one class group
//! or one teacher, what occupies each slot of the catalog in canonical
//! order. Rendering is left to the caller.

use serde::Serialize;

use crate::error::{Result, TimetableError};
use crate::models::{HolderId, HolderKind, SlotId, Timetable, Weekday};

/// What a holder has in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GridEntry {
    Empty,
    Lesson {
        subject: String,
        teacher: String,
        class_group: String,
    },
}

impl GridEntry {
    pub fn is_empty(&self) -> bool {
        matches!(self, GridEntry::Empty)
    }
}

/// One slot of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub slot: SlotId,
    pub day: Weekday,
    pub period: String,
    pub entry: GridEntry,
}

/// A holder's week, one cell per catalog slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub holder: String,
    pub cells: Vec<GridCell>,
}

impl Grid {
    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.entry.is_empty()).count()
    }

    pub fn entry_at(&self, day: Weekday, period: &str) -> Option<&GridEntry> {
        self.cells
            .iter()
            .find(|c| c.day == day && c.period == period)
            .map(|c| &c.entry)
    }

    /// Cells of one day in period order.
    pub fn day(&self, day: Weekday) -> impl Iterator<Item = &GridCell> + '_ {
        self.cells.iter().filter(move |c| c.day == day)
    }
}

/// The week of a class group.
///
/// # Errors
/// `UnknownClassGroup` if no lesson names `class_group`.
pub fn class_grid(timetable: &Timetable, class_group: &str) -> Result<Grid> {
    let id = timetable
        .class_group_id(class_group)
        .ok_or_else(|| TimetableError::UnknownClassGroup(class_group.to_string()))?;
    Ok(grid_for(timetable, id))
}

/// The week of a teacher.
///
/// # Errors
/// `UnknownTeacher` if no lesson names `teacher`.
pub fn teacher_grid(timetable: &Timetable, teacher: &str) -> Result<Grid> {
    let id = timetable
        .teacher_id(teacher)
        .ok_or_else(|| TimetableError::UnknownTeacher(teacher.to_string()))?;
    Ok(grid_for(timetable, id))
}

fn grid_for(timetable: &Timetable, holder: HolderId) -> Grid {
    let kind = timetable.holder(holder).kind();
    let cells = timetable
        .catalog()
        .slots()
        .iter()
        .map(|slot| {
            let occupant = slot.assigned().iter().map(|&id| timetable.lesson(id)).find(|l| {
                match kind {
                    HolderKind::Teacher => l.teacher() == holder,
                    HolderKind::ClassGroup => l.class_group() == holder,
                }
            });
            let entry = match occupant {
                Some(lesson) => GridEntry::Lesson {
                    subject: lesson.subject().to_string(),
                    teacher: timetable.holder(lesson.teacher()).name().to_string(),
                    class_group: timetable.holder(lesson.class_group()).name().to_string(),
                },
                None => GridEntry::Empty,
            };
            GridCell {
                slot: slot.id(),
                day: slot.day(),
                period: slot.period().to_string(),
                entry,
            }
        })
        .collect();

    Grid {
        holder: timetable.holder(holder).name().to_string(),
        cells,
    }
}
