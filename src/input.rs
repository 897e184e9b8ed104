//! Input records and timetable construction.
//!
//! The records mirror what a tabular loader hands over: lesson
//! requirements, the period catalog, hard unavailability for teachers and
//! class groups, and teacher preferences.
//!
//! # Tolerant ingestion
//! A restriction or preference record naming an unknown teacher, class
//! group, day or period is skipped (logged at debug level), never raised.
//! Holders only exist once a lesson requirement names them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TimetableError};
use crate::models::{HolderId, SlotCatalog, SlotId, Timetable};

/// A lesson taught `weekly_count` times per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRequirement {
    pub subject: String,
    pub class_group: String,
    pub teacher: String,
    pub weekly_count: usize,
}

impl LessonRequirement {
    pub fn new(
        subject: impl Into<String>,
        class_group: impl Into<String>,
        teacher: impl Into<String>,
        weekly_count: usize,
    ) -> Self {
        Self {
            subject: subject.into(),
            class_group: class_group.into(),
            teacher: teacher.into(),
            weekly_count,
        }
    }
}

/// A (holder, period, day) record: unavailability or preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Teacher or class group name.
    pub holder: String,
    pub period: String,
    pub day: String,
}

impl SlotRecord {
    pub fn new(holder: impl Into<String>, period: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            period: period.into(),
            day: day.into(),
        }
    }
}

/// Everything needed to build a [`Timetable`].
///
/// # Example
/// ```
/// use u_timetable::input::TimetableInput;
///
/// let input: TimetableInput = serde_json::from_str(r#"{
///     "periods": ["07:30", "08:20"],
///     "lessons": [
///         {"subject": "Math", "class_group": "7A", "teacher": "Ana", "weekly_count": 2}
///     ],
///     "teacher_preferences": [{"holder": "Ana", "period": "08:20", "day": "Segunda"}]
/// }"#).unwrap();
///
/// let timetable = input.build().unwrap();
/// assert_eq!(timetable.lesson_count(), 2);
/// assert_eq!(timetable.catalog().len(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableInput {
    /// Period labels, applied to every weekday in this order.
    pub periods: Vec<String>,
    pub lessons: Vec<LessonRequirement>,
    pub teacher_unavailability: Vec<SlotRecord>,
    pub class_unavailability: Vec<SlotRecord>,
    pub teacher_preferences: Vec<SlotRecord>,
}

impl TimetableInput {
    /// Creates an input with the given period labels and nothing else.
    pub fn new<I, S>(periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            periods: periods.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Adds a lesson requirement.
    pub fn with_lesson(
        mut self,
        subject: &str,
        class_group: &str,
        teacher: &str,
        weekly_count: usize,
    ) -> Self {
        self.lessons.push(LessonRequirement::new(
            subject,
            class_group,
            teacher,
            weekly_count,
        ));
        self
    }

    /// Marks a slot as unavailable for a teacher.
    pub fn with_teacher_unavailability(mut self, teacher: &str, period: &str, day: &str) -> Self {
        self.teacher_unavailability
            .push(SlotRecord::new(teacher, period, day));
        self
    }

    /// Marks a slot as unavailable for a class group.
    pub fn with_class_unavailability(mut self, class_group: &str, period: &str, day: &str) -> Self {
        self.class_unavailability
            .push(SlotRecord::new(class_group, period, day));
        self
    }

    /// Records a teacher's preferred slot.
    pub fn with_teacher_preference(mut self, teacher: &str, period: &str, day: &str) -> Self {
        self.teacher_preferences
            .push(SlotRecord::new(teacher, period, day));
        self
    }

    /// Builds and seeds the timetable.
    ///
    /// # Errors
    /// `EmptyPeriodCatalog`, `DuplicatePeriod`, or `ZeroWeeklyCount`.
    pub fn build(&self) -> Result<Timetable> {
        let catalog = SlotCatalog::new(self.periods.iter().cloned())?;
        let mut timetable = Timetable::new(catalog);

        for req in &self.lessons {
            if req.weekly_count == 0 {
                return Err(TimetableError::ZeroWeeklyCount {
                    subject: req.subject.clone(),
                    class_group: req.class_group.clone(),
                    teacher: req.teacher.clone(),
                });
            }
            timetable.add_lesson(
                &req.subject,
                &req.class_group,
                &req.teacher,
                req.weekly_count,
            );
        }

        for record in &self.teacher_unavailability {
            if let Some((holder, slot)) = resolve(&timetable, record, Timetable::teacher_id) {
                timetable.holder_mut(holder).add_hard_slot(slot);
            } else {
                debug!(?record, "ignoring teacher unavailability");
            }
        }
        for record in &self.class_unavailability {
            if let Some((holder, slot)) = resolve(&timetable, record, Timetable::class_group_id) {
                timetable.holder_mut(holder).add_hard_slot(slot);
            } else {
                debug!(?record, "ignoring class group unavailability");
            }
        }
        for record in &self.teacher_preferences {
            if let Some((holder, slot)) = resolve(&timetable, record, Timetable::teacher_id) {
                timetable.holder_mut(holder).add_preferred_slot(slot);
            } else {
                debug!(?record, "ignoring teacher preference");
            }
        }

        timetable.seed_lessons();
        Ok(timetable)
    }
}

fn resolve(
    timetable: &Timetable,
    record: &SlotRecord,
    lookup: fn(&Timetable, &str) -> Option<HolderId>,
) -> Option<(HolderId, SlotId)> {
    let holder = lookup(timetable, &record.holder)?;
    let slot = timetable.catalog().resolve(&record.day, &record.period)?;
    Some((holder, slot))
}
