//! Timetable quality metrics (KPIs).
//!
//! Computes indicators from a colored (or partially colored) timetable
//! and the schedule that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion rate | Assigned lessons / all lessons |
//! | Soft placements | Lessons placed in a soft-restricted slot |
//! | Preference rate | Lessons on a slot their teacher prefers / lessons whose teacher has preferences |
//! | Back-to-back pairs | Same lesson in two consecutive periods of one day, per class group |
//! | Triple runs | Same lesson in three consecutive periods of one day, per class group |
//!
//! A run of three identical periods counts as two pairs and one triple.

use serde::Serialize;

use crate::models::{HolderKind, LessonKey, LessonVertex, Placement, Schedule, Timetable};

/// Timetable quality indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableKpi {
    pub lessons_total: usize,
    pub lessons_assigned: usize,
    /// Fraction of lessons with a slot (0.0..1.0). 1.0 for an empty timetable.
    pub completion_rate: f64,
    pub soft_placements: usize,
    pub preference_hits: usize,
    /// Fraction of eligible lessons on a preferred slot. 1.0 if none is eligible.
    pub preference_rate: f64,
    pub back_to_back_pairs: usize,
    pub triple_runs: usize,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and the schedule of its run.
    pub fn calculate(timetable: &Timetable, schedule: &Schedule) -> Self {
        let lessons_total = timetable.lesson_count();
        let lessons_assigned = timetable
            .lessons()
            .iter()
            .filter(|l| l.is_assigned())
            .count();

        let mut eligible = 0usize;
        let mut preference_hits = 0usize;
        for lesson in timetable.lessons() {
            let teacher = timetable.holder(lesson.teacher());
            let Some(slot) = lesson.assigned_slot() else {
                continue;
            };
            if teacher.preferred_slots().is_empty() {
                continue;
            }
            eligible += 1;
            if teacher.prefers(slot) {
                preference_hits += 1;
            }
        }

        let (back_to_back_pairs, triple_runs) = count_runs(timetable);

        Self {
            lessons_total,
            lessons_assigned,
            completion_rate: ratio(lessons_assigned, lessons_total),
            soft_placements: schedule.count_placement(Placement::SoftBlocked),
            preference_hits,
            preference_rate: ratio(preference_hits, eligible),
            back_to_back_pairs,
            triple_runs,
        }
    }

    /// Every lesson placed, no soft-blocked slot used, no triple run.
    pub fn is_clean(&self) -> bool {
        self.lessons_assigned == self.lessons_total
            && self.soft_placements == 0
            && self.triple_runs == 0
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        1.0
    } else {
        part as f64 / whole as f64
    }
}

/// Counts same-lesson pairs and triples per class group and day.
fn count_runs(timetable: &Timetable) -> (usize, usize) {
    let catalog = timetable.catalog();
    let mut pairs = 0;
    let mut triples = 0;

    for (index, holder) in timetable.holders().iter().enumerate() {
        if holder.kind() != HolderKind::ClassGroup {
            continue;
        }
        let row: Vec<Option<&LessonKey>> = catalog
            .slots()
            .iter()
            .map(|slot| {
                slot.assigned()
                    .iter()
                    .map(|&id| timetable.lesson(id))
                    .find(|l| l.class_group().0 == index)
                    .map(LessonVertex::key)
            })
            .collect();

        for day in row.chunks(catalog.periods_per_day()) {
            for w in day.windows(2) {
                if let [Some(a), Some(b)] = w {
                    if a == b {
                        pairs += 1;
                    }
                }
            }
            for w in day.windows(3) {
                if let [Some(a), Some(b), Some(c)] = w {
                    if a == b && b == c {
                        triples += 1;
                    }
                }
            }
        }
    }

    (pairs, triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TimetableInput;
    use crate::scheduler::DsaturScheduler;

    /// Only Monday is open for 7A.
    fn monday_only(periods: &[&str]) -> TimetableInput {
        let mut input = TimetableInput::new(periods.iter().copied());
        for day in ["Tue", "Wed", "Thu", "Fri"] {
            for period in periods {
                input = input.with_class_unavailability("7A", period, day);
            }
        }
        input
    }

    #[test]
    fn test_kpi_pair() {
        let input = monday_only(&["P1", "P2", "P3", "P4"]).with_lesson("Math", "7A", "Ana", 2);
        let mut tt = input.build().unwrap();
        let schedule = DsaturScheduler::new().schedule(&mut tt);

        let kpi = TimetableKpi::calculate(&tt, &schedule);
        assert_eq!(kpi.lessons_total, 2);
        assert_eq!(kpi.lessons_assigned, 2);
        assert!((kpi.completion_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.back_to_back_pairs, 1);
        assert_eq!(kpi.triple_runs, 0);
        assert!(kpi.is_clean());
    }

    #[test]
    fn test_kpi_forced_triple() {
        let input = monday_only(&["P1", "P2", "P3"]).with_lesson("Math", "7A", "Ana", 3);
        let mut tt = input.build().unwrap();
        let schedule = DsaturScheduler::new().schedule(&mut tt);

        let kpi = TimetableKpi::calculate(&tt, &schedule);
        assert_eq!(kpi.soft_placements, 1);
        assert_eq!(kpi.back_to_back_pairs, 2);
        assert_eq!(kpi.triple_runs, 1);
        assert!(!kpi.is_clean());
    }

    #[test]
    fn test_kpi_preferences() {
        let input = TimetableInput::new(["P1", "P2"])
            .with_lesson("Math", "7A", "Ana", 1)
            .with_lesson("Art", "7B", "Bia", 1)
            .with_teacher_preference("Ana", "P2", "Wed");
        let mut tt = input.build().unwrap();
        let schedule = DsaturScheduler::new().schedule(&mut tt);

        let kpi = TimetableKpi::calculate(&tt, &schedule);
        // Bia has no preferences and is not counted
        assert_eq!(kpi.preference_hits, 1);
        assert!((kpi.preference_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_partial_run() {
        let mut input = TimetableInput::new(["P1"])
            .with_lesson("Math", "7A", "Ana", 1)
            .with_lesson("Art", "7B", "Bia", 1);
        for day in ["Mon", "Tue", "Wed", "Thu", "Fri"] {
            input = input.with_class_unavailability("7B", "P1", day);
        }
        let mut tt = input.build().unwrap();
        let schedule = DsaturScheduler::new().schedule(&mut tt);

        let kpi = TimetableKpi::calculate(&tt, &schedule);
        assert!(!schedule.is_complete());
        assert!(kpi.completion_rate < 1.0);
        assert!(!kpi.is_clean());
    }

    #[test]
    fn test_kpi_empty() {
        let tt = TimetableInput::new(["P1"]).build().unwrap();
        let kpi = TimetableKpi::calculate(&tt, &Schedule::complete(Vec::new()));
        assert_eq!(kpi.lessons_total, 0);
        assert!((kpi.completion_rate - 1.0).abs() < 1e-10);
        assert!(kpi.is_clean());
    }
}
