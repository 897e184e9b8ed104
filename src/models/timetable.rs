//! Timetable arena.
//!
//! Owns the slot catalog, the constraint holders and the lesson vertices.
//! Cross references between them are plain indices ([`SlotId`],
//! [`HolderId`], [`LessonId`]), so vertices, slots and holders never own
//! each other.

use serde::Serialize;
use std::collections::HashMap;

use super::{
    ConstraintHolder, HolderId, HolderKind, LessonId, LessonKey, LessonVertex, SlotCatalog, SlotId,
};

/// The scheduling problem and its evolving solution state.
#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    catalog: SlotCatalog,
    holders: Vec<ConstraintHolder>,
    #[serde(skip)]
    teachers: HashMap<String, HolderId>,
    #[serde(skip)]
    class_groups: HashMap<String, HolderId>,
    lessons: Vec<LessonVertex>,
}

impl Timetable {
    /// Creates an empty timetable over the given catalog.
    pub fn new(catalog: SlotCatalog) -> Self {
        Self {
            catalog,
            holders: Vec::new(),
            teachers: HashMap::new(),
            class_groups: HashMap::new(),
            lessons: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn holders(&self) -> &[ConstraintHolder] {
        &self.holders
    }

    /// # Panics
    /// If `id` was not issued by this timetable.
    pub fn holder(&self, id: HolderId) -> &ConstraintHolder {
        &self.holders[id.0]
    }

    pub(crate) fn holder_mut(&mut self, id: HolderId) -> &mut ConstraintHolder {
        &mut self.holders[id.0]
    }

    pub fn teacher_id(&self, name: &str) -> Option<HolderId> {
        self.teachers.get(name).copied()
    }

    pub fn class_group_id(&self, name: &str) -> Option<HolderId> {
        self.class_groups.get(name).copied()
    }

    /// Returns the teacher named `name`, registering it on first use.
    pub fn intern_teacher(&mut self, name: &str) -> HolderId {
        if let Some(&id) = self.teachers.get(name) {
            return id;
        }
        let id = HolderId(self.holders.len());
        self.holders.push(ConstraintHolder::teacher(name));
        self.teachers.insert(name.to_string(), id);
        id
    }

    /// Returns the class group named `name`, registering it on first use.
    pub fn intern_class_group(&mut self, name: &str) -> HolderId {
        if let Some(&id) = self.class_groups.get(name) {
            return id;
        }
        let id = HolderId(self.holders.len());
        self.holders.push(ConstraintHolder::class_group(name));
        self.class_groups.insert(name.to_string(), id);
        id
    }

    /// Adds `weekly_count` sessions of one lesson and returns their ids.
    pub fn add_lesson(
        &mut self,
        subject: &str,
        class_group: &str,
        teacher: &str,
        weekly_count: usize,
    ) -> Vec<LessonId> {
        let key = LessonKey {
            subject: subject.to_string(),
            class_group: self.intern_class_group(class_group),
            teacher: self.intern_teacher(teacher),
        };
        (0..weekly_count)
            .map(|_| {
                let id = LessonId(self.lessons.len());
                self.lessons.push(LessonVertex::new(key.clone()));
                id
            })
            .collect()
    }

    pub fn lessons(&self) -> &[LessonVertex] {
        &self.lessons
    }

    /// # Panics
    /// If `id` was not issued by this timetable.
    pub fn lesson(&self, id: LessonId) -> &LessonVertex {
        &self.lessons[id.0]
    }

    pub(crate) fn lesson_mut(&mut self, id: LessonId) -> &mut LessonVertex {
        &mut self.lessons[id.0]
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn lesson_ids(&self) -> impl Iterator<Item = LessonId> {
        (0..self.lessons.len()).map(LessonId)
    }

    /// Copies holder restrictions and teacher preferences down to every
    /// lesson. Idempotent.
    pub fn seed_lessons(&mut self) {
        for lesson in &mut self.lessons {
            let teacher = &self.holders[lesson.teacher().0];
            let class_group = &self.holders[lesson.class_group().0];
            lesson.seed(teacher, class_group);
        }
    }

    /// Returns the timetable to its freshly seeded state: lesson run state
    /// and slot lists are cleared, holder data is kept and seeded again.
    pub fn reset_run(&mut self) {
        for lesson in &mut self.lessons {
            lesson.clear();
        }
        self.catalog.clear_assignments();
        self.seed_lessons();
    }

    /// Places `lesson` in `slot` on both sides of the relation.
    pub(crate) fn assign(&mut self, lesson: LessonId, slot: SlotId) {
        self.lessons[lesson.0].assign(slot);
        self.catalog.slot_mut(slot).push(lesson);
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.lessons.iter().all(LessonVertex::is_assigned)
    }

    /// Lessons of a holder, whichever kind it is.
    pub fn lessons_of(&self, holder: HolderId) -> impl Iterator<Item = LessonId> + '_ {
        let kind = self.holder(holder).kind();
        self.lesson_ids().filter(move |&id| {
            let lesson = self.lesson(id);
            match kind {
                HolderKind::Teacher => lesson.teacher() == holder,
                HolderKind::ClassGroup => lesson.class_group() == holder,
            }
        })
    }

    /// "Math / 7A / Ana" style label.
    pub fn lesson_label(&self, id: LessonId) -> String {
        let lesson = self.lesson(id);
        format!(
            "{} / {} / {}",
            lesson.subject(),
            self.holder(lesson.class_group()).name(),
            self.holder(lesson.teacher()).name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timetable() -> Timetable {
        Timetable::new(SlotCatalog::new(["P1", "P2"]).unwrap())
    }

    #[test]
    fn test_lesson_expansion() {
        let mut tt = timetable();
        let ids = tt.add_lesson("Math", "7A", "Ana", 3);
        assert_eq!(ids, vec![LessonId(0), LessonId(1), LessonId(2)]);
        assert!(tt.lesson(LessonId(0)).is_same_lesson(tt.lesson(LessonId(2))));
        assert_eq!(tt.lesson_label(LessonId(1)), "Math / 7A / Ana");
    }

    #[test]
    fn test_holders_are_interned() {
        let mut tt = timetable();
        tt.add_lesson("Math", "7A", "Ana", 1);
        tt.add_lesson("Art", "7A", "Bia", 1);
        tt.add_lesson("Math", "7B", "Ana", 1);
        assert_eq!(tt.holders().len(), 4);
        let ana = tt.teacher_id("Ana").unwrap();
        assert_eq!(tt.lessons_of(ana).count(), 2);
        let class_7a = tt.class_group_id("7A").unwrap();
        assert_eq!(tt.lessons_of(class_7a).count(), 2);
        assert!(tt.teacher_id("7A").is_none());
    }

    #[test]
    fn test_teacher_and_class_may_share_a_name() {
        let mut tt = timetable();
        tt.add_lesson("Math", "X", "X", 1);
        assert_ne!(tt.teacher_id("X"), tt.class_group_id("X"));
    }

    #[test]
    fn test_seed_and_assign() {
        let mut tt = timetable();
        tt.add_lesson("Math", "7A", "Ana", 1);
        let ana = tt.teacher_id("Ana").unwrap();
        tt.holder_mut(ana).add_hard_slot(SlotId(0));
        tt.holder_mut(ana).add_preferred_slot(SlotId(1));
        tt.seed_lessons();
        tt.seed_lessons();

        let lesson = tt.lesson(LessonId(0));
        assert!(lesson.is_hard_restricted(SlotId(0)));
        assert_eq!(lesson.preferences(), &[SlotId(1)]);

        tt.assign(LessonId(0), SlotId(1));
        assert!(tt.is_fully_assigned());
        assert_eq!(tt.catalog().slot(SlotId(1)).assigned(), &[LessonId(0)]);
    }

    #[test]
    fn test_reset_run_restores_seeded_state() {
        let mut tt = timetable();
        tt.add_lesson("Math", "7A", "Ana", 2);
        let ana = tt.teacher_id("Ana").unwrap();
        tt.holder_mut(ana).add_hard_slot(SlotId(0));
        tt.holder_mut(ana).add_preferred_slot(SlotId(3));
        tt.seed_lessons();

        {
            let l = tt.lesson_mut(LessonId(1));
            l.increment_saturation();
            l.add_hard_restriction(SlotId(3));
            l.add_soft_restriction(SlotId(5));
            l.add_sequential_candidate(SlotId(6));
        }
        tt.assign(LessonId(0), SlotId(2));

        tt.reset_run();

        assert!(!tt.lessons().iter().any(LessonVertex::is_assigned));
        assert!(tt.catalog().slots().iter().all(|s| s.is_empty()));
        for lesson in tt.lessons() {
            assert_eq!(lesson.saturation(), 0);
            assert_eq!(lesson.hard_restrictions().iter().copied().collect::<Vec<_>>(), vec![SlotId(0)]);
            assert!(lesson.soft_restrictions().is_empty());
            assert!(!lesson.has_sequential_candidate());
            assert_eq!(lesson.preferences(), &[SlotId(3)]);
        }
    }
}
