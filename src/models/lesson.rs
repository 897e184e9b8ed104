//! Lesson vertex model.
//!
//! A lesson vertex is one weekly occurrence of (subject, class group,
//! teacher). Repeated sessions of the same lesson share a [`LessonKey`].
//! Each vertex carries the restriction and preference state that the
//! colorer grows while neighbors get their slots.
//!
//! # Invariant
//! A slot is never both a restriction and a preference: restricting a slot
//! drops it from `preferences` and `sequential_candidates`, and neither of
//! those accepts an already restricted slot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{ConstraintHolder, HolderId, SlotId};

/// Index of a lesson vertex in the timetable arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LessonId(pub usize);

impl LessonId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Logical identity of a lesson: vertices with equal keys are repeated
/// weekly sessions of one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonKey {
    pub subject: String,
    pub class_group: HolderId,
    pub teacher: HolderId,
}

/// One weekly session to be placed in a slot.
#[derive(Debug, Clone, Serialize)]
pub struct LessonVertex {
    key: LessonKey,
    hard_restrictions: BTreeSet<SlotId>,
    soft_restrictions: BTreeSet<SlotId>,
    /// Multiset kept as a list; duplicates are reinforcements.
    preferences: Vec<SlotId>,
    sequential_candidates: Vec<SlotId>,
    saturation: u32,
    assigned_slot: Option<SlotId>,
}

impl LessonVertex {
    pub fn new(key: LessonKey) -> Self {
        Self {
            key,
            hard_restrictions: BTreeSet::new(),
            soft_restrictions: BTreeSet::new(),
            preferences: Vec::new(),
            sequential_candidates: Vec::new(),
            saturation: 0,
            assigned_slot: None,
        }
    }

    pub fn key(&self) -> &LessonKey {
        &self.key
    }

    pub fn subject(&self) -> &str {
        &self.key.subject
    }

    pub fn class_group(&self) -> HolderId {
        self.key.class_group
    }

    pub fn teacher(&self) -> HolderId {
        self.key.teacher
    }

    /// Whether `other` is another session of the same lesson.
    pub fn is_same_lesson(&self, other: &LessonVertex) -> bool {
        self.key == other.key
    }

    pub fn hard_restrictions(&self) -> &BTreeSet<SlotId> {
        &self.hard_restrictions
    }

    pub fn soft_restrictions(&self) -> &BTreeSet<SlotId> {
        &self.soft_restrictions
    }

    pub fn preferences(&self) -> &[SlotId] {
        &self.preferences
    }

    pub fn sequential_candidates(&self) -> &[SlotId] {
        &self.sequential_candidates
    }

    /// Number of colored-neighbor events seen so far.
    pub fn saturation(&self) -> u32 {
        self.saturation
    }

    pub fn assigned_slot(&self) -> Option<SlotId> {
        self.assigned_slot
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_slot.is_some()
    }

    pub fn is_hard_restricted(&self, slot: SlotId) -> bool {
        self.hard_restrictions.contains(&slot)
    }

    pub fn is_soft_restricted(&self, slot: SlotId) -> bool {
        self.soft_restrictions.contains(&slot)
    }

    /// Hard or soft.
    pub fn is_restricted(&self, slot: SlotId) -> bool {
        self.is_hard_restricted(slot) || self.is_soft_restricted(slot)
    }

    pub fn is_sequential_candidate(&self, slot: SlotId) -> bool {
        self.sequential_candidates.contains(&slot)
    }

    pub fn has_sequential_candidate(&self) -> bool {
        !self.sequential_candidates.is_empty()
    }

    pub fn hard_restriction_count(&self) -> usize {
        self.hard_restrictions.len()
    }

    /// Size of the preference multiset.
    pub fn preference_count(&self) -> usize {
        self.preferences.len()
    }

    /// Forbids a slot. Returns `false` if it was already forbidden.
    pub fn add_hard_restriction(&mut self, slot: SlotId) -> bool {
        self.drop_wish(slot);
        self.hard_restrictions.insert(slot)
    }

    /// Discourages a slot. A hard-restricted slot is not recorded again as
    /// soft. Returns `true` if the soft set grew.
    pub fn add_soft_restriction(&mut self, slot: SlotId) -> bool {
        self.drop_wish(slot);
        if self.is_hard_restricted(slot) {
            return false;
        }
        self.soft_restrictions.insert(slot)
    }

    /// Adds one reinforcement of `slot` unless it is restricted.
    pub fn add_preference(&mut self, slot: SlotId) -> bool {
        if self.is_restricted(slot) {
            return false;
        }
        self.preferences.push(slot);
        true
    }

    /// Suggests `slot` as the continuation of a back-to-back pair.
    pub fn add_sequential_candidate(&mut self, slot: SlotId) -> bool {
        if self.is_restricted(slot) || self.is_sequential_candidate(slot) {
            return false;
        }
        self.sequential_candidates.push(slot);
        true
    }

    pub fn increment_saturation(&mut self) {
        self.saturation += 1;
    }

    /// Copies the holders' hard slots and the teacher's preferred slots.
    ///
    /// Repeating the call leaves the state unchanged.
    pub fn seed(&mut self, teacher: &ConstraintHolder, class_group: &ConstraintHolder) {
        for &slot in teacher.hard_slots().iter().chain(class_group.hard_slots()) {
            self.add_hard_restriction(slot);
        }
        for &slot in teacher.preferred_slots() {
            if !self.preferences.contains(&slot) {
                self.add_preference(slot);
            }
        }
    }

    /// Preferred slots ranked by reinforcement count.
    ///
    /// Merges the preference multiset with the sequential candidates, each
    /// candidate counting once. Higher counts come first; equal counts keep
    /// the order of first appearance.
    pub fn ranked_preferences(&self) -> Vec<SlotId> {
        let mut counts: Vec<(SlotId, usize)> = Vec::new();
        for &slot in self.preferences.iter().chain(&self.sequential_candidates) {
            match counts.iter_mut().find(|(s, _)| *s == slot) {
                Some((_, n)) => *n += 1,
                None => counts.push((slot, 1)),
            }
        }
        // stable: ties keep first-appearance order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().map(|(slot, _)| slot).collect()
    }

    pub(crate) fn assign(&mut self, slot: SlotId) {
        self.assigned_slot = Some(slot);
    }

    /// Drops every restriction, wish, saturation event and the assignment.
    /// The key is kept.
    pub(crate) fn clear(&mut self) {
        self.hard_restrictions.clear();
        self.soft_restrictions.clear();
        self.preferences.clear();
        self.sequential_candidates.clear();
        self.saturation = 0;
        self.assigned_slot = None;
    }

    fn drop_wish(&mut self, slot: SlotId) {
        self.preferences.retain(|&s| s != slot);
        self.sequential_candidates.retain(|&s| s != slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex() -> LessonVertex {
        LessonVertex::new(LessonKey {
            subject: "Math".into(),
            class_group: HolderId(0),
            teacher: HolderId(1),
        })
    }

    #[test]
    fn test_restriction_removes_wishes() {
        let mut v = vertex();
        v.add_preference(SlotId(1));
        v.add_preference(SlotId(1));
        v.add_sequential_candidate(SlotId(1));
        v.add_sequential_candidate(SlotId(2));

        assert!(v.add_hard_restriction(SlotId(1)));
        assert!(v.preferences().is_empty());
        assert_eq!(v.sequential_candidates(), &[SlotId(2)]);

        assert!(v.add_soft_restriction(SlotId(2)));
        assert!(!v.has_sequential_candidate());
    }

    #[test]
    fn test_soft_skips_hard_slots() {
        let mut v = vertex();
        v.add_hard_restriction(SlotId(4));
        assert!(!v.add_soft_restriction(SlotId(4)));
        assert!(v.soft_restrictions().is_empty());

        // soft first, then hard: both are kept
        v.add_soft_restriction(SlotId(5));
        v.add_hard_restriction(SlotId(5));
        assert!(v.is_soft_restricted(SlotId(5)));
        assert!(v.is_hard_restricted(SlotId(5)));
    }

    #[test]
    fn test_restricted_slots_are_not_wished() {
        let mut v = vertex();
        v.add_soft_restriction(SlotId(3));
        assert!(!v.add_preference(SlotId(3)));
        assert!(!v.add_sequential_candidate(SlotId(3)));
        assert!(!v.add_sequential_candidate(SlotId(3)));
        assert!(v.add_sequential_candidate(SlotId(6)));
        assert!(!v.add_sequential_candidate(SlotId(6)));
    }

    #[test]
    fn test_ranked_preferences() {
        let mut v = vertex();
        v.add_preference(SlotId(7));
        v.add_preference(SlotId(2));
        v.add_sequential_candidate(SlotId(9));
        v.add_sequential_candidate(SlotId(2));

        // 2 has two reinforcements; 7 and 9 tie and keep appearance order
        assert_eq!(
            v.ranked_preferences(),
            vec![SlotId(2), SlotId(7), SlotId(9)]
        );
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut teacher = ConstraintHolder::teacher("T");
        teacher.add_hard_slot(SlotId(0));
        teacher.add_preferred_slot(SlotId(3));
        teacher.add_preferred_slot(SlotId(0));
        let mut class = ConstraintHolder::class_group("C");
        class.add_hard_slot(SlotId(1));

        let mut v = vertex();
        v.seed(&teacher, &class);
        let hard = v.hard_restrictions().clone();
        let prefs = v.preferences().to_vec();
        v.seed(&teacher, &class);

        assert_eq!(v.hard_restrictions(), &hard);
        assert_eq!(v.preferences(), prefs.as_slice());
        assert_eq!(prefs, vec![SlotId(3)]);
        assert_eq!(v.hard_restriction_count(), 2);
    }

    #[test]
    fn test_saturation_counts_events() {
        let mut v = vertex();
        v.increment_saturation();
        v.increment_saturation();
        assert_eq!(v.saturation(), 2);
        assert!(!v.is_assigned());
        v.assign(SlotId(4));
        assert_eq!(v.assigned_slot(), Some(SlotId(4)));
    }
}
