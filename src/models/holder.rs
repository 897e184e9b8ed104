//! Constraint holders: teachers and class groups.
//!
//! Both kinds own a set of hard-unavailable slots. Teachers additionally
//! own preferred slots. Holders are created when a lesson requirement
//! first names them and only gain restrictions or preferences while the
//! input is loaded.

use serde::{Deserialize, Serialize};

use super::SlotId;

/// Index of a holder in the timetable arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolderId(pub usize);

/// Holder classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderKind {
    /// Teaches lessons; may declare preferred slots.
    Teacher,
    /// A class of students.
    ClassGroup,
}

/// A named entity owning hard-unavailable slots.
///
/// Slot sets keep insertion order, which later decides the order in which
/// preferences are tried.
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintHolder {
    name: String,
    kind: HolderKind,
    hard_slots: Vec<SlotId>,
    /// `Some` for teachers only.
    preferred_slots: Option<Vec<SlotId>>,
}

impl ConstraintHolder {
    /// Creates a teacher.
    pub fn teacher(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: HolderKind::Teacher,
            hard_slots: Vec::new(),
            preferred_slots: Some(Vec::new()),
        }
    }

    /// Creates a class group.
    pub fn class_group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: HolderKind::ClassGroup,
            hard_slots: Vec::new(),
            preferred_slots: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    /// Hard-unavailable slots in insertion order.
    pub fn hard_slots(&self) -> &[SlotId] {
        &self.hard_slots
    }

    /// Preferred slots in insertion order. Empty for class groups.
    pub fn preferred_slots(&self) -> &[SlotId] {
        self.preferred_slots.as_deref().unwrap_or(&[])
    }

    pub fn is_unavailable(&self, slot: SlotId) -> bool {
        self.hard_slots.contains(&slot)
    }

    pub fn prefers(&self, slot: SlotId) -> bool {
        self.preferred_slots().contains(&slot)
    }

    /// Marks a slot as unavailable. Returns `false` if it already was.
    pub fn add_hard_slot(&mut self, slot: SlotId) -> bool {
        if self.hard_slots.contains(&slot) {
            return false;
        }
        self.hard_slots.push(slot);
        true
    }

    /// Records a preferred slot.
    ///
    /// Returns `false` for class groups and for slots already preferred.
    pub fn add_preferred_slot(&mut self, slot: SlotId) -> bool {
        match self.preferred_slots.as_mut() {
            Some(slots) if !slots.contains(&slot) => {
                slots.push(slot);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_preferences() {
        let mut t = ConstraintHolder::teacher("Ana");
        assert_eq!(t.kind(), HolderKind::Teacher);
        assert!(t.add_preferred_slot(SlotId(3)));
        assert!(t.add_preferred_slot(SlotId(1)));
        assert!(!t.add_preferred_slot(SlotId(3)));
        assert_eq!(t.preferred_slots(), &[SlotId(3), SlotId(1)]);
        assert!(t.prefers(SlotId(1)));
    }

    #[test]
    fn test_class_group_has_no_preferences() {
        let mut c = ConstraintHolder::class_group("7A");
        assert!(!c.add_preferred_slot(SlotId(0)));
        assert!(c.preferred_slots().is_empty());
    }

    #[test]
    fn test_hard_slots_are_a_set() {
        let mut c = ConstraintHolder::class_group("7A");
        assert!(c.add_hard_slot(SlotId(2)));
        assert!(!c.add_hard_slot(SlotId(2)));
        assert_eq!(c.hard_slots().len(), 1);
        assert!(c.is_unavailable(SlotId(2)));
        assert!(!c.is_unavailable(SlotId(0)));
    }
}
