//! Slot selection for a chosen lesson.
//!
//! # Algorithm
//!
//! 1. Scan the lesson's ranked preferences, then the whole catalog in
//!    canonical order, skipping slots already seen.
//! 2. Hard-restricted slots are skipped outright.
//! 3. The first slot that is not soft-restricted wins.
//! 4. Otherwise the earliest soft-restricted slot of the scan is used.
//! 5. If neither exists the lesson cannot be placed.
//!
//! # Complexity
//! O(S) for S catalog slots, plus the preference ranking.

use serde::{Deserialize, Serialize};

use crate::models::{LessonVertex, Placement, SlotCatalog, SlotId};

/// The slot picked for a lesson and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotChoice {
    pub slot: SlotId,
    pub placement: Placement,
}

/// Picks a slot for `lesson`, or `None` if every slot is hard-restricted.
pub fn select_slot(lesson: &LessonVertex, catalog: &SlotCatalog) -> Option<SlotChoice> {
    let mut seen = vec![false; catalog.len()];
    let mut soft_fallback: Option<SlotId> = None;

    let ranked = lesson
        .ranked_preferences()
        .into_iter()
        .map(|slot| (slot, Placement::Preferred));
    let scan = catalog.ids().map(|slot| (slot, Placement::Free));

    for (slot, placement) in ranked.chain(scan) {
        if std::mem::replace(&mut seen[slot.index()], true) {
            continue;
        }
        if lesson.is_hard_restricted(slot) {
            continue;
        }
        if lesson.is_soft_restricted(slot) {
            soft_fallback.get_or_insert(slot);
            continue;
        }
        return Some(SlotChoice { slot, placement });
    }

    soft_fallback.map(|slot| SlotChoice {
        slot,
        placement: Placement::SoftBlocked,
    })
}
