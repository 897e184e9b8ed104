//! Colorer configuration.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::models::LessonId;

/// Order in which equally ranked lessons are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Lesson input order.
    #[default]
    InputOrder,
    /// A seeded permutation of the input order. Same seed, same timetable.
    Shuffled { seed: u64 },
}

impl TieBreak {
    /// The initial uncolored order for `count` lessons.
    pub fn initial_order(self, count: usize) -> Vec<LessonId> {
        let mut order: Vec<LessonId> = (0..count).map(LessonId).collect();
        if let TieBreak::Shuffled { seed } = self {
            let mut rng = StdRng::seed_from_u64(seed);
            order.shuffle(&mut rng);
        }
        order
    }
}

/// Colorer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Pick the next lesson among the uncolored neighbors of the last
    /// colored one before falling back to every uncolored lesson.
    pub neighbor_first: bool,
    /// Final tie-break convention.
    pub tie_break: TieBreak,
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbor_first(mut self, neighbor_first: bool) -> Self {
        self.neighbor_first = neighbor_first;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            neighbor_first: true,
            tie_break: TieBreak::InputOrder,
        }
    }
}
