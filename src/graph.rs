//! Conflict graph over lesson vertices.
//!
//! Two lessons conflict (are adjacent) when they share a teacher, share a
//! class group, or are sessions of the same lesson. Adjacent lessons may
//! never occupy the same slot.
//!
//! The graph is computed once, after every lesson exists, and is never
//! mutated afterwards.
//!
//! # Complexity
//! O(V²) pair checks. V is the number of weekly lesson sessions of one
//! institution, so hundreds rather than millions.

use crate::models::{LessonId, LessonVertex};

/// Symmetric adjacency lists, indexed by lesson.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<LessonId>>,
}

impl ConflictGraph {
    /// Builds the graph for `lessons`, where `lessons[i]` is `LessonId(i)`.
    ///
    /// Each adjacency list is sorted by lesson id and holds no self loop.
    pub fn build(lessons: &[LessonVertex]) -> Self {
        let mut adjacency = vec![Vec::new(); lessons.len()];
        for (i, a) in lessons.iter().enumerate() {
            for (j, b) in lessons.iter().enumerate().skip(i + 1) {
                if conflicts(a, b) {
                    adjacency[i].push(LessonId(j));
                    adjacency[j].push(LessonId(i));
                }
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Self { adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, lesson: LessonId) -> &[LessonId] {
        &self.adjacency[lesson.0]
    }

    /// Static degree in the conflict graph.
    pub fn degree(&self, lesson: LessonId) -> usize {
        self.adjacency[lesson.0].len()
    }

    pub fn is_adjacent(&self, a: LessonId, b: LessonId) -> bool {
        self.adjacency[a.0].binary_search(&b).is_ok()
    }
}

fn conflicts(a: &LessonVertex, b: &LessonVertex) -> bool {
    a.teacher() == b.teacher() || a.class_group() == b.class_group() || a.is_same_lesson(b)
}
