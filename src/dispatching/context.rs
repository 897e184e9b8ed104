//! Coloring state passed to dispatching rules.

use crate::graph::ConflictGraph;
use crate::models::{LessonId, LessonVertex};

/// Read-only view of the lessons and their conflict graph.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    lessons: &'a [LessonVertex],
    graph: &'a ConflictGraph,
}

impl<'a> DispatchContext<'a> {
    pub fn new(lessons: &'a [LessonVertex], graph: &'a ConflictGraph) -> Self {
        Self { lessons, graph }
    }

    pub fn lesson(&self, id: LessonId) -> &'a LessonVertex {
        &self.lessons[id.index()]
    }

    /// Static degree of `id` in the conflict graph.
    pub fn degree(&self, id: LessonId) -> usize {
        self.graph.degree(id)
    }

    pub fn graph(&self) -> &'a ConflictGraph {
        self.graph
    }
}
