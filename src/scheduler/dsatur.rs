//! Extended DSATUR colorer.
//!
//! # Algorithm
//!
//! Until every lesson is colored or one cannot be placed:
//! 1. Pool: uncolored neighbors of the last colored lesson, or every
//!    uncolored lesson if there are none.
//! 2. Pick a lesson with the rule engine (saturation, degree, hard
//!    restrictions, sequential candidates, preferences).
//! 3. Pick a slot (preferences, then catalog; free before soft-blocked).
//! 4. Assign, then propagate to every uncolored neighbor:
//!    - saturation + 1;
//!    - the slot becomes a hard restriction;
//!    - for another session of the same lesson, the same-day slots around
//!      the assignment become soft restrictions if this assignment closed a
//!      back-to-back pair, or sequential candidates otherwise.
//!
//! Propagation always finishes before the next selection, which is what
//! keeps adjacent lessons out of the same slot.
//!
//! # Complexity
//! O(V²) graph work plus O(V · S) slot scans.
//!
//! # Reference
//! Brélaz (1979), "New methods to color the vertices of a graph"

use tracing::{debug, info, warn};

use super::placement::select_slot;
use super::SchedulerConfig;
use crate::dispatching::{DispatchContext, RuleEngine};
use crate::graph::ConflictGraph;
use crate::models::{Assignment, LessonId, Schedule, SlotId, Timetable};

/// Heuristic lesson-to-slot colorer.
///
/// # Example
///
/// ```
/// use u_timetable::input::TimetableInput;
/// use u_timetable::scheduler::DsaturScheduler;
///
/// let input = TimetableInput::new(["P1", "P2"])
///     .with_lesson("Math", "7A", "Ana", 2)
///     .with_lesson("Art", "7A", "Bia", 1);
/// let mut timetable = input.build().unwrap();
///
/// let schedule = DsaturScheduler::new().schedule(&mut timetable);
/// assert!(schedule.is_complete());
/// assert_eq!(schedule.assignment_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DsaturScheduler {
    rule_engine: RuleEngine,
    config: SchedulerConfig,
}

impl DsaturScheduler {
    /// Creates a colorer with the extended DSATUR rule chain.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::dsatur(),
            config: SchedulerConfig::default(),
        }
    }

    /// Replaces the lesson-selection chain.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds the conflict graph and colors every lesson of `timetable`.
    ///
    /// Every run starts from the seeded state (see
    /// [`Timetable::reset_run`]), so scheduling the same timetable twice
    /// gives the same result. The timetable is mutated in place and keeps
    /// the partial state of an aborted run.
    pub fn schedule(&self, timetable: &mut Timetable) -> Schedule {
        let graph = ConflictGraph::build(timetable.lessons());
        self.schedule_with_graph(timetable, &graph)
    }

    /// Colors `timetable` using a prebuilt conflict graph.
    ///
    /// # Panics
    /// If `graph` was not built from the lessons of `timetable`.
    pub fn schedule_with_graph(&self, timetable: &mut Timetable, graph: &ConflictGraph) -> Schedule {
        assert_eq!(
            graph.vertex_count(),
            timetable.lesson_count(),
            "conflict graph does not match the timetable"
        );
        timetable.reset_run();

        info!(
            lessons = timetable.lesson_count(),
            slots = timetable.catalog().len(),
            edges = graph.edge_count(),
            "starting timetable coloring"
        );

        let mut uncolored = self.config.tie_break.initial_order(timetable.lesson_count());
        let mut colored = vec![false; timetable.lesson_count()];
        let mut assignments = Vec::with_capacity(uncolored.len());
        let mut previous: Option<LessonId> = None;

        while !uncolored.is_empty() {
            let pool = self.candidate_pool(previous, &uncolored, graph);
            let ctx = DispatchContext::new(timetable.lessons(), graph);
            let Some(lesson) = self.rule_engine.select_best(&pool, &ctx) else {
                break;
            };

            let Some(choice) = select_slot(timetable.lesson(lesson), timetable.catalog()) else {
                warn!(
                    lesson = %timetable.lesson_label(lesson),
                    colored = assignments.len(),
                    remaining = uncolored.len(),
                    "no usable slot left, aborting run"
                );
                return Schedule::aborted(assignments, lesson);
            };

            timetable.assign(lesson, choice.slot);
            colored[lesson.index()] = true;
            propagate(timetable, graph, lesson, choice.slot, &colored);
            uncolored.retain(|&id| id != lesson);

            debug!(
                lesson = %timetable.lesson_label(lesson),
                slot = %timetable.catalog().slot(choice.slot).label(),
                placement = ?choice.placement,
                "lesson assigned"
            );
            assignments.push(Assignment::new(lesson, choice.slot, choice.placement));
            previous = Some(lesson);
        }

        info!(colored = assignments.len(), "timetable coloring complete");
        Schedule::complete(assignments)
    }

    /// Uncolored neighbors of `previous` in uncolored order, or all
    /// uncolored lessons when that set is empty.
    fn candidate_pool(
        &self,
        previous: Option<LessonId>,
        uncolored: &[LessonId],
        graph: &ConflictGraph,
    ) -> Vec<LessonId> {
        if self.config.neighbor_first {
            if let Some(prev) = previous {
                let neighbors: Vec<LessonId> = uncolored
                    .iter()
                    .copied()
                    .filter(|&id| graph.is_adjacent(prev, id))
                    .collect();
                if !neighbors.is_empty() {
                    return neighbors;
                }
            }
        }
        uncolored.to_vec()
    }
}

impl Default for DsaturScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the consequences of placing `lesson` in `slot` to its uncolored
/// neighbors.
fn propagate(
    timetable: &mut Timetable,
    graph: &ConflictGraph,
    lesson: LessonId,
    slot: SlotId,
    colored: &[bool],
) {
    let key = timetable.lesson(lesson).key().clone();
    let closes_pair = timetable.lesson(lesson).is_sequential_candidate(slot);
    let around: Vec<SlotId> = timetable.catalog().day_neighbors(slot).collect();

    for &neighbor in graph.neighbors(lesson) {
        if colored[neighbor.index()] {
            continue;
        }
        let vertex = timetable.lesson_mut(neighbor);
        vertex.increment_saturation();
        vertex.add_hard_restriction(slot);

        if vertex.key() != &key {
            continue;
        }
        for &adjacent in &around {
            if closes_pair {
                vertex.add_soft_restriction(adjacent);
            } else {
                vertex.add_sequential_candidate(adjacent);
            }
        }
    }
}
