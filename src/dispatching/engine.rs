//! Rule engine for lexicographic lesson selection.
//!
//! Applies dispatching rules in sequence, narrowing the candidate pool to
//! the lessons with the best score at every step. A step never empties a
//! non-empty pool. Remaining ties go to the first lesson in pool order.

use std::sync::Arc;

use super::{rules, DispatchContext, DispatchingRule, RuleScore};
use crate::models::LessonId;

/// A composable, sequential rule chain.
///
/// # Example
/// ```
/// use u_timetable::dispatching::{DispatchContext, RuleEngine};
/// use u_timetable::graph::ConflictGraph;
/// use u_timetable::models::{LessonId, SlotCatalog, Timetable};
///
/// let mut tt = Timetable::new(SlotCatalog::new(["P1", "P2"]).unwrap());
/// tt.add_lesson("Math", "7A", "Ana", 2);
/// tt.add_lesson("Geo", "8C", "Duda", 1);
/// let graph = ConflictGraph::build(tt.lessons());
/// let ctx = DispatchContext::new(tt.lessons(), &graph);
///
/// // Geo has no conflicts, so a Math session wins on degree.
/// let pool = [LessonId(2), LessonId(0), LessonId(1)];
/// assert_eq!(RuleEngine::dsatur().select_best(&pool, &ctx), Some(LessonId(0)));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. It selects the first lesson of any pool.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The extended DSATUR chain: saturation, degree, hard restrictions,
    /// sequential candidates, preferences.
    pub fn dsatur() -> Self {
        Self::new()
            .with_rule(rules::MaxSaturation)
            .with_rule(rules::MaxDegree)
            .with_rule(rules::MaxHardRestrictions)
            .with_rule(rules::HasSequentialCandidate)
            .with_rule(rules::MaxPreferences)
    }

    /// Appends a rule to the chain.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in chain order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Narrows `pool` rule by rule and returns the survivors in pool order.
    pub fn narrow(&self, pool: &[LessonId], context: &DispatchContext<'_>) -> Vec<LessonId> {
        let mut remaining = pool.to_vec();
        for rule in &self.rules {
            if remaining.len() <= 1 {
                break;
            }
            let scores: Vec<RuleScore> = remaining
                .iter()
                .map(|&id| rule.evaluate(id, context))
                .collect();
            let Some(&best) = scores.iter().max() else {
                break;
            };
            remaining = remaining
                .into_iter()
                .zip(scores)
                .filter_map(|(id, score)| (score == best).then_some(id))
                .collect();
        }
        remaining
    }

    /// Returns the lesson to dispatch next, or `None` for an empty pool.
    pub fn select_best(&self, pool: &[LessonId], context: &DispatchContext<'_>) -> Option<LessonId> {
        self.narrow(pool, context).first().copied()
    }

    /// Scores of a single lesson under each rule, in chain order.
    pub fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(lesson, context))
            .collect()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
