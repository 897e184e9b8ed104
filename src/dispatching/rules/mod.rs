//! Built-in dispatching rules.
//!
//! The five rules below, in this order, form the extended DSATUR chain:
//!
//! | Rule | Keeps lessons with |
//! |------|--------------------|
//! | SAT | most colored-neighbor events |
//! | DEG | highest static degree |
//! | HARD | most hard restrictions |
//! | SEQ | at least one sequential candidate (if any lesson has one) |
//! | PREF | largest preference multiset |
//!
//! # Score Convention
//! All rules return higher scores for lessons that should go first.

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::LessonId;

/// Maximum saturation.
///
/// Saturation here counts colored-neighbor events, not distinct colors
/// among neighbors as in textbook DSATUR.
#[derive(Debug, Clone, Copy)]
pub struct MaxSaturation;

impl DispatchingRule for MaxSaturation {
    fn name(&self) -> &'static str {
        "SAT"
    }

    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore {
        context.lesson(lesson).saturation() as RuleScore
    }

    fn description(&self) -> &'static str {
        "Maximum Saturation"
    }
}

/// Maximum static degree in the conflict graph.
#[derive(Debug, Clone, Copy)]
pub struct MaxDegree;

impl DispatchingRule for MaxDegree {
    fn name(&self) -> &'static str {
        "DEG"
    }

    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore {
        context.degree(lesson)
    }

    fn description(&self) -> &'static str {
        "Maximum Degree"
    }
}

/// Most hard restrictions. Soft restrictions are not counted.
#[derive(Debug, Clone, Copy)]
pub struct MaxHardRestrictions;

impl DispatchingRule for MaxHardRestrictions {
    fn name(&self) -> &'static str {
        "HARD"
    }

    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore {
        context.lesson(lesson).hard_restriction_count()
    }

    fn description(&self) -> &'static str {
        "Most Hard Restrictions"
    }
}

/// Lessons that can complete a back-to-back pair go first.
///
/// Scores 1 or 0, so the engine keeps only lessons with candidates when at
/// least one has them and keeps everyone otherwise.
#[derive(Debug, Clone, Copy)]
pub struct HasSequentialCandidate;

impl DispatchingRule for HasSequentialCandidate {
    fn name(&self) -> &'static str {
        "SEQ"
    }

    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore {
        RuleScore::from(context.lesson(lesson).has_sequential_candidate())
    }

    fn description(&self) -> &'static str {
        "Has Sequential Candidate"
    }
}

/// Largest preference multiset.
#[derive(Debug, Clone, Copy)]
pub struct MaxPreferences;

impl DispatchingRule for MaxPreferences {
    fn name(&self) -> &'static str {
        "PREF"
    }

    fn evaluate(&self, lesson: LessonId, context: &DispatchContext<'_>) -> RuleScore {
        context.lesson(lesson).preference_count()
    }

    fn description(&self) -> &'static str {
        "Most Preferences"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ConflictGraph;
    use crate::models::{SlotCatalog, SlotId, Timetable};

    fn sample() -> Timetable {
        let mut tt = Timetable::new(SlotCatalog::new(["P1", "P2", "P3"]).unwrap());
        tt.add_lesson("Math", "7A", "Ana", 2); // 0, 1
        tt.add_lesson("Geo", "8C", "Duda", 1); // 2
        tt
    }

    #[test]
    fn test_rule_scores() {
        let mut tt = sample();
        {
            let l = tt.lesson_mut(LessonId(0));
            l.increment_saturation();
            l.add_hard_restriction(SlotId(0));
            l.add_soft_restriction(SlotId(4));
            l.add_sequential_candidate(SlotId(1));
            l.add_preference(SlotId(2));
            l.add_preference(SlotId(2));
        }
        let g = ConflictGraph::build(tt.lessons());
        let ctx = DispatchContext::new(tt.lessons(), &g);

        assert_eq!(MaxSaturation.evaluate(LessonId(0), &ctx), 1);
        assert_eq!(MaxDegree.evaluate(LessonId(0), &ctx), 1);
        assert_eq!(MaxDegree.evaluate(LessonId(2), &ctx), 0);
        // soft restriction not counted
        assert_eq!(MaxHardRestrictions.evaluate(LessonId(0), &ctx), 1);
        assert_eq!(HasSequentialCandidate.evaluate(LessonId(0), &ctx), 1);
        assert_eq!(HasSequentialCandidate.evaluate(LessonId(1), &ctx), 0);
        assert_eq!(MaxPreferences.evaluate(LessonId(0), &ctx), 2);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(MaxSaturation.name(), "SAT");
        assert_eq!(MaxPreferences.description(), "Most Preferences");
    }
}
