//! Input validation for timetabling problems.
//!
//! Checks structural integrity of a [`TimetableInput`] before a run.
//! Detects:
//! - An empty period catalog and duplicate period labels
//! - Lesson requirements with zero weekly sessions or blank names
//! - Restriction and preference records naming unknown holders, days or periods
//! - Holders with more weekly sessions than the week has slots
//!
//! Building a timetable tolerates unknown references by skipping them;
//! validation reports them so a caller can decide.

use std::collections::{HashMap, HashSet};

use crate::input::{SlotRecord, TimetableInput};
use crate::models::Weekday;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No period labels.
    EmptyCatalog,
    /// A period label appears more than once.
    DuplicatePeriod,
    /// A lesson requirement with `weekly_count == 0`.
    ZeroWeeklyCount,
    /// A blank subject, class group or teacher name.
    EmptyName,
    /// A record names a holder, day or period that does not exist.
    UnknownReference,
    /// A holder has more weekly sessions than there are slots.
    OverloadedHolder,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetabling input.
///
/// Checks:
/// 1. At least one period label, no duplicates
/// 2. Every lesson requirement has non-blank names and `weekly_count > 0`
/// 3. Every unavailability and preference record resolves
/// 4. No teacher or class group needs more sessions than the week offers
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(input: &TimetableInput) -> ValidationResult {
    let mut errors = Vec::new();

    if input.periods.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "No period labels configured",
        ));
    }
    let mut periods = HashSet::new();
    for period in &input.periods {
        if !periods.insert(period.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePeriod,
                format!("Duplicate period label: {period}"),
            ));
        }
    }

    let mut teachers: HashMap<&str, usize> = HashMap::new();
    let mut class_groups: HashMap<&str, usize> = HashMap::new();

    for req in &input.lessons {
        let label = format!("{} / {} / {}", req.subject, req.class_group, req.teacher);
        for (field, value) in [
            ("subject", &req.subject),
            ("class group", &req.class_group),
            ("teacher", &req.teacher),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyName,
                    format!("Lesson '{label}' has an empty {field}"),
                ));
            }
        }
        if req.weekly_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeeklyCount,
                format!("Lesson '{label}' has no weekly sessions"),
            ));
        }

        *teachers.entry(req.teacher.as_str()).or_default() += req.weekly_count;
        *class_groups.entry(req.class_group.as_str()).or_default() += req.weekly_count;
    }

    let record_sets = [
        ("teacher unavailability", &input.teacher_unavailability, &teachers),
        ("class unavailability", &input.class_unavailability, &class_groups),
        ("teacher preference", &input.teacher_preferences, &teachers),
    ];
    for (what, records, holders) in record_sets {
        for record in records {
            if let Some(reason) = unresolved(record, &periods, holders) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!(
                        "{what} ({}, {}, {}): {reason}",
                        record.holder, record.period, record.day
                    ),
                ));
            }
        }
    }

    let capacity = Weekday::ALL.len() * periods.len();
    if capacity > 0 {
        let overloaded = [("Teacher", &teachers), ("Class group", &class_groups)];
        for (what, holders) in overloaded {
            let mut names: Vec<_> = holders
                .iter()
                .filter(|(_, sessions)| **sessions > capacity)
                .collect();
            names.sort();
            for (name, sessions) in names {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverloadedHolder,
                    format!("{what} '{name}' needs {sessions} sessions but the week has {capacity} slots"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn unresolved(
    record: &SlotRecord,
    periods: &HashSet<&str>,
    holders: &HashMap<&str, usize>,
) -> Option<&'static str> {
    if !holders.contains_key(record.holder.as_str()) {
        Some("unknown holder")
    } else if !periods.contains(record.period.as_str()) {
        Some("unknown period")
    } else if record.day.parse::<Weekday>().is_err() {
        Some("unknown day")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> TimetableInput {
        TimetableInput::new(["P1", "P2"])
            .with_lesson("Math", "7A", "Ana", 3)
            .with_lesson("Art", "7B", "Ana", 2)
            .with_teacher_unavailability("Ana", "P1", "Mon")
            .with_class_unavailability("7B", "P2", "Quinta")
            .with_teacher_preference("Ana", "P2", "Tue")
    }

    fn has_kind(result: ValidationResult, kind: ValidationErrorKind) -> bool {
        result.unwrap_err().iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_input()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let input = TimetableInput::new(Vec::<String>::new());
        assert!(has_kind(validate_input(&input), ValidationErrorKind::EmptyCatalog));
    }

    #[test]
    fn test_duplicate_period() {
        let input = TimetableInput::new(["P1", "P2", "P1"]);
        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePeriod);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_zero_weekly_count() {
        let input = sample_input().with_lesson("Music", "7A", "Bia", 0);
        assert!(has_kind(validate_input(&input), ValidationErrorKind::ZeroWeeklyCount));
    }

    #[test]
    fn test_empty_name() {
        let input = sample_input().with_lesson("Music", " ", "Bia", 1);
        let errors = validate_input(&input).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyName && e.message.contains("class group")));
    }

    #[test]
    fn test_unknown_references() {
        let input = sample_input()
            .with_teacher_unavailability("Nobody", "P1", "Mon")
            .with_class_unavailability("7A", "P9", "Mon")
            .with_teacher_preference("Ana", "P1", "Sunday")
            .with_teacher_preference("7A", "P1", "Mon");

        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::UnknownReference));
        assert!(errors.iter().any(|e| e.message.contains("unknown day")));
        assert!(errors.iter().any(|e| e.message.contains("unknown period")));
    }

    #[test]
    fn test_overloaded_holder() {
        // 1 period x 5 days = 5 slots, Ana teaches 6
        let input = TimetableInput::new(["P1"])
            .with_lesson("Math", "7A", "Ana", 3)
            .with_lesson("Art", "7B", "Ana", 3);

        let errors = validate_input(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::OverloadedHolder);
        assert!(errors[0].message.contains("Ana"));
    }

    #[test]
    fn test_multiple_errors() {
        let input = TimetableInput::new(["P1", "P1"])
            .with_lesson("Math", "7A", "Ana", 0)
            .with_teacher_preference("Bia", "P1", "Mon");

        let errors = validate_input(&input).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
