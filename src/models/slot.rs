//! Time slot model.
//!
//! A slot is a (weekday, period) pair. The catalog holds every slot for
//! Monday to Friday crossed with the configured period labels, in
//! day-major, period-minor order. That order is the canonical scan order
//! of the colorer and the reporter.
//!
//! # Day boundaries
//! The first period of a day has no preceding neighbor and the last period
//! has no following neighbor: adjacency never wraps into another day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::LessonId;
use crate::error::{Result, TimetableError};

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days in canonical order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position within the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter label.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = TimetableError;

    /// Accepts English full and short names as well as the Portuguese
    /// weekday names found in school spreadsheets. Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let day = match s.trim().to_lowercase().as_str() {
            "mon" | "monday" | "segunda" | "segunda-feira" => Weekday::Monday,
            "tue" | "tuesday" | "terça" | "terca" | "terça-feira" | "terca-feira" => {
                Weekday::Tuesday
            }
            "wed" | "wednesday" | "quarta" | "quarta-feira" => Weekday::Wednesday,
            "thu" | "thursday" | "quinta" | "quinta-feira" => Weekday::Thursday,
            "fri" | "friday" | "sexta" | "sexta-feira" => Weekday::Friday,
            _ => return Err(TimetableError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

/// Index of a slot in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl SlotId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A (day, period) slot and the lessons assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlot {
    id: SlotId,
    day: Weekday,
    period: String,
    /// Assigned lessons in assignment order.
    assigned: Vec<LessonId>,
}

impl TimeSlot {
    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn assigned(&self) -> &[LessonId] {
        &self.assigned
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// "Mon 07:30" style label.
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.period)
    }

    pub(crate) fn push(&mut self, lesson: LessonId) {
        self.assigned.push(lesson);
    }
}

/// The full slot catalog: every weekday crossed with every period label.
#[derive(Debug, Clone, Serialize)]
pub struct SlotCatalog {
    periods: Vec<String>,
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Builds the catalog from ordered period labels.
    ///
    /// # Errors
    /// `EmptyPeriodCatalog` if no labels are given, `DuplicatePeriod` if a
    /// label repeats.
    pub fn new<I, S>(periods: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = Vec::new();
        for period in periods {
            let period = period.into();
            if labels.contains(&period) {
                return Err(TimetableError::DuplicatePeriod(period));
            }
            labels.push(period);
        }
        if labels.is_empty() {
            return Err(TimetableError::EmptyPeriodCatalog);
        }

        let mut slots = Vec::with_capacity(Weekday::ALL.len() * labels.len());
        for day in Weekday::ALL {
            for period in &labels {
                slots.push(TimeSlot {
                    id: SlotId(slots.len()),
                    day,
                    period: period.clone(),
                    assigned: Vec::new(),
                });
            }
        }

        Ok(Self {
            periods: labels,
            slots,
        })
    }

    /// Period labels in input order.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn periods_per_day(&self) -> usize {
        self.periods.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in canonical order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slot ids in canonical order.
    pub fn ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.slots.len()).map(SlotId)
    }

    /// # Panics
    /// If `id` does not belong to this catalog.
    pub fn slot(&self, id: SlotId) -> &TimeSlot {
        &self.slots[id.0]
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> &mut TimeSlot {
        &mut self.slots[id.0]
    }

    /// Empties every slot's assigned list.
    pub(crate) fn clear_assignments(&mut self) {
        for slot in &mut self.slots {
            slot.assigned.clear();
        }
    }

    /// Looks up the slot for a day and period label.
    pub fn find(&self, day: Weekday, period: &str) -> Option<SlotId> {
        let offset = self.periods.iter().position(|p| p == period)?;
        Some(SlotId(day.index() * self.periods.len() + offset))
    }

    /// Like [`find`](Self::find), with the day given as text.
    pub fn resolve(&self, day: &str, period: &str) -> Option<SlotId> {
        let day = day.parse::<Weekday>().ok()?;
        self.find(day, period)
    }

    /// The slot directly before `id` on the same day.
    pub fn preceding_in_day(&self, id: SlotId) -> Option<SlotId> {
        if id.0 % self.periods.len() == 0 {
            None
        } else {
            Some(SlotId(id.0 - 1))
        }
    }

    /// The slot directly after `id` on the same day.
    pub fn following_in_day(&self, id: SlotId) -> Option<SlotId> {
        let next = id.0 + 1;
        if next >= self.slots.len() || next % self.periods.len() == 0 {
            None
        } else {
            Some(SlotId(next))
        }
    }

    /// Same-day neighbors of `id`: following first, then preceding.
    pub fn day_neighbors(&self, id: SlotId) -> impl Iterator<Item = SlotId> {
        self.following_in_day(id)
            .into_iter()
            .chain(self.preceding_in_day(id))
    }

    /// Whether two slots sit next to each other on the same day.
    pub fn are_consecutive(&self, first: SlotId, second: SlotId) -> bool {
        self.following_in_day(first) == Some(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SlotCatalog {
        SlotCatalog::new(["P1", "P2", "P3"]).unwrap()
    }

    #[test]
    fn test_canonical_order() {
        let c = catalog();
        assert_eq!(c.len(), 15);
        assert_eq!(c.periods_per_day(), 3);
        assert_eq!(c.slot(SlotId(0)).label(), "Mon P1");
        assert_eq!(c.slot(SlotId(2)).label(), "Mon P3");
        assert_eq!(c.slot(SlotId(3)).label(), "Tue P1");
        assert_eq!(c.slot(SlotId(14)).label(), "Fri P3");
    }

    #[test]
    fn test_find_and_resolve() {
        let c = catalog();
        assert_eq!(c.find(Weekday::Wednesday, "P2"), Some(SlotId(7)));
        assert_eq!(c.resolve("Quarta", "P2"), Some(SlotId(7)));
        assert_eq!(c.resolve("wed", "P9"), None);
        assert_eq!(c.resolve("Saturday", "P1"), None);
    }

    #[test]
    fn test_day_boundaries() {
        let c = catalog();
        // Mon P1: nothing before it
        assert_eq!(c.preceding_in_day(SlotId(0)), None);
        assert_eq!(c.following_in_day(SlotId(0)), Some(SlotId(1)));
        // Mon P3 → Tue P1 is not a same-day neighbor
        assert_eq!(c.following_in_day(SlotId(2)), None);
        assert_eq!(c.preceding_in_day(SlotId(3)), None);
        // Fri P3: end of catalog
        assert_eq!(c.following_in_day(SlotId(14)), None);
        assert_eq!(c.preceding_in_day(SlotId(14)), Some(SlotId(13)));
    }

    #[test]
    fn test_day_neighbors_order() {
        let c = catalog();
        let around: Vec<_> = c.day_neighbors(SlotId(4)).collect();
        assert_eq!(around, vec![SlotId(5), SlotId(3)]);
        let edge: Vec<_> = c.day_neighbors(SlotId(5)).collect();
        assert_eq!(edge, vec![SlotId(4)]);
    }

    #[test]
    fn test_single_period_has_no_neighbors() {
        let c = SlotCatalog::new(["only"]).unwrap();
        assert_eq!(c.day_neighbors(SlotId(2)).count(), 0);
        assert!(!c.are_consecutive(SlotId(0), SlotId(1)));
    }

    #[test]
    fn test_catalog_errors() {
        assert_eq!(
            SlotCatalog::new(Vec::<String>::new()).unwrap_err(),
            TimetableError::EmptyPeriodCatalog
        );
        assert_eq!(
            SlotCatalog::new(["P1", "P1"]).unwrap_err(),
            TimetableError::DuplicatePeriod("P1".into())
        );
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("TERÇA".parse::<Weekday>().unwrap(), Weekday::Tuesday);
        assert_eq!(" fri ".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!(matches!(
            "Sunday".parse::<Weekday>(),
            Err(TimetableError::UnknownWeekday(_))
        ));
    }
}
