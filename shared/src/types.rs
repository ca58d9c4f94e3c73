//! Common types used across the tracker

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date range for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether the given date falls inside the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Range covering a single calendar day
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_includes_both_bounds() {
        let range = DateRange {
            start: date(2024, 3, 1),
            end: date(2024, 3, 31),
        };
        assert!(range.contains(date(2024, 3, 1)));
        assert!(range.contains(date(2024, 3, 15)));
        assert!(range.contains(date(2024, 3, 31)));
        assert!(!range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 4, 1)));
    }

    #[test]
    fn single_day_contains_only_that_day() {
        let range = DateRange::single_day(date(2024, 3, 15));
        assert!(range.contains(date(2024, 3, 15)));
        assert!(!range.contains(date(2024, 3, 14)));
        assert!(!range.contains(date(2024, 3, 16)));
    }
}
