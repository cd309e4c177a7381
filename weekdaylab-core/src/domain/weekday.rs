//! Day-of-week index, Monday = 0 through Sunday = 6.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Errors from constructing or parsing a weekday.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekdayError {
    #[error("weekday index {0} out of range (expected 0-6)")]
    OutOfRange(u8),

    #[error("unknown weekday '{0}' (expected a name like 'monday', 'mon', or an index 0-6)")]
    Unknown(String),

    #[error("buy and sell weekday are both {0}")]
    SameDay(DayOfWeek),
}

/// Day of week as an integer index (Monday = 0 … Sunday = 6).
///
/// Ordering follows the calendar week, so sorting by `DayOfWeek` gives
/// Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const MONDAY: Self = Self(0);
    pub const TUESDAY: Self = Self(1);
    pub const WEDNESDAY: Self = Self(2);
    pub const THURSDAY: Self = Self(3);
    pub const FRIDAY: Self = Self(4);
    pub const SATURDAY: Self = Self(5);
    pub const SUNDAY: Self = Self(6);

    /// All seven days in calendar order.
    pub const ALL: [Self; 7] = [
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
        Self::SUNDAY,
    ];

    pub fn new(index: u8) -> Result<Self, WeekdayError> {
        if index < 7 {
            Ok(Self(index))
        } else {
            Err(WeekdayError::OutOfRange(index))
        }
    }

    /// Weekday of a proleptic Gregorian calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        // num_days_from_monday() is always in 0..7
        Self(date.weekday().num_days_from_monday() as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Lowercase English name, e.g. `"monday"`.
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = WeekdayError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.0
    }
}

/// Accepts full names (`tuesday`), three-letter abbreviations (`tue`)
/// and indices (`1`), case-insensitively.
impl FromStr for DayOfWeek {
    type Err = WeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if let Ok(index) = needle.parse::<u8>() {
            return Self::new(index);
        }
        NAMES
            .iter()
            .position(|name| *name == needle || (needle.len() == 3 && name.starts_with(&needle)))
            .map(|i| Self(i as u8))
            .ok_or_else(|| WeekdayError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_date_uses_monday_zero() {
        // 2024-01-01 was a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DayOfWeek::from_date(monday), DayOfWeek::MONDAY);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DayOfWeek::from_date(sunday), DayOfWeek::SUNDAY);
        assert_eq!(DayOfWeek::from_date(sunday).index(), 6);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(DayOfWeek::new(7), Err(WeekdayError::OutOfRange(7)));
        assert!(DayOfWeek::new(6).is_ok());
    }

    #[test]
    fn parses_names_abbreviations_and_indices() {
        assert_eq!("Friday".parse::<DayOfWeek>(), Ok(DayOfWeek::FRIDAY));
        assert_eq!("wed".parse::<DayOfWeek>(), Ok(DayOfWeek::WEDNESDAY));
        assert_eq!(" 6 ".parse::<DayOfWeek>(), Ok(DayOfWeek::SUNDAY));
        assert!("funday".parse::<DayOfWeek>().is_err());
        assert!("mo".parse::<DayOfWeek>().is_err());
        assert_eq!("9".parse::<DayOfWeek>(), Err(WeekdayError::OutOfRange(9)));
    }

    #[test]
    fn display_is_lowercase_name() {
        assert_eq!(DayOfWeek::THURSDAY.to_string(), "thursday");
    }

    #[test]
    fn ordering_follows_calendar() {
        let mut days = vec![DayOfWeek::SUNDAY, DayOfWeek::MONDAY, DayOfWeek::WEDNESDAY];
        days.sort();
        assert_eq!(
            days,
            vec![DayOfWeek::MONDAY, DayOfWeek::WEDNESDAY, DayOfWeek::SUNDAY]
        );
    }
}
