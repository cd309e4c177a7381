//! Candidate weekday pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::weekday::{DayOfWeek, WeekdayError};

/// Role an observation plays for a given pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Buy,
    Sell,
}

/// Ordered `(buy, sell)` pair of distinct weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekdayPair {
    buy: DayOfWeek,
    sell: DayOfWeek,
}

impl WeekdayPair {
    pub fn new(buy: DayOfWeek, sell: DayOfWeek) -> Result<Self, WeekdayError> {
        if buy == sell {
            return Err(WeekdayError::SameDay(buy));
        }
        Ok(Self { buy, sell })
    }

    pub fn buy(&self) -> DayOfWeek {
        self.buy
    }

    pub fn sell(&self) -> DayOfWeek {
        self.sell
    }

    /// Role of `day` in this pair, or `None` if the day is not traded.
    pub fn role_of(&self, day: DayOfWeek) -> Option<Role> {
        if day == self.buy {
            Some(Role::Buy)
        } else if day == self.sell {
            Some(Role::Sell)
        } else {
            None
        }
    }

    pub fn contains(&self, day: DayOfWeek) -> bool {
        self.role_of(day).is_some()
    }
}

impl fmt::Display for WeekdayPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buy {} / sell {}", self.buy, self.sell)
    }
}
