//! Price observations, one per trading day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weekday::DayOfWeek;

/// Untagged `(date, price)` record as produced by ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: NaiveDate,
    pub price: f64,
}

impl RawObservation {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Daily price tagged with its day of week.
///
/// The weekday is derived from `date` once, by the tagger, and never
/// recomputed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub date: NaiveDate,
    pub price: f64,
    pub weekday: DayOfWeek,
}
