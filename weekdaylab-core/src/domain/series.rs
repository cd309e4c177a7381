//! TimeSeries — validated, chronologically ordered price observations.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use super::observation::PriceObservation;
use super::weekday::DayOfWeek;

/// Violations of the series invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("duplicate date {0}")]
    DuplicateDate(NaiveDate),

    #[error("dates out of order: {date} follows {previous}")]
    OutOfOrder { previous: NaiveDate, date: NaiveDate },

    #[error("invalid price {price} on {date} (must be finite and positive)")]
    InvalidPrice { date: NaiveDate, price: f64 },

    #[error("weekday {weekday} does not match date {date}")]
    WeekdayMismatch { date: NaiveDate, weekday: DayOfWeek },
}

/// Price observations sorted strictly ascending by date.
///
/// Downstream stages only ever filter a series; nothing reorders it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    observations: Vec<PriceObservation>,
}

impl TimeSeries {
    /// Build a series, checking ordering, prices and weekday tags.
    pub fn new(observations: Vec<PriceObservation>) -> Result<Self, SeriesError> {
        for obs in &observations {
            if !obs.price.is_finite() || obs.price <= 0.0 {
                return Err(SeriesError::InvalidPrice {
                    date: obs.date,
                    price: obs.price,
                });
            }
            if obs.weekday != DayOfWeek::from_date(obs.date) {
                return Err(SeriesError::WeekdayMismatch {
                    date: obs.date,
                    weekday: obs.weekday,
                });
            }
        }
        for w in observations.windows(2) {
            let (previous, date) = (w[0].date, w[1].date);
            if date == previous {
                return Err(SeriesError::DuplicateDate(date));
            }
            if date < previous {
                return Err(SeriesError::OutOfOrder { previous, date });
            }
        }
        Ok(Self { observations })
    }

    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceObservation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// Distinct weekdays present, in calendar order.
    pub fn distinct_weekdays(&self) -> Vec<DayOfWeek> {
        let mut seen = [false; 7];
        for obs in &self.observations {
            seen[obs.weekday.index() as usize] = true;
        }
        DayOfWeek::ALL
            .into_iter()
            .filter(|d| seen[d.index() as usize])
            .collect()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a PriceObservation;
    type IntoIter = std::slice::Iter<'a, PriceObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
