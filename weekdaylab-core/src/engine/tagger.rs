//! Weekday tagging of raw observations.

use crate::domain::{DayOfWeek, PriceObservation, RawObservation, SeriesError, TimeSeries};

/// Annotate one observation with its weekday.
pub fn tag(raw: RawObservation) -> PriceObservation {
    PriceObservation {
        date: raw.date,
        price: raw.price,
        weekday: DayOfWeek::from_date(raw.date),
    }
}

/// Tag every observation and build a validated [`TimeSeries`].
///
/// Fails if the raw records are not strictly ascending by date or carry a
/// non-positive price; the tagging itself cannot fail.
pub fn tag_series(raw: Vec<RawObservation>) -> Result<TimeSeries, SeriesError> {
    TimeSeries::new(raw.into_iter().map(tag).collect())
}
