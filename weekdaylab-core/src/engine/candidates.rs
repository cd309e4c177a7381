//! Candidate pair enumeration.

use crate::domain::{TimeSeries, WeekdayPair};

/// All ordered pairs of distinct weekdays present in `series`.
///
/// Pairs come out sorted by buy day, then sell day. With `n` distinct
/// weekdays there are `n * (n - 1)` pairs; fewer than two distinct days
/// yields none.
pub fn candidate_pairs(series: &TimeSeries) -> Vec<WeekdayPair> {
    let days = series.distinct_weekdays();
    let mut pairs = Vec::with_capacity(days.len() * days.len().saturating_sub(1));
    for &buy in &days {
        for &sell in &days {
            if let Ok(pair) = WeekdayPair::new(buy, sell) {
                pairs.push(pair);
            }
        }
    }
    pairs
}
