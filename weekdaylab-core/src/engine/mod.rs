//! Weekday-pair backtest engine.
//!
//! Pipeline for one price history:
//!
//! 1. Tag every observation with its weekday (`tagger`)
//! 2. Enumerate ordered pairs of the weekdays present (`candidates`)
//! 3. Per pair, reduce the series to an alternating buy/sell run (`alternation`)
//! 4. Compound capital across that run (`simulator`)
//!
//! Ranking the per-pair results is left to the caller.

pub mod alternation;
pub mod candidates;
pub mod simulator;
pub mod tagger;

pub use alternation::{clean_subsequence, CleanSubsequence, RoundTrip};
pub use candidates::candidate_pairs;
pub use simulator::{compound, profit_percent, simulate};
pub use tagger::{tag, tag_series};

use crate::domain::{BacktestResult, TimeSeries, WeekdayPair};

/// Capital every simulation starts from, in currency units.
pub const INITIAL_CAPITAL: f64 = 1_000_000.0;

/// Pairs whose clean subsequence is shorter than this are not reported.
pub const MIN_SAMPLE_SIZE: usize = 100;

/// Filter and simulate a single pair.
///
/// Returns `None` when the clean subsequence holds fewer than
/// [`MIN_SAMPLE_SIZE`] observations.
pub fn evaluate_pair(series: &TimeSeries, pair: WeekdayPair) -> Option<BacktestResult> {
    let clean = clean_subsequence(series.observations(), pair);
    if clean.len() < MIN_SAMPLE_SIZE {
        return None;
    }
    Some(BacktestResult {
        buy_weekday: pair.buy(),
        sell_weekday: pair.sell(),
        final_capital: simulate(&clean),
        sample_size: clean.len(),
        trade_count: clean.round_trips().count(),
    })
}

/// Evaluate every candidate pair of `series` in order, single-threaded.
pub fn evaluate_all(series: &TimeSeries) -> Vec<BacktestResult> {
    candidate_pairs(series)
        .into_iter()
        .filter_map(|pair| evaluate_pair(series, pair))
        .collect()
}
