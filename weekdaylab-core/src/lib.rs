//! WeekdayLab Core — the weekday-pair backtest engine.
//!
//! This crate contains the pure, I/O-free part of the system:
//! - Domain types (observations, validated time series, weekday pairs, results)
//! - Weekday tagging of raw `(date, price)` records
//! - Candidate pair enumeration
//! - Role-alternation filter producing clean buy/sell subsequences
//! - Compounding trade simulator and per-pair evaluation

pub mod domain;
pub mod engine;

pub use domain::{
    BacktestResult, DayOfWeek, PriceObservation, RawObservation, SeriesError, TimeSeries,
    WeekdayError, WeekdayPair,
};
pub use engine::{
    candidate_pairs, clean_subsequence, evaluate_all, evaluate_pair, profit_percent, simulate,
    tag_series, CleanSubsequence, RoundTrip, INITIAL_CAPITAL, MIN_SAMPLE_SIZE,
};
