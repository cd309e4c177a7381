//! Per-pair backtest outcome.

use serde::{Deserialize, Serialize};

use super::weekday::DayOfWeek;

/// Outcome of simulating one weekday pair over the full history.
///
/// Only pairs whose clean subsequence met the minimum sample size produce
/// a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub buy_weekday: DayOfWeek,
    pub sell_weekday: DayOfWeek,
    pub final_capital: f64,
    /// Length of the clean subsequence that was simulated.
    pub sample_size: usize,
    /// Completed buy → sell round trips.
    pub trade_count: usize,
}
