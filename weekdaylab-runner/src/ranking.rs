//! Ranking report — every qualifying pair, sorted by profit.
//!
//! Rows are kept in a plain list: pairs with identical profit are all
//! reported. Sorting is by profit descending; tied rows fall back to
//! (buy, sell) order so the report is identical across runs and across
//! sequential/parallel evaluation. Non-finite profits sort last.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use weekdaylab_core::domain::{BacktestResult, DayOfWeek};
use weekdaylab_core::engine::{profit_percent, INITIAL_CAPITAL, MIN_SAMPLE_SIZE};

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

/// One ranked weekday pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub buy_weekday: DayOfWeek,
    pub sell_weekday: DayOfWeek,
    pub profit_percent: f64,
    pub final_capital: f64,
    pub sample_size: usize,
    pub trade_count: usize,
}

impl RankedRow {
    pub fn from_result(result: &BacktestResult) -> Self {
        Self {
            buy_weekday: result.buy_weekday,
            sell_weekday: result.sell_weekday,
            profit_percent: profit_percent(result.final_capital),
            final_capital: result.final_capital,
            sample_size: result.sample_size,
            trade_count: result.trade_count,
        }
    }
}

/// Provenance of a ranking run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub initial_capital: f64,
    pub min_sample_size: usize,
    pub observation_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub dataset_hash: String,
    /// Candidate pairs evaluated, including those below the sample gate.
    pub candidate_count: usize,
}

impl ReportMetadata {
    pub fn new(dataset_hash: impl Into<String>) -> Self {
        Self {
            initial_capital: INITIAL_CAPITAL,
            min_sample_size: MIN_SAMPLE_SIZE,
            dataset_hash: dataset_hash.into(),
            ..Self::default()
        }
    }
}

/// Ranked table of weekday pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub metadata: ReportMetadata,
    pub rows: Vec<RankedRow>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl RankingReport {
    /// Rank `results` by profit percent, best first.
    pub fn rank(results: &[BacktestResult], metadata: ReportMetadata) -> Self {
        let mut rows: Vec<RankedRow> = results.iter().map(RankedRow::from_result).collect();
        rows.sort_by(compare_rows);
        Self {
            schema_version: SCHEMA_VERSION,
            metadata,
            rows,
        }
    }

    pub fn rows(&self) -> &[RankedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn best(&self) -> Option<&RankedRow> {
        self.rows.first()
    }

    /// First `n` rows.
    pub fn top(&self, n: usize) -> &[RankedRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

fn compare_rows(a: &RankedRow, b: &RankedRow) -> Ordering {
    let by_profit = match (a.profit_percent.is_finite(), b.profit_percent.is_finite()) {
        (true, true) => b.profit_percent.total_cmp(&a.profit_percent),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    };
    by_profit
        .then(a.buy_weekday.cmp(&b.buy_weekday))
        .then(a.sell_weekday.cmp(&b.sell_weekday))
}
