//! Sweep runner — wires ingestion, per-pair evaluation and ranking.
//!
//! Two entry points:
//! - `run_from_config()`: loads the configured price table, then ranks. Used by the CLI.
//! - `rank_series()`: takes a pre-loaded series, no I/O.
//!
//! Every candidate reads the same immutable series and yields its own result,
//! so candidates are evaluated on the rayon pool when `parallel` is set.
//! Ranking happens only after all results are collected, so parallel and
//! sequential runs produce the same report.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};
use weekdaylab_core::domain::{BacktestResult, TimeSeries, WeekdayPair};
use weekdaylab_core::engine::{candidate_pairs, evaluate_pair, MIN_SAMPLE_SIZE};

use crate::config::{ConfigError, RunConfig};
use crate::data_loader::{load_series, LoadError, LoadedSeries};
use crate::ranking::{RankingReport, ReportMetadata};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
}

/// Evaluate every candidate pair of `series`.
pub fn run_sweep(series: &TimeSeries, parallel: bool) -> Vec<BacktestResult> {
    evaluate_candidates(series, &candidate_pairs(series), parallel)
}

/// Evaluate the given pairs against `series`.
///
/// Pairs below the minimum sample size are dropped. Results come back in
/// `pairs` order regardless of `parallel`.
pub fn evaluate_candidates(
    series: &TimeSeries,
    pairs: &[WeekdayPair],
    parallel: bool,
) -> Vec<BacktestResult> {
    info!(
        candidates = pairs.len(),
        weekdays = series.distinct_weekdays().len(),
        parallel,
        "evaluating weekday pairs"
    );

    let evaluate = |pair: &WeekdayPair| {
        let result = evaluate_pair(series, *pair);
        if result.is_none() {
            debug!(%pair, min = MIN_SAMPLE_SIZE, "pair skipped: clean subsequence too short");
        }
        result
    };

    let results: Vec<BacktestResult> = if parallel {
        pairs.par_iter().filter_map(evaluate).collect()
    } else {
        pairs.iter().filter_map(evaluate).collect()
    };

    info!(
        qualifying = results.len(),
        skipped = pairs.len() - results.len(),
        "sweep complete"
    );
    results
}

/// Sweep and rank a pre-loaded series.
pub fn rank_series(loaded: &LoadedSeries, parallel: bool) -> RankingReport {
    let series = &loaded.series;
    let pairs = candidate_pairs(series);
    let results = evaluate_candidates(series, &pairs, parallel);

    let mut metadata = ReportMetadata::new(loaded.dataset_hash.clone());
    metadata.observation_count = series.len();
    metadata.first_date = series.first_date();
    metadata.last_date = series.last_date();
    metadata.candidate_count = pairs.len();

    RankingReport::rank(&results, metadata)
}

/// Load the configured price table and rank all weekday pairs.
///
/// Ingestion failures abort before any evaluation.
pub fn run_from_config(config: &RunConfig) -> Result<RankingReport, RunError> {
    config.validate()?;
    let loaded = load_series(&config.input)?;
    Ok(rank_series(&loaded, config.run.parallel))
}
