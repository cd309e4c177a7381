//! WeekdayLab Runner — ingestion, pair sweep, ranking and export.
//!
//! This crate builds on `weekdaylab-core` to provide:
//! - TOML run configuration
//! - CSV price table ingestion with validation and dataset hashing
//! - Parallel evaluation of all candidate weekday pairs
//! - Profit-sorted ranking report
//! - CSV, Markdown, and JSON export

pub mod config;
pub mod data_loader;
pub mod export;
pub mod ranking;
pub mod runner;

pub use config::{ConfigError, InputOptions, OutputOptions, ReportFormat, RunConfig, RunOptions};
pub use data_loader::{load_series, parse_series, LoadError, LoadedSeries};
pub use export::{export_csv, export_json, export_markdown, import_json, write_report};
pub use ranking::{RankedRow, RankingReport, ReportMetadata, SCHEMA_VERSION};
pub use runner::{evaluate_candidates, rank_series, run_from_config, run_sweep, RunError};
