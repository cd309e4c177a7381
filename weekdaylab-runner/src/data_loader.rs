//! Price table ingestion.
//!
//! Reads a delimited text table with a header row, picks the configured date
//! and price columns by name, and hands a validated, weekday-tagged
//! [`TimeSeries`] to the engine. Rows may arrive in any order; they are sorted
//! by date before tagging. Any malformed row aborts the load; the engine is
//! never called on partial data.

use chrono::NaiveDate;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use weekdaylab_core::domain::{RawObservation, SeriesError, TimeSeries};
use weekdaylab_core::engine::tag_series;

use crate::config::InputOptions;

/// Errors from the ingestion layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no data rows")]
    Empty,

    #[error("invalid delimiter {0:?} (must be a single ASCII character other than '\"')")]
    InvalidDelimiter(char),

    #[error("missing required column '{column}' (found: {found})")]
    MissingColumn { column: String, found: String },

    #[error("line {line}: cannot parse date '{value}' with format '{format}'")]
    InvalidDate {
        line: u64,
        value: String,
        format: String,
    },

    #[error("line {line}: invalid price '{value}' (must be a positive number)")]
    InvalidPrice { line: u64, value: String },

    #[error("date {0} appears more than once")]
    DuplicateDate(NaiveDate),

    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

/// A loaded price history plus provenance.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: TimeSeries,
    /// BLAKE3 hash over all dates and prices, in date order.
    pub dataset_hash: String,
}

/// Open `opts.path` and parse it.
pub fn load_series(opts: &InputOptions) -> Result<LoadedSeries, LoadError> {
    let file = std::fs::File::open(&opts.path).map_err(|source| LoadError::Open {
        path: opts.path.clone(),
        source,
    })?;
    info!(path = %opts.path.display(), "loading price table");
    parse_series(file, opts)
}

/// Parse a price table from any reader.
pub fn parse_series<R: Read>(reader: R, opts: &InputOptions) -> Result<LoadedSeries, LoadError> {
    let delimiter = u8::try_from(opts.delimiter)
        .ok()
        .filter(|b| b.is_ascii() && *b != b'"')
        .ok_or(LoadError::InvalidDelimiter(opts.delimiter))?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    let date_idx = column_index(&headers, &opts.date_column)?;
    let price_idx = column_index(&headers, &opts.price_column)?;

    let mut raw = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let date_str = record.get(date_idx).unwrap_or("");
        let price_str = record.get(price_idx).unwrap_or("");

        let date = NaiveDate::parse_from_str(date_str, &opts.date_format).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: date_str.to_string(),
                format: opts.date_format.clone(),
            }
        })?;
        let price = match price_str.parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => p,
            _ => {
                return Err(LoadError::InvalidPrice {
                    line,
                    value: price_str.to_string(),
                })
            }
        };
        raw.push(RawObservation::new(date, price));
    }

    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    if raw.windows(2).any(|w| w[1].date < w[0].date) {
        debug!(rows = raw.len(), "input not in ascending date order, sorting");
        raw.sort_by_key(|o| o.date);
    }
    if let Some(w) = raw.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(LoadError::DuplicateDate(w[0].date));
    }

    let series = tag_series(raw)?;
    let dataset_hash = compute_dataset_hash(&series);

    info!(
        observations = series.len(),
        first = ?series.first_date(),
        last = ?series.last_date(),
        "price table loaded"
    );

    Ok(LoadedSeries {
        series,
        dataset_hash,
    })
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
            found: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

/// Compute a deterministic BLAKE3 hash over the series.
fn compute_dataset_hash(series: &TimeSeries) -> String {
    let mut hasher = blake3::Hasher::new();
    for obs in series {
        hasher.update(obs.date.to_string().as_bytes());
        hasher.update(&obs.price.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
