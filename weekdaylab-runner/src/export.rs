//! Reporting and export — CSV, Markdown, and JSON artifacts.
//!
//! Provides three export formats for a ranking report:
//! - **CSV**: one row per pair with a `buy_weekday,sell_weekday,profit_percent`
//!   header; opens directly in spreadsheet tools
//! - **Markdown**: human-readable table with run metadata
//! - **JSON**: full round-trip serialization with schema versioning
//!
//! Persisted JSON includes a `schema_version` field. Newer versions are
//! rejected on load.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::ReportFormat;
use crate::ranking::{RankingReport, SCHEMA_VERSION};

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the ranked table as CSV.
///
/// An empty report still produces the header row.
pub fn export_csv(report: &RankingReport) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["buy_weekday", "sell_weekday", "profit_percent"])?;

    for row in report.rows() {
        let profit = format!("{:.6}", row.profit_percent);
        wtr.write_record([row.buy_weekday.name(), row.sell_weekday.name(), profit.as_str()])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `RankingReport` to pretty JSON.
pub fn export_json(report: &RankingReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize RankingReport to JSON")
}

/// Deserialize a `RankingReport` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<RankingReport> {
    let report: RankingReport =
        serde_json::from_str(json).context("failed to deserialize RankingReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown report of the ranking.
pub fn export_markdown(report: &RankingReport) -> String {
    let meta = &report.metadata;
    let mut md = String::with_capacity(1024 + report.len() * 64);

    md.push_str("# Weekday Pair Report\n\n");

    md.push_str("## Metadata\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    match (meta.first_date, meta.last_date) {
        (Some(first), Some(last)) => md.push_str(&format!("| Period | {first} to {last} |\n")),
        _ => md.push_str("| Period | (empty) |\n"),
    }
    md.push_str(&format!("| Observations | {} |\n", meta.observation_count));
    md.push_str(&format!("| Initial Capital | {:.0} |\n", meta.initial_capital));
    md.push_str(&format!(
        "| Pairs | {} ranked of {} candidates (min sample {}) |\n",
        report.len(),
        meta.candidate_count,
        meta.min_sample_size
    ));
    md.push_str(&format!("| Dataset Hash | {} |\n", meta.dataset_hash));
    md.push('\n');

    md.push_str("## Ranking\n\n");
    if report.is_empty() {
        md.push_str("No weekday pair had enough data to rank.\n");
        return md;
    }
    md.push_str("| # | Buy | Sell | Profit | Trades | Sample |\n");
    md.push_str("| --- | --- | --- | --- | --- | --- |\n");
    for (i, row) in report.rows().iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {:+.2}% | {} | {} |\n",
            i + 1,
            row.buy_weekday,
            row.sell_weekday,
            row.profit_percent,
            row.trade_count,
            row.sample_size
        ));
    }
    md
}

// ─── Artifact ───────────────────────────────────────────────────────

/// Render `report` in `format` and write it to `path`, creating parent
/// directories as needed.
pub fn write_report(report: &RankingReport, path: &Path, format: ReportFormat) -> Result<()> {
    let body = match format {
        ReportFormat::Csv => export_csv(report)?,
        ReportFormat::Markdown => export_markdown(report),
        ReportFormat::Json => export_json(report)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
    }
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}
