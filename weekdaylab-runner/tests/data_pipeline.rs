//! Integration tests for the full pipeline: CSV on disk → ranked report → artifact.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::path::Path;
use weekdaylab_core::engine::MIN_SAMPLE_SIZE;
use weekdaylab_runner::{
    import_json, run_from_config, write_report, InputOptions, OutputOptions, ReportFormat,
    RunConfig, RunOptions,
};

/// Write a Mon–Fri price table in `dd.mm.yyyy` form, newest row first, with
/// a Friday premium so buy-Monday/sell-Friday is the clear winner.
fn write_fixture(path: &Path, weeks: i64) {
    let start = NaiveDate::from_ymd_opt(2016, 1, 4).unwrap(); // Monday
    let mut rows = Vec::new();
    let mut day = start;
    let end = start + Duration::weeks(weeks);
    let mut i = 0u64;
    while day < end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let base = 50.0 + ((i * 31) % 17) as f64 * 0.25;
            let price = if day.weekday() == Weekday::Fri {
                base * 1.02
            } else {
                base
            };
            rows.push(format!("{},{},{:.4}", i, day.format("%d.%m.%Y"), price));
            i += 1;
        }
        day += Duration::days(1);
    }
    rows.reverse();
    let mut text = String::from("my_id,my_date,my_value\n");
    text.push_str(&rows.join("\n"));
    text.push('\n');
    std::fs::write(path, text).unwrap();
}

fn config_for(dir: &Path, format: ReportFormat, parallel: bool) -> RunConfig {
    RunConfig {
        input: InputOptions {
            path: dir.join("export.csv"),
            ..InputOptions::default()
        },
        output: OutputOptions {
            path: dir.join(format!("profit.{format}")),
            format,
        },
        run: RunOptions { parallel },
    }
}

#[test]
fn ranks_all_weekday_pairs_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("export.csv"), 150);
    let config = config_for(dir.path(), ReportFormat::Csv, true);

    let report = run_from_config(&config).unwrap();

    assert_eq!(report.metadata.observation_count, 750);
    assert_eq!(report.metadata.candidate_count, 20);
    assert_eq!(report.len(), 20);
    assert!(report.rows().iter().all(|r| r.sample_size >= MIN_SAMPLE_SIZE));
    assert!(report
        .rows()
        .windows(2)
        .all(|w| w[0].profit_percent >= w[1].profit_percent));

    // Every Friday carries a 2% premium over the base price
    let best = report.best().unwrap();
    assert_eq!(best.sell_weekday.name(), "friday");
    assert!(best.profit_percent > 0.0);

    write_report(&report, &config.output.path, config.output.format).unwrap();
    let csv = std::fs::read_to_string(&config.output.path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "buy_weekday,sell_weekday,profit_percent");
    assert_eq!(lines.len(), 21);
}

#[test]
fn sequential_and_parallel_reports_match() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("export.csv"), 120);

    let seq = run_from_config(&config_for(dir.path(), ReportFormat::Csv, false)).unwrap();
    let par = run_from_config(&config_for(dir.path(), ReportFormat::Csv, true)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn short_history_gives_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("export.csv"), 20);
    let config = config_for(dir.path(), ReportFormat::Csv, true);

    let report = run_from_config(&config).unwrap();
    assert_eq!(report.metadata.candidate_count, 20);
    assert!(report.is_empty());

    write_report(&report, &config.output.path, config.output.format).unwrap();
    let csv = std::fs::read_to_string(&config.output.path).unwrap();
    assert_eq!(csv, "buy_weekday,sell_weekday,profit_percent\n");
}

#[test]
fn json_artifact_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("export.csv"), 110);
    let config = config_for(dir.path(), ReportFormat::Json, true);

    let report = run_from_config(&config).unwrap();
    write_report(&report, &config.output.path, config.output.format).unwrap();

    let json = std::fs::read_to_string(&config.output.path).unwrap();
    assert_eq!(import_json(&json).unwrap(), report);
}

#[test]
fn config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("prices.csv"), 110);
    let toml_path = dir.path().join("weekdaylab.toml");
    std::fs::write(
        &toml_path,
        format!(
            "[input]\npath = {:?}\n\n[output]\npath = {:?}\nformat = \"markdown\"\n",
            dir.path().join("prices.csv"),
            dir.path().join("report.md"),
        ),
    )
    .unwrap();

    let config = RunConfig::from_file(&toml_path).unwrap();
    assert_eq!(config.output.format, ReportFormat::Markdown);

    let report = run_from_config(&config).unwrap();
    write_report(&report, &config.output.path, config.output.format).unwrap();
    let md = std::fs::read_to_string(dir.path().join("report.md")).unwrap();
    assert!(md.starts_with("# Weekday Pair Report"));
    assert!(md.contains("| 1 |"));
}
