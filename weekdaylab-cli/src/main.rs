//! WeekdayLab CLI — rank weekday buy/sell pairs over a daily price history.
//!
//! Commands:
//! - `run` — load a price table, rank every weekday pair, write the report
//! - `inspect` — show the clean subsequence and outcome of a single pair

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use weekdaylab_core::domain::{DayOfWeek, WeekdayPair};
use weekdaylab_core::engine::{clean_subsequence, profit_percent, simulate, MIN_SAMPLE_SIZE};
use weekdaylab_runner::{
    load_series, run_from_config, write_report, RankingReport, ReportFormat, RunConfig,
};

#[derive(Parser)]
#[command(
    name = "weekdaylab",
    about = "WeekdayLab CLI — backtest buy-on-one-weekday, sell-on-another"
)]
struct Cli {
    /// More log output (debug level).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Input flags shared by both commands. Each overrides the config file.
#[derive(clap::Args)]
struct InputArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Price table to read. Defaults to ./export.csv.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Header of the date column (default: my_date).
    #[arg(long)]
    date_column: Option<String>,

    /// Header of the price column (default: my_value).
    #[arg(long)]
    price_column: Option<String>,

    /// Field delimiter (default: ',').
    #[arg(long)]
    delimiter: Option<char>,

    /// chrono format of the date column (default: %d.%m.%Y).
    #[arg(long)]
    date_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every weekday pair by compounded profit and write the report.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Report path. Defaults to ./profit.csv.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: csv, markdown, json.
        #[arg(long)]
        format: Option<ReportFormat>,

        /// Evaluate pairs on one thread.
        #[arg(long, default_value_t = false)]
        sequential: bool,

        /// Rows to print to stdout.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Show the clean buy/sell subsequence for one pair, ignoring the sample gate.
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Buy weekday (name, abbreviation, or 0-6 with Monday = 0).
        #[arg(long)]
        buy: DayOfWeek,

        /// Sell weekday (name, abbreviation, or 0-6 with Monday = 0).
        #[arg(long)]
        sell: DayOfWeek,

        /// Round trips to print from each end of the history.
        #[arg(long, default_value_t = 5)]
        trips: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            input,
            output,
            format,
            sequential,
            top,
        } => {
            let mut config = build_config(&input)?;
            if let Some(path) = output {
                config.output.path = path;
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            if sequential {
                config.run.parallel = false;
            }
            run_cmd(&config, top)
        }
        Commands::Inspect {
            input,
            buy,
            sell,
            trips,
        } => inspect_cmd(&build_config(&input)?, buy, sell, trips),
    }
}

fn build_config(args: &InputArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    let input = &mut config.input;
    if let Some(path) = &args.input {
        input.path = path.clone();
    }
    if let Some(col) = &args.date_column {
        input.date_column = col.clone();
    }
    if let Some(col) = &args.price_column {
        input.price_column = col.clone();
    }
    if let Some(delim) = args.delimiter {
        input.delimiter = delim;
    }
    if let Some(fmt) = &args.date_format {
        input.date_format = fmt.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run_cmd(config: &RunConfig, top: usize) -> Result<()> {
    let report = run_from_config(config)
        .with_context(|| format!("run failed for {}", config.input.path.display()))?;

    print_summary(&report, top);

    write_report(&report, &config.output.path, config.output.format)?;
    println!(
        "Report ({}) saved to: {}",
        config.output.format,
        config.output.path.display()
    );
    Ok(())
}

fn print_summary(report: &RankingReport, top: usize) {
    let meta = &report.metadata;
    println!();
    println!("=== Weekday Pair Ranking ===");
    if let (Some(first), Some(last)) = (meta.first_date, meta.last_date) {
        println!("Period:        {first} to {last}");
    }
    println!("Observations:  {}", meta.observation_count);
    println!(
        "Pairs ranked:  {} of {} (min sample {})",
        report.len(),
        meta.candidate_count,
        meta.min_sample_size
    );
    println!();

    if report.is_empty() {
        println!("No weekday pair had enough data to rank.");
        println!();
        return;
    }

    println!("{:>3}  {:<10} {:<10} {:>12} {:>7}", "#", "buy", "sell", "profit %", "trades");
    for (i, row) in report.top(top).iter().enumerate() {
        println!(
            "{:>3}  {:<10} {:<10} {:>12.2} {:>7}",
            i + 1,
            row.buy_weekday.name(),
            row.sell_weekday.name(),
            row.profit_percent,
            row.trade_count
        );
    }
    if report.len() > top {
        println!("  ... {} more", report.len() - top);
    }
    println!();
}

fn inspect_cmd(config: &RunConfig, buy: DayOfWeek, sell: DayOfWeek, trips: usize) -> Result<()> {
    let pair = WeekdayPair::new(buy, sell)?;
    let loaded = load_series(&config.input)
        .with_context(|| format!("failed to load {}", config.input.path.display()))?;

    let clean = clean_subsequence(loaded.series.observations(), pair);
    let capital = simulate(&clean);
    let round_trips: Vec<_> = clean.round_trips().collect();

    println!();
    println!("=== {pair} ===");
    println!("Observations:   {}", loaded.series.len());
    println!("Clean sample:   {}", clean.len());
    println!("Round trips:    {}", round_trips.len());
    println!("Final capital:  {capital:.2}");
    println!("Profit:         {:+.2}%", profit_percent(capital));
    println!(
        "Ranked:         {}",
        if clean.len() >= MIN_SAMPLE_SIZE {
            "yes".to_string()
        } else {
            format!("no (needs {MIN_SAMPLE_SIZE} observations)")
        }
    );

    if !round_trips.is_empty() && trips > 0 {
        println!();
        println!("{:<12} {:>12} {:<12} {:>12} {:>9}", "bought", "at", "sold", "at", "ratio");
        let head = trips.min(round_trips.len());
        let tail_start = round_trips.len().saturating_sub(trips).max(head);
        for trip in round_trips[..head].iter().chain(&round_trips[tail_start..]) {
            println!(
                "{:<12} {:>12.4} {:<12} {:>12.4} {:>9.4}",
                trip.buy.date.to_string(),
                trip.buy.price,
                trip.sell.date.to_string(),
                trip.sell.price,
                trip.ratio()
            );
        }
        if tail_start > head {
            println!("  ... {} more round trips not shown", tail_start - head);
        }
    }
    println!();
    Ok(())
}
