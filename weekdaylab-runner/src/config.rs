//! Serializable run configuration.
//!
//! A run is described by a small TOML document:
//!
//! ```toml
//! [input]
//! path = "export.csv"
//! date_column = "my_date"
//! price_column = "my_value"
//! delimiter = ","
//! date_format = "%d.%m.%Y"
//!
//! [output]
//! path = "profit.csv"
//! format = "csv"
//!
//! [run]
//! parallel = true
//! ```
//!
//! Every field has a default, so an empty document is a valid config.
//! Initial capital and the minimum sample size are engine constants and
//! deliberately absent here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: InputOptions,
    pub output: OutputOptions,
    pub run: RunOptions,
}

/// Where and how to read the price table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub path: PathBuf,
    /// Header of the date column.
    pub date_column: String,
    /// Header of the price column.
    pub price_column: String,
    /// Single ASCII field delimiter.
    pub delimiter: char,
    /// chrono format string for the date column.
    pub date_format: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("export.csv"),
            date_column: "my_date".into(),
            price_column: "my_value".into(),
            delimiter: ',',
            date_format: "%d.%m.%Y".into(),
        }
    }
}

/// Where and how to write the ranked report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    pub path: PathBuf,
    pub format: ReportFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("profit.csv"),
            format: ReportFormat::Csv,
        }
    }
}

/// Execution switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Evaluate candidate pairs on the rayon pool.
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Artifact format for the ranked report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Markdown,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown report format '{other}'. Valid: csv, markdown, json"
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}

impl RunConfig {
    /// Parse and validate a TOML config string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let input = &self.input;
        if input.date_column.trim().is_empty() {
            return Err(ConfigError::Invalid("input.date_column is empty".into()));
        }
        if input.price_column.trim().is_empty() {
            return Err(ConfigError::Invalid("input.price_column is empty".into()));
        }
        if input.date_column == input.price_column {
            return Err(ConfigError::Invalid(format!(
                "input.date_column and input.price_column are both '{}'",
                input.date_column
            )));
        }
        if !input.delimiter.is_ascii() || input.delimiter == '"' {
            return Err(ConfigError::Invalid(format!(
                "input.delimiter must be a single ASCII character other than '\"', got {:?}",
                input.delimiter
            )));
        }
        if input.date_format.trim().is_empty() {
            return Err(ConfigError::Invalid("input.date_format is empty".into()));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output.path is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = RunConfig::from_toml("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.input.date_column, "my_date");
        assert_eq!(config.input.price_column, "my_value");
        assert_eq!(config.input.delimiter, ',');
        assert_eq!(config.input.date_format, "%d.%m.%Y");
        assert_eq!(config.output.format, ReportFormat::Csv);
        assert!(config.run.parallel);
    }

    #[test]
    fn parses_full_document() {
        let config = RunConfig::from_toml(
            r#"
[input]
path = "data/rts.csv"
date_column = "Date"
price_column = "Close"
delimiter = ";"

[output]
path = "out/rank.md"
format = "markdown"

[run]
parallel = false
"#,
        )
        .unwrap();
        assert_eq!(config.input.path, PathBuf::from("data/rts.csv"));
        assert_eq!(config.input.date_column, "Date");
        assert_eq!(config.input.delimiter, ';');
        // unspecified field keeps its default
        assert_eq!(config.input.date_format, "%d.%m.%Y");
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert!(!config.run.parallel);
    }

    #[test]
    fn rejects_same_column_for_date_and_price() {
        let err = RunConfig::from_toml(
            r#"
[input]
date_column = "x"
price_column = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        let err = RunConfig::from_toml("[input]\ndelimiter = \"§\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(RunConfig::from_toml("[output]\nformat = \"xlsx\"\n").is_err());
        assert!("xlsx".parse::<ReportFormat>().is_err());
        assert_eq!("MD".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RunConfig::from_file(Path::new("/nonexistent/weekdaylab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = RunConfig::default();
        config.output.format = ReportFormat::Json;
        config.run.parallel = false;
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RunConfig::from_toml(&text).unwrap(), config);
    }
}
