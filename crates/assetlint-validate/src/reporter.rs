//! Violation Log Generation
//!
//! Writes the incorrectly named assets of a scan to a log file:
//! - Text: aligned, human-readable report with a summary
//! - CSV: `Violating Asset,Path` for spreadsheets
//! - JSON: for CI integration

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Result, ValidationError};

/// Receives violating assets one at a time, then persists them
pub trait ViolationLogger {
    /// Record one violating asset; called in path order
    fn log_violation(&mut self, name: &str, path: &str);

    /// Number of violations recorded so far
    fn count(&self) -> usize;

    /// Finished log content
    fn render(&self) -> String;

    /// File extension of the log, without the dot
    fn extension(&self) -> &'static str;

    /// Write the log into `log_dir` under a timestamped name
    fn generate_log(&self, log_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(log_dir)?;
        let path = log_dir.join(format!(
            "{}.{}",
            log_file_name(Utc::now()),
            self.extension()
        ));
        std::fs::write(&path, self.render())?;
        info!(path = %path.display(), violations = self.count(), "Wrote naming log");
        Ok(path)
    }
}

/// `AssetLintingLog_2024-03-01_09.15.00Z` for 2024-03-01 09:15:00 UTC
pub fn log_file_name(timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .format("%Y-%m-%d %H:%M:%SZ")
        .to_string()
        .replace(' ', "_")
        .replace(':', ".");
    format!("AssetLintingLog_{stamp}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct LoggedAsset {
    name: String,
    path: String,
}

/// Plain text report with aligned columns
#[derive(Debug, Default)]
pub struct TextLogger {
    entries: Vec<LoggedAsset>,
}

impl TextLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViolationLogger for TextLogger {
    fn log_violation(&mut self, name: &str, path: &str) {
        self.entries.push(LoggedAsset {
            name: name.to_string(),
            path: path.to_string(),
        });
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn render(&self) -> String {
        let quoted = |s: &str| format!("'{s}'");
        let name_width = self
            .entries
            .iter()
            .map(|e| e.name.chars().count() + 2)
            .max()
            .unwrap_or(0);
        let path_width = self
            .entries
            .iter()
            .map(|e| e.path.chars().count() + 2)
            .max()
            .unwrap_or(0);

        let mut output = String::from("/// ASSET NAMING INCONSISTENCIES ///\n\n");
        for entry in &self.entries {
            output.push_str(&format!(
                "Asset     {:<name_width$}     at     {:<path_width$}     has naming inconsistencies.\n",
                quoted(&entry.name),
                quoted(&entry.path),
            ));
        }
        output.push_str("\n/// SUMMARY ///\n\n");
        output.push_str(&format!(
            "A total of {} naming inconsistencies were found.\n",
            self.entries.len()
        ));
        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

/// Two-column CSV log
#[derive(Debug, Default)]
pub struct CsvLogger {
    entries: Vec<LoggedAsset>,
}

impl CsvLogger {
    pub const HEADER: &'static str = "Violating Asset,Path";

    pub fn new() -> Self {
        Self::default()
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl ViolationLogger for CsvLogger {
    fn log_violation(&mut self, name: &str, path: &str) {
        self.entries.push(LoggedAsset {
            name: name.to_string(),
            path: path.to_string(),
        });
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn render(&self) -> String {
        let mut output = format!("{}\n", Self::HEADER);
        for entry in &self.entries {
            output.push_str(&format!(
                "{},{}\n",
                csv_field(&entry.name),
                csv_field(&entry.path)
            ));
        }
        output
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

#[derive(Serialize)]
struct JsonLog<'a> {
    total: usize,
    violations: &'a [LoggedAsset],
}

/// JSON log for CI integration
#[derive(Debug, Default)]
pub struct JsonLogger {
    entries: Vec<LoggedAsset>,
}

impl JsonLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViolationLogger for JsonLogger {
    fn log_violation(&mut self, name: &str, path: &str) {
        self.entries.push(LoggedAsset {
            name: name.to_string(),
            path: path.to_string(),
        });
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn render(&self) -> String {
        let log = JsonLog {
            total: self.entries.len(),
            violations: &self.entries,
        };
        serde_json::to_string_pretty(&log).unwrap_or_else(|_| "{}".to_string())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Available log formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl LogFormat {
    pub const ALL: [LogFormat; 3] = [Self::Text, Self::Csv, Self::Json];

    /// Fresh, empty logger for this format
    pub fn logger(self) -> Box<dyn ViolationLogger> {
        match self {
            Self::Text => Box::new(TextLogger::new()),
            Self::Csv => Box::new(CsvLogger::new()),
            Self::Json => Box::new(JsonLogger::new()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ValidationError::Config(format!(
                "unknown log format '{other}', expected text, csv or json"
            ))),
        }
    }
}
