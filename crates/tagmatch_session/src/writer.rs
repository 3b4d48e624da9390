//! Report persistence
//!
//! The registry only produces report content; this writer decides the
//! storage location and file naming, one file per finished run.

use crate::outcome::SessionOutcome;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tagmatch_registry::BoardReport;
use thiserror::Error;

/// Session persistence errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Report serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
    /// The finish button was already disabled by a final outcome
    #[error("finish button is disabled")]
    ButtonDisabled,
}

/// On-disk report format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text (header lines plus one line per socket)
    Text,
    /// Pretty-printed JSON record
    Json,
}

impl ReportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "log",
            Self::Json => "json",
        }
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Text
    }
}

/// Serialized record for the JSON format
#[derive(Serialize)]
struct SessionRecord<'a> {
    timestamp: u64,
    outcome: SessionOutcome,
    report: &'a BoardReport,
}

/// Writes session reports into a log directory with timestamped names
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
    format: ReportFormat,
}

impl ReportWriter {
    /// Create a writer targeting a directory (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            format: ReportFormat::default(),
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Get the target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a report; returns the path of the written file
    pub fn write(
        &self,
        report: &BoardReport,
        outcome: SessionOutcome,
    ) -> Result<PathBuf, SessionError> {
        fs::create_dir_all(&self.dir)?;

        let timestamp = unix_timestamp();
        let path = self
            .dir
            .join(format!("session_{timestamp}.{}", self.format.extension()));

        let content = match self.format {
            ReportFormat::Text => {
                let mut out = String::new();
                out.push_str(&format!("timestamp: {timestamp}\n"));
                out.push_str(&format!("outcome: {outcome}\n\n"));
                out.push_str(&report.to_text());
                out
            }
            ReportFormat::Json => {
                let record = SessionRecord {
                    timestamp,
                    outcome,
                    report,
                };
                serde_json::to_string_pretty(&record)
                    .map_err(|e| SessionError::Serialization(e.to_string()))?
            }
        };

        fs::write(&path, content)?;
        log::info!("session report written to {}", path.display());
        Ok(path)
    }
}

fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
