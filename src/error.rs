//! Error types for the `logsort` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in `logsort`.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Input`](Self::Input), [`Output`](Self::Output) and
/// [`Timestamp`](Self::Timestamp) → exit 2.
#[derive(Debug, Error)]
pub enum LogSortError {
    /// Configuration error (unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Input log file missing, unreadable, or not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path could not be created or written.
    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header timestamp matched the numeric pattern but is not a valid date/time.
    #[error("invalid timestamp on line {line} ({text}): {reason}")]
    Timestamp {
        /// 0-based physical line number.
        line: usize,
        text: String,
        reason: String,
    },

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LogSortError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            _ => 2,
        }
    }
}
