//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/logsort/config.toml` or `$XDG_CONFIG_HOME/logsort/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::LogSortError;
use crate::order::OrderPolicy;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Ordering applied to records.
    pub order: OrderPolicy,
    /// Input log path; `-` means stdin.
    pub input: PathBuf,
    /// Output path; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Report a run summary on stderr.
    pub verbose: bool,
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, LogSortError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        } else if cli.config.is_some() {
            return Err(LogSortError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        if let Some(order) = cli.requested_order() {
            config.order = order;
        }
        config.input = cli.logfile.clone().unwrap_or_else(|| PathBuf::from("-"));
        config.output.clone_from(&cli.output);
        config.verbose = cli.verbose;

        Ok(config)
    }

    /// Whether input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-" || self.input.as_os_str().is_empty()
    }

    /// Default config file path: `$XDG_CONFIG_HOME/logsort/config.toml` or `~/.config/logsort/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("logsort").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("logsort")
                .join("config.toml")
        } else {
            PathBuf::from(".config/logsort/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(order) = file.order {
            self.order = order;
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    /// Ordering used when no ordering flag is given.
    order: Option<OrderPolicy>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, LogSortError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogSortError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
