//! Command-line argument definitions for `logsort`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::order::OrderPolicy;

/// Reorder a timestamped multi-threaded log chronologically or by thread.
///
/// Header lines start with `[YYYY-MM-DD HH:MM:SS:mmm]` and may carry a
/// `[thread-N]` marker. Lines without a stamp stay attached to the header
/// above them; lines before the first header are written through first.
#[derive(Debug, Parser)]
#[command(name = "logsort", version, about, long_about = None)]
pub struct Cli {
    /// Log file to sort (`-` reads stdin).
    #[arg(required_unless_present = "completions")]
    pub logfile: Option<PathBuf>,

    /// Sort chronologically.
    ///
    /// This is the default when no ordering option is given. Combined with
    /// `--thread`, each thread's messages are ordered chronologically.
    #[arg(short = 'c', long)]
    pub chrono: bool,

    /// Clump messages from the same thread together.
    ///
    /// Threads appear in the order of their first message.
    #[arg(short = 't', long)]
    pub thread: bool,

    /// Select the ordering by name.
    #[arg(long, value_enum, conflicts_with_all = ["chrono", "thread"])]
    pub order: Option<OrderPolicy>,

    /// Output file. Stdout is used when omitted.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a summary of the run to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Ordering requested on the command line, if any.
    pub fn requested_order(&self) -> Option<OrderPolicy> {
        if self.order.is_some() {
            return self.order;
        }
        if self.chrono || self.thread {
            return Some(OrderPolicy::from_flags(self.chrono, self.thread));
        }
        None
    }
}
