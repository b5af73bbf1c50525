//! Ordering policies over record [`SortKey`]s.
//!
//! Every policy is a total order: each falls back to the header line number,
//! which is unique within a file.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::record::SortKey;

/// How records are arranged in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
pub enum OrderPolicy {
    /// Original file order.
    #[value(name = "line")]
    #[serde(rename = "line")]
    Line,
    /// By timestamp, ties broken by original order.
    #[default]
    #[value(name = "chrono")]
    #[serde(rename = "chrono")]
    Chrono,
    /// Each thread's records clumped together in original order; threads
    /// ordered by first appearance.
    #[value(name = "thread")]
    #[serde(rename = "thread")]
    Thread,
    /// Threads clumped as for [`Thread`](Self::Thread), each thread's records
    /// in chronological order.
    #[value(name = "thread+chrono", alias = "thread-chrono")]
    #[serde(rename = "thread+chrono", alias = "thread-chrono")]
    ThreadChrono,
}

impl OrderPolicy {
    /// Pick the policy for the `--chrono` / `--thread` flag combination.
    pub const fn from_flags(chrono: bool, thread: bool) -> Self {
        match (chrono, thread) {
            (true, true) => Self::ThreadChrono,
            (true, false) => Self::Chrono,
            (false, true) => Self::Thread,
            (false, false) => Self::Line,
        }
    }

    /// Policy name as accepted on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Chrono => "chrono",
            Self::Thread => "thread",
            Self::ThreadChrono => "thread+chrono",
        }
    }

    /// Compare two keys under this policy.
    ///
    /// Thread membership is read from [`SortKey::cohort`], so records without
    /// a thread marker compare among themselves by the fallback rule and as a
    /// single group against threaded records.
    pub fn compare(self, x: &SortKey, y: &SortKey) -> Ordering {
        match self {
            Self::Line => x.line_number.cmp(&y.line_number),
            Self::Chrono => chrono(x, y),
            Self::Thread => {
                if x.cohort == y.cohort {
                    x.line_number.cmp(&y.line_number)
                } else {
                    (x.cohort, x.line_number).cmp(&(y.cohort, y.line_number))
                }
            }
            Self::ThreadChrono => {
                if x.cohort == y.cohort {
                    chrono(x, y)
                } else {
                    (x.cohort, x.timestamp, x.line_number).cmp(&(
                        y.cohort,
                        y.timestamp,
                        y.line_number,
                    ))
                }
            }
        }
    }
}

fn chrono(x: &SortKey, y: &SortKey) -> Ordering {
    (x.timestamp, x.line_number).cmp(&(y.timestamp, y.line_number))
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OrderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| {
            format!("invalid order '{s}': expected one of line, chrono, thread, thread+chrono")
        })
    }
}
