//! `logsort` — Reorder timestamped multi-threaded logs.
//!
//! This library provides the record extraction, ordering, and emission used
//! by the `logsort` CLI. A log is a sequence of header lines stamped
//! `[YYYY-MM-DD HH:MM:SS:mmm]`, optionally tagged `[thread-N]`, each followed
//! by zero or more continuation lines. Records can be arranged in original,
//! chronological, thread-cohesive, or thread-then-chronological order.
//!
//! # Example
//!
//! ```
//! use logsort::{OrderPolicy, extract, sort_records};
//!
//! let log = "\
//! [2020-01-01 10:00:00:000] [thread-1] A
//! [2020-01-01 10:00:01:000] [thread-2] B
//! [2020-01-01 10:00:02:000] [thread-1] C
//! ";
//!
//! let mut extraction = extract(log.split_inclusive('\n')).unwrap();
//! sort_records(&mut extraction.records, OrderPolicy::Thread);
//!
//! let order: Vec<usize> = extraction.records.iter().map(|r| r.line_number).collect();
//! assert_eq!(order, vec![0, 2, 1]);
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod order;
pub mod record;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use config::Config;
pub use emit::{Summary, emit, sort_log, sort_records};
pub use error::LogSortError;
pub use extract::{Extraction, Extractor, Feed, extract};
pub use order::OrderPolicy;
pub use record::{LogRecord, SortKey, ThreadRegistry};
pub use timestamp::Timestamp;
