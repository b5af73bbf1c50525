//! Record extraction: groups physical lines into [`LogRecord`]s.
//!
//! A line opening with a `[YYYY-MM-DD HH:MM:SS:mmm]` stamp starts a record.
//! Any other line continues the most recently started record. Lines that come
//! before the first stamp are preamble: they belong to no record and are
//! handed back to the caller to be written immediately, in place.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LogSortError;
use crate::record::{LogRecord, ThreadRegistry};
use crate::timestamp;

static THREAD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(thread-[0-9]+)\]").expect("thread marker pattern is valid"));

/// How a fed line was classified.
#[derive(Debug, PartialEq, Eq)]
pub enum Feed {
    /// Line precedes every timestamped line; write it through unchanged.
    Preamble(String),
    /// Line started a new record.
    Header,
    /// Line was appended to the open record.
    Continuation,
}

/// The product of a full scan.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Records in discovery order.
    pub records: Vec<LogRecord>,
    pub registry: ThreadRegistry,
    /// Preamble lines, in order. Left empty by [`Extractor::finish`], whose
    /// caller has already received them through [`Feed::Preamble`].
    pub preamble: Vec<String>,
    /// Number of preamble lines seen.
    pub preamble_lines: usize,
    /// Total physical lines consumed.
    pub lines: usize,
}

/// Incremental single-pass extractor.
#[derive(Debug, Default)]
pub struct Extractor {
    line_number: usize,
    preamble_lines: usize,
    records: Vec<LogRecord>,
    registry: ThreadRegistry,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next physical line, including its line terminator.
    ///
    /// Fails on a stamp whose digits do not form a valid calendar date/time.
    pub fn feed(&mut self, line: String) -> Result<Feed, LogSortError> {
        let line_number = self.line_number;
        self.line_number += 1;

        let Some(stamp) = timestamp::header_stamp(&line) else {
            return Ok(match self.records.last_mut() {
                Some(open) => {
                    open.text.push_str(&line);
                    Feed::Continuation
                }
                None => {
                    self.preamble_lines += 1;
                    Feed::Preamble(line)
                }
            });
        };

        let timestamp = stamp.parse().map_err(|e| LogSortError::Timestamp {
            line: line_number,
            text: stamp.text.to_string(),
            reason: e.to_string(),
        })?;

        // The last marker on the header names the thread.
        let thread_anchor = THREAD_MARKER
            .captures_iter(&line)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|thread| self.registry.anchor(thread.as_str(), line_number));
        let unthreaded_anchor = match thread_anchor {
            Some(_) => line_number,
            None => self.registry.unthreaded_anchor(line_number),
        };

        self.records.push(LogRecord {
            line_number,
            timestamp,
            thread_anchor,
            unthreaded_anchor,
            text: line,
        });
        Ok(Feed::Header)
    }

    /// Finish the scan. Preamble lines are not retained.
    pub fn finish(self) -> Extraction {
        Extraction {
            records: self.records,
            registry: self.registry,
            preamble: Vec::new(),
            preamble_lines: self.preamble_lines,
            lines: self.line_number,
        }
    }
}

/// Extract records from a complete sequence of lines, collecting preamble.
///
/// Each line should carry its own terminator so record text reproduces the
/// input byte-for-byte.
pub fn extract<I, S>(lines: I) -> Result<Extraction, LogSortError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut extractor = Extractor::new();
    let mut preamble = Vec::new();
    for line in lines {
        if let Feed::Preamble(line) = extractor.feed(line.into())? {
            preamble.push(line);
        }
    }
    Ok(Extraction {
        preamble,
        ..extractor.finish()
    })
}
