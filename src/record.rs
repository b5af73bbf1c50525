//! Log records, their sort keys, and the thread registry built while scanning.

use std::collections::HashMap;

use crate::timestamp::Timestamp;

/// One logical log message: a timestamped header line plus any continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// 0-based physical line index of the header line.
    pub line_number: usize,
    pub timestamp: Timestamp,
    /// Line number of the first record seen for this record's thread.
    pub thread_anchor: Option<usize>,
    /// Anchor shared by records without a thread marker. See [`SortKey::cohort`].
    pub(crate) unthreaded_anchor: usize,
    /// Header and continuation lines, each with its original terminator.
    pub text: String,
}

impl LogRecord {
    /// Composite key used by [`OrderPolicy`](crate::order::OrderPolicy).
    pub fn key(&self) -> SortKey {
        SortKey {
            thread_anchor: self.thread_anchor,
            timestamp: self.timestamp,
            line_number: self.line_number,
            cohort: self.thread_anchor.unwrap_or(self.unthreaded_anchor),
        }
    }

    /// Number of physical lines in [`text`](Self::text).
    pub fn line_count(&self) -> usize {
        self.text.split_inclusive('\n').count()
    }
}

/// Composite ordering key `(thread_anchor, timestamp, line_number)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub thread_anchor: Option<usize>,
    pub timestamp: Timestamp,
    pub line_number: usize,
    /// Thread group the record sorts with.
    ///
    /// Equals `thread_anchor` for threaded records. Records without a thread
    /// marker form one anonymous group anchored at the first such record's
    /// line. Anchors are header line numbers, so groups never collide.
    pub cohort: usize,
}

impl SortKey {
    /// Key for a record of an explicit thread.
    pub const fn threaded(thread_anchor: usize, timestamp: Timestamp, line_number: usize) -> Self {
        Self {
            thread_anchor: Some(thread_anchor),
            timestamp,
            line_number,
            cohort: thread_anchor,
        }
    }

    /// Key for a record without a thread marker, grouped under `unthreaded_anchor`.
    pub const fn unthreaded(
        unthreaded_anchor: usize,
        timestamp: Timestamp,
        line_number: usize,
    ) -> Self {
        Self {
            thread_anchor: None,
            timestamp,
            line_number,
            cohort: unthreaded_anchor,
        }
    }
}

/// Thread identifier (`thread-<digits>`) → line number of its first record.
///
/// Append-only: an identifier's anchor never changes once registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadRegistry {
    anchors: HashMap<String, usize>,
    unthreaded: Option<usize>,
}

impl ThreadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor for `thread`, registering `line_number` if the thread is new.
    pub fn anchor(&mut self, thread: &str, line_number: usize) -> usize {
        if let Some(&anchor) = self.anchors.get(thread) {
            return anchor;
        }
        self.anchors.insert(thread.to_string(), line_number);
        line_number
    }

    /// Anchor of the anonymous group for records without a thread marker.
    pub(crate) fn unthreaded_anchor(&mut self, line_number: usize) -> usize {
        *self.unthreaded.get_or_insert(line_number)
    }

    /// Registered anchor for `thread`, if seen.
    pub fn get(&self, thread: &str) -> Option<usize> {
        self.anchors.get(thread).copied()
    }

    /// Number of distinct threads seen.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
