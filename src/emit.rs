//! Sorting extracted records and writing them out.
//!
//! [`sort_log`] drives a whole run: it writes preamble lines as soon as they
//! are scanned, then sorts the records under the chosen [`OrderPolicy`] and
//! writes each record's full text in that order.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::LogSortError;
use crate::extract::{Extractor, Feed};
use crate::order::OrderPolicy;
use crate::record::LogRecord;

/// Counts describing a finished run, reported by `--verbose`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Physical lines read.
    pub lines: usize,
    pub records: usize,
    /// Distinct thread identifiers.
    pub threads: usize,
    pub preamble_lines: usize,
}

/// Sort records in place under `policy`.
pub fn sort_records(records: &mut [LogRecord], policy: OrderPolicy) {
    records.sort_by(|a, b| policy.compare(&a.key(), &b.key()));
}

/// Write each record's text, in slice order.
///
/// Only the input's final line can lack a terminator. When that record is
/// moved ahead of others it gets a `\n` so it does not run into the next one.
pub fn emit<W: Write + ?Sized>(records: &[LogRecord], out: &mut W) -> std::io::Result<()> {
    let last = records.len().saturating_sub(1);
    for (i, record) in records.iter().enumerate() {
        out.write_all(record.text.as_bytes())?;
        if i != last && !record.text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Read a whole log from `reader`, reorder it, and write it to `writer`.
///
/// `input` and `output` name the two streams in error reports. Line
/// terminators are preserved, so [`OrderPolicy::Line`] reproduces the input
/// exactly.
pub fn sort_log<R, W>(
    mut reader: R,
    input: &Path,
    writer: &mut W,
    output: &Path,
    policy: OrderPolicy,
) -> Result<Summary, LogSortError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let read_err = |source| LogSortError::Input {
        path: input.to_path_buf(),
        source,
    };
    let write_err = |source| LogSortError::Output {
        path: output.to_path_buf(),
        source,
    };

    let mut extractor = Extractor::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).map_err(read_err)? == 0 {
            break;
        }
        if let Feed::Preamble(line) = extractor.feed(line)? {
            writer.write_all(line.as_bytes()).map_err(write_err)?;
        }
    }

    let mut extraction = extractor.finish();
    sort_records(&mut extraction.records, policy);
    emit(&extraction.records, writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(Summary {
        lines: extraction.lines,
        records: extraction.records.len(),
        threads: extraction.registry.len(),
        preamble_lines: extraction.preamble_lines,
    })
}
