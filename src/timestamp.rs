//! Header timestamp detection and parsing.
//!
//! Log headers open with a bracketed `[YYYY-MM-DD HH:MM:SS:mmm]` stamp. Note the
//! colon (not a dot) before the three millisecond digits. Stamps carry no
//! timezone and are kept as civil date-times.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static HEADER_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[([0-9]{4})-([0-9]{2})-([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{3})\]",
    )
    .expect("header timestamp pattern is valid")
});

/// Why a stamp could not become a [`Timestamp`].
#[derive(Debug, Error)]
pub enum TimestampError {
    /// Text does not have the `YYYY-MM-DD HH:MM:SS:mmm` shape.
    #[error("expected YYYY-MM-DD HH:MM:SS:mmm, got {0:?}")]
    Pattern(String),

    /// Digits are well-formed but do not name a real calendar date/time.
    #[error("{0}")]
    Calendar(#[from] jiff::Error),

    /// Year 0000; calendar years start at 1.
    #[error("year 0 is out of range")]
    YearZero,
}

/// A `[YYYY-MM-DD HH:MM:SS:mmm]` prefix matched at the start of a line.
///
/// Matching is purely lexical; [`parse`](Self::parse) validates the calendar.
#[derive(Debug, Clone, Copy)]
pub struct HeaderStamp<'a> {
    /// Stamp text without the surrounding brackets.
    pub text: &'a str,
    fields: [&'a str; 7],
}

impl HeaderStamp<'_> {
    /// Convert the matched digits into a [`Timestamp`].
    pub fn parse(&self) -> Result<Timestamp, TimestampError> {
        let [year, month, day, hour, minute, second, milli] = self.fields.map(digits);
        if year == 0 {
            return Err(TimestampError::YearZero);
        }
        #[allow(clippy::cast_possible_truncation)] // at most four decimal digits
        let value = jiff::civil::DateTime::new(
            year as i16,
            month as i8,
            day as i8,
            hour as i8,
            minute as i8,
            second as i8,
            milli * 1_000_000,
        )?;
        Ok(Timestamp { value })
    }
}

/// Find the header stamp at the very start of `line`, if there is one.
pub fn header_stamp(line: &str) -> Option<HeaderStamp<'_>> {
    let caps = HEADER_STAMP.captures(line)?;
    let whole = caps.get(0)?.as_str();
    let mut fields = [""; 7];
    for (slot, group) in fields.iter_mut().zip(caps.iter().skip(1)) {
        *slot = group?.as_str();
    }
    Some(HeaderStamp {
        text: &whole[1..whole.len() - 1],
        fields,
    })
}

/// Decimal value of an all-ASCII-digit string.
fn digits(s: &str) -> i32 {
    s.bytes().fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}

/// Millisecond-precision civil date-time taken from a header line.
///
/// Ordered chronologically via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Parsed value.
    pub value: jiff::civil::DateTime,
}

impl Timestamp {
    /// Millisecond component (0..=999).
    pub fn millisecond(&self) -> i16 {
        self.value.millisecond()
    }

    /// Format the timestamp the way log headers write it (`YYYY-MM-DD HH:MM:SS:mmm`).
    pub fn format_display(&self) -> String {
        format!(
            "{}:{:03}",
            self.value.strftime("%Y-%m-%d %H:%M:%S"),
            self.millisecond()
        )
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parse bare stamp text such as `2009-12-25 13:05:14:453`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bracketed = format!("[{s}]");
        match header_stamp(&bracketed) {
            Some(stamp) if stamp.text.len() == s.len() => stamp.parse(),
            _ => Err(TimestampError::Pattern(s.to_string())),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_display())
    }
}
