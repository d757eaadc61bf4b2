//! Fixed-width decimal records.
//!
//! A [`Record`] is a digit string such as a phone number, stored as its
//! numeric value plus its width so leading zeros survive. Records are
//! validated once when they are built; the sorting code never re-parses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SortError;

/// Widest record whose value always fits in a `u64`.
pub const MAX_RECORD_WIDTH: usize = 19;

const POW10: [u64; MAX_RECORD_WIDTH + 1] = {
    let mut table = [1u64; MAX_RECORD_WIDTH + 1];
    let mut i = 1;
    while i <= MAX_RECORD_WIDTH {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// A validated string of 1 to [`MAX_RECORD_WIDTH`] decimal digits.
///
/// Ordering is by numeric value, then width. Among records of one width
/// this matches lexicographic order of the digit strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Record {
    value: u64,
    width: u8,
}

impl Record {
    pub fn parse(s: &str) -> Result<Self, SortError> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(malformed(s, "empty record".to_string()));
        }
        if bytes.len() > MAX_RECORD_WIDTH {
            return Err(malformed(
                s,
                format!(
                    "{} digits exceeds the maximum width of {}",
                    bytes.len(),
                    MAX_RECORD_WIDTH
                ),
            ));
        }

        let mut value = 0u64;
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_digit() {
                let ch = s[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(malformed(
                    s,
                    format!("non-digit character {:?} at position {}", ch, i),
                ));
            }
            value = value * 10 + u64::from(b - b'0');
        }

        Ok(Self {
            value,
            width: bytes.len() as u8,
        })
    }

    /// Builds a record of `width` digits holding `value`, zero-padded on the
    /// left.
    pub fn from_parts(value: u64, width: usize) -> Result<Self, SortError> {
        if width == 0 || width > MAX_RECORD_WIDTH {
            return Err(SortError::InvalidConfiguration(format!(
                "record width must be in 1..={}, got {}",
                MAX_RECORD_WIDTH, width
            )));
        }
        if value >= POW10[width] {
            return Err(malformed(
                &value.to_string(),
                format!("does not fit in {} digits", width),
            ));
        }
        Ok(Self {
            value,
            width: width as u8,
        })
    }

    /// Caller guarantees `1 <= width <= MAX_RECORD_WIDTH` and that `value`
    /// fits in `width` digits.
    #[inline]
    pub(crate) fn from_parts_unchecked(value: u64, width: usize) -> Self {
        debug_assert!((1..=MAX_RECORD_WIDTH).contains(&width));
        debug_assert!(value < POW10[width]);
        Self {
            value,
            width: width as u8,
        }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Digit at zero-based `position`, counting from the most significant
    /// digit. `None` when the record is too short.
    #[inline]
    pub fn digit(&self, position: usize) -> Option<u8> {
        let width = self.width();
        if position >= width {
            return None;
        }
        Some(((self.value / POW10[width - 1 - position]) % 10) as u8)
    }
}

fn malformed(record: &str, reason: String) -> SortError {
    SortError::MalformedRecord {
        record: record.to_string(),
        reason,
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width())
    }
}

impl FromStr for Record {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Record {
    type Error = SortError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Record> for String {
    fn from(record: Record) -> Self {
        record.to_string()
    }
}

/// Parses a batch of digit strings, requiring every record to share the
/// width of the first one.
pub fn parse_records<I, S>(items: I) -> Result<Vec<Record>, SortError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = items.into_iter();
    let mut records = Vec::with_capacity(items.size_hint().0);
    let mut expected_width = None;

    for item in items {
        let record = Record::parse(item.as_ref())?;
        match expected_width {
            None => expected_width = Some(record.width()),
            Some(width) if width != record.width() => {
                return Err(malformed(
                    item.as_ref(),
                    format!(
                        "width {} differs from the batch width {}",
                        record.width(),
                        width
                    ),
                ));
            }
            Some(_) => {}
        }
        records.push(record);
    }

    Ok(records)
}
