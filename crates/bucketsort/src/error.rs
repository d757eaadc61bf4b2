//! Error types for record validation and bucket sorting.

use std::fmt;

use crate::Record;

/// Errors that can occur while building records or sorting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A sort parameter is outside its valid range (zero buckets, a digit
    /// position past the widest representable record).
    InvalidConfiguration(String),

    /// The linear key formula divided by a zero maximum.
    Arithmetic(String),

    /// A string is not a valid record, or a record has no digit at the
    /// position the recursive sort needs.
    MalformedRecord { record: String, reason: String },

    /// The linear key formula produced an index outside `[0, num_buckets)`.
    KeyOutOfRange {
        record: Record,
        key: i64,
        num_buckets: usize,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {}", msg)
            }
            SortError::Arithmetic(msg) => write!(f, "arithmetic error: {}", msg),
            SortError::MalformedRecord { record, reason } => {
                write!(f, "malformed record {:?}: {}", record, reason)
            }
            SortError::KeyOutOfRange {
                record,
                key,
                num_buckets,
            } => {
                write!(
                    f,
                    "bucket key {} for record {} is outside 0..{}",
                    key, record, num_buckets
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
