//! Errors raised while aggregating registrant records.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// `regdate` could not be split into a date and a colon separated time,
    /// or one of its parts did not parse.
    #[error("malformed timestamp '{value}': {reason}")]
    MalformedTimestamp { value: String, reason: &'static str },

    /// A field the aggregation needs is missing or empty.
    #[error("missing field '{field}'")]
    AbsentField { field: &'static str },

    /// Wraps a failure with the 1-based index of the offending record.
    #[error("record {record}: {source}")]
    AtRecord {
        record: usize,
        #[source]
        source: Box<StatsError>,
    },
}

impl StatsError {
    pub(crate) fn malformed(value: &str, reason: &'static str) -> Self {
        StatsError::MalformedTimestamp {
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn at_record(self, record: usize) -> Self {
        StatsError::AtRecord {
            record,
            source: Box::new(self),
        }
    }

    /// The 1-based record index attached to this error, if any.
    pub fn record(&self) -> Option<usize> {
        match self {
            StatsError::AtRecord { record, .. } => Some(*record),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
