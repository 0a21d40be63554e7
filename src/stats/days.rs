use serde::Serialize;
use std::fmt;

use super::Tally;
use super::histogram::Histogram;
use super::timestamp::parse_weekday;
use crate::error::{Result, StatsError};
use crate::record::{Record, fields};

pub const DAYS_PER_WEEK: usize = 7;

/// Registrations per day of week, Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayHistogram {
    buckets: Histogram<DAYS_PER_WEEK>,
}

/// One line of the day-of-week report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: usize,
    pub count: u64,
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.day, self.count)
    }
}

impl DayHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one registration by the weekday of its date component.
    pub fn observe(&mut self, timestamp: &str) -> Result<()> {
        let day = parse_weekday(timestamp)?;
        self.buckets.increment(day);
        Ok(())
    }

    pub fn count(&self, day: usize) -> u64 {
        self.buckets.count(day)
    }

    pub fn total(&self) -> u64 {
        self.buckets.total()
    }

    pub fn merge(&mut self, other: &Self) {
        self.buckets.merge(&other.buckets);
    }

    pub fn render(&self) -> Vec<DayCount> {
        self.buckets
            .iter()
            .map(|(day, count)| DayCount { day, count })
            .collect()
    }
}

impl Tally for DayHistogram {
    fn observe_record(&mut self, record: &Record) -> Result<()> {
        let regdate = record
            .get(fields::REGDATE)
            .ok_or_else(|| StatsError::malformed("", "regdate is absent"))?;
        self.observe(regdate)
    }
}
