use serde::Serialize;
use std::fmt;

use super::Tally;
use super::histogram::Histogram;
use super::timestamp::parse_hour;
use crate::error::{Result, StatsError};
use crate::record::{Record, fields};

pub const HOURS_PER_DAY: usize = 24;

/// Registrations per hour of day, keyed by the `regdate` time component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourHistogram {
    buckets: Histogram<HOURS_PER_DAY>,
}

/// One line of the hour report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: usize,
    pub count: u64,
}

impl fmt::Display for HourCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.hour, self.count)
    }
}

impl HourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one registration timestamp such as `3/1/16 14:32:00`.
    pub fn observe(&mut self, timestamp: &str) -> Result<()> {
        let hour = parse_hour(timestamp)?;
        self.buckets.increment(hour);
        Ok(())
    }

    pub fn count(&self, hour: usize) -> u64 {
        self.buckets.count(hour)
    }

    pub fn total(&self) -> u64 {
        self.buckets.total()
    }

    pub fn merge(&mut self, other: &Self) {
        self.buckets.merge(&other.buckets);
    }

    /// All 24 hours in order, including empty ones.
    pub fn render(&self) -> Vec<HourCount> {
        self.buckets
            .iter()
            .map(|(hour, count)| HourCount { hour, count })
            .collect()
    }
}

impl Tally for HourHistogram {
    fn observe_record(&mut self, record: &Record) -> Result<()> {
        let regdate = record
            .get(fields::REGDATE)
            .ok_or_else(|| StatsError::malformed("", "regdate is absent"))?;
        self.observe(regdate)
    }
}
