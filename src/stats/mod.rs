//! Registration statistics.
//!
//! Three independent aggregators consume the same record stream:
//! [`HourHistogram`], [`DayHistogram`] and [`StateRanking`]. Each owns its
//! counters and is driven by [`tally`] over a sequence the caller owns, so the
//! same roster can be walked again for the next report.

pub mod days;
pub mod histogram;
pub mod hours;
pub mod states;
pub mod timestamp;

pub use days::{DayCount, DayHistogram};
pub use histogram::Histogram;
pub use hours::{HourCount, HourHistogram};
pub use states::{StateCount, StateRanking};

use crate::error::Result;
use crate::record::Record;

/// An aggregator that can be fed one record at a time.
pub trait Tally {
    fn observe_record(&mut self, record: &Record) -> Result<()>;
}

/// Feeds every record to `aggregator`, stopping at the first failure.
///
/// The returned error carries the 1-based index of the record that failed, so
/// a bad row aborts the report instead of silently skewing its counts.
pub fn tally<'a, T, I>(aggregator: &mut T, records: I) -> Result<()>
where
    T: Tally + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    for (index, record) in records.into_iter().enumerate() {
        aggregator
            .observe_record(record)
            .map_err(|e| e.at_record(index + 1))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    fn with_regdate(regdate: Option<&str>) -> Record {
        Record::from_pairs([("first_name", Some("Sarah")), ("regdate", regdate)])
    }

    #[test]
    fn test_tally_counts_every_record() {
        let records = vec![
            with_regdate(Some("11/12/08 10:47")),
            with_regdate(Some("11/12/08 13:23")),
            with_regdate(Some("11/12/08 13:30")),
        ];

        let mut hours = HourHistogram::new();
        tally(&mut hours, &records).unwrap();

        assert_eq!(hours.total(), 3);
        assert_eq!(hours.count(13), 2);
    }

    #[test]
    fn test_tally_reports_offending_record() {
        let records = vec![
            with_regdate(Some("11/12/08 10:47")),
            with_regdate(Some("11/12/08 13:23")),
            with_regdate(Some("11/12/08")),
        ];

        let mut hours = HourHistogram::new();
        let err = tally(&mut hours, &records).unwrap_err();

        assert_eq!(err.record(), Some(3));
        match err {
            StatsError::AtRecord { source, .. } => {
                assert!(matches!(*source, StatsError::MalformedTimestamp { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_tally_reports_absent_regdate() {
        let records = vec![with_regdate(None)];
        let mut days = DayHistogram::new();
        let err = tally(&mut days, &records).unwrap_err();
        assert_eq!(err.record(), Some(1));
        assert!(err.to_string().starts_with("record 1: malformed timestamp"));
    }

    #[test]
    fn test_tally_accepts_dyn_aggregators() {
        let records = vec![Record::from_pairs([
            ("state", Some("CA")),
            ("regdate", Some("3/1/16 14:32:00")),
        ])];

        let mut hours = HourHistogram::new();
        let mut days = DayHistogram::new();
        let mut states = StateRanking::new();
        {
            let aggregators: [&mut dyn Tally; 3] = [&mut hours, &mut days, &mut states];
            for aggregator in aggregators {
                tally(aggregator, &records).unwrap();
            }
        }

        assert_eq!(hours.count(14), 1);
        assert_eq!(days.count(2), 1);
        assert_eq!(states.count("CA"), Some(1));
    }
}
