//! Parsing of `regdate` values such as `11/12/08 10:47`.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, StatsError};

const DATE_FORMAT: &str = "%m/%d/%y";

/// Splits a timestamp into its date token and, when present, its time token.
fn tokens(value: &str) -> Result<(&str, Option<&str>)> {
    let mut parts = value.split_whitespace();
    let date = parts
        .next()
        .ok_or_else(|| StatsError::malformed(value, "timestamp is empty"))?;
    Ok((date, parts.next()))
}

/// Extracts the hour of day (0-23) from the time component.
pub fn parse_hour(value: &str) -> Result<usize> {
    let (_, time) = tokens(value)?;
    let time = time.ok_or_else(|| StatsError::malformed(value, "missing time component"))?;

    let (hour, _) = time
        .split_once(':')
        .ok_or_else(|| StatsError::malformed(value, "time has no ':' separator"))?;

    let hour: usize = hour
        .parse()
        .map_err(|_| StatsError::malformed(value, "hour is not a number"))?;

    if hour >= 24 {
        return Err(StatsError::malformed(value, "hour out of range"));
    }

    Ok(hour)
}

/// Parses the month/day/two-digit-year date component.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let (date, _) = tokens(value)?;
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| StatsError::malformed(value, "date is not month/day/year"))
}

/// Day of week of the date component, Sunday = 0 through Saturday = 6.
pub fn parse_weekday(value: &str) -> Result<usize> {
    Ok(parse_date(value)?.weekday().num_days_from_sunday() as usize)
}
