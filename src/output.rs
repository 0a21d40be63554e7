//! Output for cleaned rosters and reports.
//!
//! Cleaned records are written back as CSV; reports render as text lines or JSON.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::record::Record;

/// How a report is rendered for the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One tab separated line per row.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// Renders report rows in the requested format.
pub fn render_report<T>(rows: &[T], format: ReportFormat) -> Result<String>
where
    T: Display + Serialize,
{
    match format {
        ReportFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{row}\n"))
            .collect::<String>()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
    }
}

/// Writes `records` to a new CSV file at `path`, header row first.
///
/// Returns the number of data rows written.
#[tracing::instrument(skip(path, headers, records), fields(path = %path.display()))]
pub fn write_roster<'a, I>(path: &Path, headers: &[String], records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let written = write_roster_to(file, headers, records)?;
    info!(rows = written, "Cleaned roster written");
    Ok(written)
}

/// Writes a header row and one row per record, values in header order.
/// Absent values are written as empty cells.
///
/// Cells are matched by column position first, so repeated header names keep
/// their own values.
pub fn write_roster_to<'a, W, I>(writer: W, headers: &[String], records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(headers)?;

    let mut written = 0;
    for record in records {
        writer.write_record(
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| column_value(record, index, header)),
        )?;
        written += 1;
    }

    writer.flush()?;
    debug!(rows = written, "CSV rows flushed");
    Ok(written)
}

/// The record's cell at `index` when it belongs to `header`, otherwise the
/// first cell named `header`.
fn column_value<'r>(record: &'r Record, index: usize, header: &str) -> &'r str {
    match record.cell(index) {
        Some((field, value)) if field == header => value.unwrap_or_default(),
        _ => record.get(header).unwrap_or_default(),
    }
}
