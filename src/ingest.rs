//! Roster loading from delimited files.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::record::{Record, fields, symbolize_header};

/// Header row plus the records read below it.
///
/// The roster owns its records; every report walks them again through
/// [`Roster::records`] instead of sharing a cursor.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Roster {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Expected fields the header row does not provide.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fields::EXPECTED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.headers.iter().any(|h| h == field))
            .collect()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Reads a roster from a CSV file with a header row.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_roster(path: &Path) -> Result<Roster> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let roster =
        read_roster_from(file).with_context(|| format!("failed to read {}", path.display()))?;
    info!(records = roster.len(), "Roster loaded");
    Ok(roster)
}

/// Reads a roster from any CSV source.
///
/// Headers are symbolized (`First Name` becomes `first_name`). Empty cells and
/// cells missing from short rows are stored as absent values.
pub fn read_roster_from<R: Read>(reader: R) -> Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(symbolize_header).collect();
    debug!(?headers, "Header row parsed");

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let record = Record::from_pairs(headers.iter().enumerate().map(|(i, header)| {
            let value = row.get(i).filter(|cell| !cell.is_empty());
            (header.as_str(), value)
        }));
        records.push(record);
    }

    let roster = Roster::new(headers, records);
    let missing = roster.missing_fields();
    if !missing.is_empty() {
        warn!(?missing, "Roster is missing expected columns");
    }

    Ok(roster)
}
