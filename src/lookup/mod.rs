//! Legislator lookup by cleaned zip code.
//!
//! [`LegislatorDirectory`] abstracts the remote service; [`SunlightDirectory`]
//! is the HTTP implementation configured through [`LookupConfig`].

mod config;
mod sunlight;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, LookupConfig};
pub use sunlight::{SunlightDirectory, parse_locate_response};

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::clean::{ZipCode, normalize_zipcode};
use crate::record::{Record, fields};

/// A member of congress as returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Legislator {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub party: String,
}

impl Legislator {
    /// `Rep E. Norton (D)`
    pub fn display_name(&self) -> String {
        let initial: String = self.first_name.chars().take(1).collect();
        format!(
            "{} {}. {} ({})",
            self.title, initial, self.last_name, self.party
        )
    }
}

#[async_trait]
pub trait LegislatorDirectory: Send + Sync {
    /// Returns every legislator representing `zipcode`.
    async fn in_zipcode(&self, zipcode: &ZipCode) -> Result<Vec<Legislator>>;
}

/// `last, first, zipcode, legislators...` for one registrant.
pub fn lookup_line(record: &Record, zipcode: &ZipCode, names: &[String]) -> String {
    format!(
        "{}, {}, {}, {}",
        record.get(fields::LAST_NAME).unwrap_or_default(),
        record.get(fields::FIRST_NAME).unwrap_or_default(),
        zipcode,
        names.join(", ")
    )
}

/// Looks up the first `limit` registrants and returns one line each.
///
/// Registrants whose zip code cleans to the sentinel are listed without
/// querying the directory.
pub async fn lookup_registrants<'a, D, I>(
    directory: &D,
    records: I,
    limit: usize,
) -> Result<Vec<String>>
where
    D: LegislatorDirectory + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    let mut lines = Vec::new();

    for record in records.into_iter().take(limit) {
        let zipcode = normalize_zipcode(record.get(fields::ZIPCODE));
        let names: Vec<String> = if zipcode.is_valid() {
            directory
                .in_zipcode(&zipcode)
                .await?
                .iter()
                .map(Legislator::display_name)
                .collect()
        } else {
            debug!("Skipping lookup for missing zip code");
            Vec::new()
        };

        lines.push(lookup_line(record, &zipcode, &names));
    }

    Ok(lines)
}
