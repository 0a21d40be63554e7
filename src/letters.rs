//! Personalised thank-you letters from an HTML template.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::record::{Record, fields};

/// Placeholders in substitution order.
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("#first_name", fields::FIRST_NAME),
    ("#last_name", fields::LAST_NAME),
    ("#street", fields::STREET),
    ("#city", fields::CITY),
    ("#state", fields::STATE),
    ("#zipcode", fields::ZIPCODE),
];

#[derive(Debug, Clone)]
pub struct FormLetter {
    template: String,
}

impl FormLetter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?;
        Ok(Self::new(template))
    }

    /// Fills every placeholder with the record's value; absent values become empty.
    pub fn render(&self, record: &Record) -> String {
        PLACEHOLDERS
            .iter()
            .fold(self.template.clone(), |letter, (placeholder, field)| {
                letter.replace(placeholder, record.get(field).unwrap_or_default())
            })
    }
}

/// `thanks_<last>_<first>.html`, with path separators in names replaced by `_`.
pub fn file_name(record: &Record) -> String {
    format!(
        "thanks_{}_{}.html",
        path_safe(record.get(fields::LAST_NAME).unwrap_or_default()),
        path_safe(record.get(fields::FIRST_NAME).unwrap_or_default())
    )
}

fn path_safe(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Writes a letter for each of the first `limit` records into `dir`.
///
/// Returns the paths written, in record order.
#[tracing::instrument(skip(letter, dir, records), fields(dir = %dir.display()))]
pub fn write_letters<'a, I>(
    letter: &FormLetter,
    dir: &Path,
    records: I,
    limit: usize,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a Record>,
{
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for record in records.into_iter().take(limit) {
        let path = dir.join(file_name(record));
        fs::write(&path, letter.render(record))
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Letter written");
        written.push(path);
    }

    info!(letters = written.len(), "Form letters written");
    Ok(written)
}
