//! Registrant records as handed over by the tabular reader.
//!
//! A [`Record`] keeps its fields in header order so that a cleaned copy can be
//! written back with the same column layout it was read with.

/// Field names the reader is expected to expose after header symbolization.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const STREET: &str = "street";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIPCODE: &str = "zipcode";
    pub const HOMEPHONE: &str = "homephone";
    pub const REGDATE: &str = "regdate";

    pub const EXPECTED_FIELDS: &[&str] = &[
        FIRST_NAME, LAST_NAME, STREET, CITY, STATE, ZIPCODE, HOMEPHONE, REGDATE,
    ];
}

/// One registrant row: an ordered mapping from field name to an optional value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(field, value)` pairs, one cell per pair in order.
    ///
    /// Repeated field names stay separate cells; [`Record::get`] and
    /// [`Record::set`] address the first of them.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.map(Into::into)))
                .collect(),
        }
    }

    /// Returns the value for `field`. A missing key and an empty cell both
    /// come back as `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == field)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == field)
    }

    /// Sets `field` to `value`, keeping its position if the key already exists.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.set_value(field, Some(value.into()));
    }

    /// Like [`Record::set`] but allows storing an absent value.
    pub fn set_value(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        match self.fields.iter_mut().find(|(key, _)| *key == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// The cell at column `index` as `(field, value)`.
    pub fn cell(&self, index: usize) -> Option<(&str, Option<&str>)> {
        self.fields
            .get(index)
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Canonicalises a raw header cell into a field name.
///
/// Characters that are neither whitespace nor ASCII word characters are
/// dropped, the rest is lowercased, trimmed, and whitespace runs become `_`.
pub fn symbolize_header(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_whitespace() || c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}
