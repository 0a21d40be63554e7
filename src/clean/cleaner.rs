use tracing::trace;

use super::phone::normalize_phone;
use super::zipcode::normalize_zipcode;
use crate::record::{Record, fields};

/// Returns a copy of `record` with `homephone` and `zipcode` normalized.
///
/// Every other field is carried over untouched. A field that the record does
/// not have at all is left out rather than added, so the cleaned record has
/// exactly the input's key set.
pub fn clean(record: &Record) -> Record {
    let mut cleaned = record.clone();
    clean_in_place(&mut cleaned);
    cleaned
}

/// Normalizes `homephone` and `zipcode` of a working copy in place.
pub fn clean_in_place(record: &mut Record) {
    if record.contains_key(fields::HOMEPHONE) {
        let phone = normalize_phone(record.get(fields::HOMEPHONE));
        if !phone.is_valid() {
            trace!(raw = ?record.get(fields::HOMEPHONE), "Phone number replaced by sentinel");
        }
        record.set(fields::HOMEPHONE, phone.into_string());
    }

    if record.contains_key(fields::ZIPCODE) {
        let zipcode = normalize_zipcode(record.get(fields::ZIPCODE));
        record.set(fields::ZIPCODE, zipcode.into_string());
    }
}

/// Lazily cleans a sequence of records, one output per input, in order.
pub fn clean_all<'a, I>(records: I) -> impl Iterator<Item = Record> + 'a
where
    I: IntoIterator<Item = &'a Record>,
    I::IntoIter: 'a,
{
    records.into_iter().map(clean)
}
