use serde::Serialize;
use std::fmt;

/// Sentinel stored when a record carries no zip code at all.
pub const INVALID_ZIPCODE: &str = "00000";

const ZIPCODE_LEN: usize = 5;

/// A five character zip code, or [`INVALID_ZIPCODE`].
///
/// Values that already have five or more characters are kept verbatim, so a
/// `ZipCode` is not guaranteed to be five digits. Spreadsheet damage such as
/// `9.10E+04` survives cleaning unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn invalid() -> Self {
        Self(INVALID_ZIPCODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_ZIPCODE
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Left-pads short zip codes with `0` up to five characters.
///
/// Absent input maps to the sentinel. Input of five characters or more is
/// returned unchanged, without truncation or digit checks.
pub fn normalize_zipcode(raw: Option<&str>) -> ZipCode {
    match raw {
        None => ZipCode::invalid(),
        Some(value) => ZipCode(format!("{value:0>width$}", width = ZIPCODE_LEN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(raw: &str) -> String {
        normalize_zipcode(Some(raw)).into_string()
    }

    #[test]
    fn test_short_zip_is_left_padded() {
        assert_eq!(normalized("123"), "00123");
        assert_eq!(normalized("7306"), "07306");
        assert_eq!(normalized("1"), "00001");
    }

    #[test]
    fn test_empty_zip_pads_to_sentinel() {
        assert_eq!(normalized(""), INVALID_ZIPCODE);
    }

    #[test]
    fn test_absent_zip_is_sentinel() {
        assert_eq!(normalize_zipcode(None).as_str(), INVALID_ZIPCODE);
        assert!(!normalize_zipcode(None).is_valid());
    }

    #[test]
    fn test_five_characters_unchanged() {
        assert_eq!(normalized("20010"), "20010");
    }

    // Long and non-numeric values are passed through, not rejected.
    #[test]
    fn test_long_or_non_numeric_zip_passes_through() {
        assert_eq!(normalized("1234567"), "1234567");
        assert_eq!(normalized("9.10E+04"), "9.10E+04");
        assert_eq!(normalized("abcde"), "abcde");
        assert_eq!(normalized("20010-1234"), "20010-1234");
    }

    #[test]
    fn test_short_non_numeric_zip_is_padded_not_validated() {
        assert_eq!(normalized("ab"), "000ab");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["123", "20010", "1234567", ""] {
            let once = normalize_zipcode(Some(raw));
            let twice = normalize_zipcode(Some(once.as_str()));
            assert_eq!(once, twice);
        }
    }
}
