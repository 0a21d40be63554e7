use serde::Serialize;
use std::fmt;

/// Sentinel stored in place of a phone number that cannot be recovered.
pub const INVALID_PHONE_NUMBER: &str = "0000000000";

/// A ten digit NANP phone number, or [`INVALID_PHONE_NUMBER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn invalid() -> Self {
        Self(INVALID_PHONE_NUMBER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_PHONE_NUMBER
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces a raw phone cell to its canonical ten digits.
///
/// Every non-digit is stripped first. Ten digits are kept as is; eleven digits
/// lose a leading `1` country code. Anything else maps to the sentinel.
pub fn normalize_phone(raw: Option<&str>) -> PhoneNumber {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    match digits.len() {
        10 => PhoneNumber(digits),
        11 => match digits.strip_prefix('1') {
            Some(rest) => PhoneNumber(rest.to_string()),
            None => PhoneNumber::invalid(),
        },
        _ => PhoneNumber::invalid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(raw: &str) -> String {
        normalize_phone(Some(raw)).into_string()
    }

    #[test]
    fn test_ten_digits_pass_through() {
        assert_eq!(normalized("6154385000"), "6154385000");
        assert_eq!(normalized("0000000001"), "0000000001");
    }

    #[test]
    fn test_formatting_is_stripped() {
        assert_eq!(normalized("414-520-5000"), "4145205000");
        assert_eq!(normalized("(941)979-2000"), "9419792000");
        assert_eq!(normalized("778.232.7000"), "7782327000");
        assert_eq!(normalized(" 613 565-4000 "), "6135654000");
    }

    #[test]
    fn test_eleven_digits_with_country_code() {
        assert_eq!(normalized("11234567890"), "1234567890");
        assert_eq!(normalized("+1 (415) 555-1212"), "4155551212");
    }

    #[test]
    fn test_eleven_digits_without_country_code_is_invalid() {
        assert_eq!(normalized("21234567890"), INVALID_PHONE_NUMBER);
    }

    #[test]
    fn test_other_lengths_are_invalid() {
        assert_eq!(normalized("555"), INVALID_PHONE_NUMBER);
        assert_eq!(normalized("315.450.6000000"), INVALID_PHONE_NUMBER);
        assert_eq!(normalized("123456789012"), INVALID_PHONE_NUMBER);
        assert_eq!(normalized("no digits here"), INVALID_PHONE_NUMBER);
    }

    #[test]
    fn test_absent_or_empty_is_invalid() {
        assert!(!normalize_phone(None).is_valid());
        assert!(!normalize_phone(Some("")).is_valid());
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not part of the numbering plan.
        assert_eq!(normalized("٦١٥٤٣٨٥٠٠٠"), INVALID_PHONE_NUMBER);
    }

    #[test]
    fn test_idempotent() {
        for raw in ["6154385000", "1-615-438-5000", "garbage"] {
            let once = normalize_phone(Some(raw));
            let twice = normalize_phone(Some(once.as_str()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_result_is_always_ten_characters() {
        for raw in ["", "1", "6154385000", "16154385000", "26154385000", "x"] {
            assert_eq!(normalize_phone(Some(raw)).as_str().len(), 10);
        }
    }
}
