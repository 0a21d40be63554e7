//! Field normalization for registrant records.
//!
//! Phone numbers and zip codes are reduced to a canonical form or to a fixed
//! sentinel. Normalization never fails, so cleaning a roster has no error path.

pub mod cleaner;
pub mod phone;
pub mod zipcode;

pub use cleaner::{clean, clean_all, clean_in_place};
pub use phone::{INVALID_PHONE_NUMBER, PhoneNumber, normalize_phone};
pub use zipcode::{INVALID_ZIPCODE, ZipCode, normalize_zipcode};
