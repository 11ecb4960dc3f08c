mod interfaces;
mod pattern_index;
mod regex_based_matcher;
pub mod country;
pub mod field_state;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use country::{
    COUNTRY_TABLE, CountryDetector, CountryRecord, CountryTable, Detection, DetectionMode,
    PHONE_VALIDATOR, PhoneValidator,
    errors::{RecordError, TableError},
};
pub use field_state::{FieldConfig, FieldSnapshot, FieldState, ValidatorFn};
pub use interfaces::MatcherApi;
pub use pattern_index::{CompiledPatterns, InvalidRegexError, PatternIndex};
pub use regex_based_matcher::RegexBasedMatcher;
pub use string_util::{clean_international, clean_local};

/// Most likely country of `text`, see [`CountryDetector::detect`].
pub fn detect_country(text: &str) -> Option<&'static CountryRecord> {
    PHONE_VALIDATOR.detect_country(text)
}

pub fn detect_all_matches(text: &str) -> Vec<&'static CountryRecord> {
    PHONE_VALIDATOR.detect_all_matches(text)
}

pub fn validate_international(text: &str) -> bool {
    PHONE_VALIDATOR.validate_international(text)
}

pub fn validate_local(text: &str, country: &CountryRecord) -> bool {
    PHONE_VALIDATOR.validate_local(text, country)
}

pub fn format_international(text: &str) -> String {
    PHONE_VALIDATOR.format_international(text)
}

pub fn get_country_by_code(iso_code: &str) -> Option<&'static CountryRecord> {
    PHONE_VALIDATOR.by_iso_code(iso_code)
}

pub fn get_country_by_name(name: &str) -> Option<&'static CountryRecord> {
    PHONE_VALIDATOR.by_name(name)
}

pub fn get_countries_by_dial_code(dial_code: &str) -> Vec<&'static CountryRecord> {
    PHONE_VALIDATOR.by_dial_code(dial_code)
}

pub fn all_countries() -> &'static [CountryRecord] {
    COUNTRY_TABLE.all()
}
