// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use crate::string_util::{clean_international, clean_local, strip_cow_prefix};

use super::{
    CountryDetector, CountryRecord, CountryTable, Detection, helper_constants::PLUS_SIGN,
};

/// Validation, formatting and lookup surface on top of [`CountryDetector`].
///
/// Every method is total: bad input gives `false`, `None`, an empty list or
/// the input back, never an error.
pub struct PhoneValidator<'a> {
    detector: CountryDetector<'a>,
}

impl<'a> PhoneValidator<'a> {
    pub fn new(table: &'a CountryTable) -> Self {
        Self { detector: CountryDetector::new(table) }
    }

    pub fn with_detector(detector: CountryDetector<'a>) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &CountryDetector<'a> {
        &self.detector
    }

    pub fn table(&self) -> &'a CountryTable {
        self.detector.table()
    }

    pub fn all_countries(&self) -> &'a [CountryRecord] {
        self.table().all()
    }

    pub fn detect_country(&self, raw: &str) -> Option<&'a CountryRecord> {
        self.detector.detect(raw)
    }

    pub fn detect_with_mode(&self, raw: &str) -> Option<Detection<'a>> {
        self.detector.detect_with_mode(raw)
    }

    pub fn detect_all_matches(&self, raw: &str) -> Vec<&'a CountryRecord> {
        self.detector.detect_all_matches(raw)
    }

    /// Detects the country of `raw`, strips its dial code from the digits and
    /// checks what is left against the country's local patterns.
    pub fn validate_international(&self, raw: &str) -> bool {
        match self.detector.detect(raw) {
            Some(country) => self.validate_international_for(raw, country),
            None => false,
        }
    }

    /// `true` if `local_number`, once separators are removed, matches any of
    /// the local patterns of `country`.
    pub fn validate_local(&self, local_number: &str, country: &CountryRecord) -> bool {
        let local_number = clean_local(local_number.trim());
        self.detector.matcher().match_local(&local_number, country)
    }

    /// Validation as a phone field needs it: with a selected country, input
    /// typed with `+` must carry that country's dial code, anything else is
    /// taken as a local number. Without a country the number has to be
    /// recognisable internationally.
    pub fn validate(&self, raw: &str, country: Option<&CountryRecord>) -> bool {
        match country {
            Some(country) if raw.trim_start().starts_with(PLUS_SIGN) => {
                self.validate_international_for(raw, country)
            }
            Some(country) => self.validate_local(raw, country),
            None => self.validate_international(raw),
        }
    }

    /// Validation with a caller supplied strategy. The strategy receives the
    /// raw input and the selected (or else detected) country; no country
    /// means invalid.
    pub fn validate_with<F>(&self, raw: &str, country: Option<&CountryRecord>, strategy: F) -> bool
    where
        F: Fn(&str, &CountryRecord) -> bool,
    {
        match country.or_else(|| self.detector.detect(raw)) {
            Some(country) => strategy(raw, country),
            None => false,
        }
    }

    fn validate_international_for(&self, raw: &str, country: &CountryRecord) -> bool {
        let digits = clean_international(raw);
        match strip_cow_prefix(digits, country.dial_code_digits()) {
            Some(national_number) => self.validate_local(&national_number, country),
            None => {
                trace!("{} does not start with dial code {}", raw, country.dial_code());
                false
            }
        }
    }

    /// `+` followed by the digits of `raw` when a country is detected, `raw`
    /// unchanged otherwise.
    pub fn format_international(&self, raw: &str) -> String {
        self.format_international_with(raw, |digits, _| fast_cat::concat_str!(PLUS_SIGN, digits))
    }

    /// Like [`format_international`](Self::format_international) with a
    /// caller supplied formatter, called with the cleaned digits and the
    /// detected country.
    pub fn format_international_with<F>(&self, raw: &str, formatter: F) -> String
    where
        F: Fn(&str, &CountryRecord) -> String,
    {
        match self.detector.detect(raw) {
            Some(country) => formatter(&clean_international(raw), country),
            None => raw.to_owned(),
        }
    }

    /// Prepends the dial code of `country` to a local number. Input already
    /// written with `+` is only reduced to `+` and its digits.
    pub fn format_with_dial_code(&self, local_number: &str, country: &CountryRecord) -> String {
        let trimmed = local_number.trim();
        if trimmed.starts_with(PLUS_SIGN) {
            let digits = clean_international(trimmed);
            return fast_cat::concat_str!(PLUS_SIGN, &*digits);
        }
        let local_number = clean_local(trimmed);
        fast_cat::concat_str!(country.dial_code(), " ", &*local_number)
    }

    pub fn by_iso_code(&self, iso_code: &str) -> Option<&'a CountryRecord> {
        self.table().by_iso_code(iso_code)
    }

    pub fn by_name(&self, name: &str) -> Option<&'a CountryRecord> {
        self.table().by_name(name)
    }

    pub fn by_dial_code(&self, dial_code: &str) -> Vec<&'a CountryRecord> {
        self.table().by_dial_code(dial_code)
    }

    pub fn is_shared_dial_code(&self, dial_code: &str) -> bool {
        self.table().is_shared_dial_code(dial_code)
    }

    pub fn related_by_dial_code(&self, country: &CountryRecord) -> Vec<&'a CountryRecord> {
        self.table().related_by_dial_code(country)
    }
}
