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

use std::cmp::Reverse;

use log::trace;

use crate::{
    interfaces::MatcherApi,
    regex_based_matcher::RegexBasedMatcher,
    string_util::{clean_international, clean_local},
};

use super::{CountryRecord, CountryTable, Detection, DetectionMode};

/// Classifies raw, partially typed phone numbers into countries.
///
/// The international pass runs first; local patterns are only tried when no
/// international pattern matches. A local-looking number that also satisfies
/// another country's international pattern is reported as that other country.
pub struct CountryDetector<'a> {
    table: &'a CountryTable,

    /// An API for pattern checks.
    matcher_api: Box<dyn MatcherApi>,

    /// Positions in `table`, by descending priority. Equal priorities keep
    /// table order.
    priority_order: Vec<usize>,
}

impl<'a> CountryDetector<'a> {
    pub fn new(table: &'a CountryTable) -> Self {
        Self::with_matcher(table, Box::new(RegexBasedMatcher::new()))
    }

    pub fn with_matcher(table: &'a CountryTable, matcher_api: Box<dyn MatcherApi>) -> Self {
        let mut priority_order: Vec<usize> = (0..table.len()).collect();
        // `sort_by_key` is stable, which keeps table order among equals.
        priority_order.sort_by_key(|&position| Reverse(table.all()[position].priority()));
        Self {
            table,
            matcher_api,
            priority_order,
        }
    }

    pub fn table(&self) -> &'a CountryTable {
        self.table
    }

    pub(crate) fn matcher(&self) -> &dyn MatcherApi {
        self.matcher_api.as_ref()
    }

    /// Countries in the order they are tried.
    pub fn by_priority(&self) -> impl Iterator<Item = &'a CountryRecord> + '_ {
        let countries = self.table.all();
        self.priority_order.iter().map(move |&position| &countries[position])
    }

    pub fn detect(&self, raw: &str) -> Option<&'a CountryRecord> {
        self.detect_with_mode(raw).map(|detection| detection.country)
    }

    /// Like [`detect`](Self::detect), also telling which pass matched.
    pub fn detect_with_mode(&self, raw: &str) -> Option<Detection<'a>> {
        let digits = clean_international(raw);
        if digits.is_empty() {
            return None;
        }

        if let Some(country) = self
            .by_priority()
            .find(|country| self.matcher_api.match_international(&digits, country))
        {
            trace!("{} matched {} internationally", digits, country.iso_code());
            return Some(Detection { country, mode: DetectionMode::International });
        }

        let local = clean_local(raw.trim());
        let found = self
            .by_priority()
            .find(|country| self.matcher_api.match_local(&local, country))
            .map(|country| {
                trace!("{} matched {} locally", local, country.iso_code());
                Detection { country, mode: DetectionMode::Local }
            });
        if found.is_none() {
            trace!("No country found for {}", raw);
        }
        found
    }

    /// Every country whose international pattern matches, by descending
    /// priority. Used when a caller has to offer a choice (a NANP number
    /// without a specific area code, for example) instead of committing to
    /// one answer.
    pub fn detect_all_matches(&self, raw: &str) -> Vec<&'a CountryRecord> {
        let digits = clean_international(raw);
        if digits.is_empty() {
            return Vec::new();
        }
        self.by_priority()
            .filter(|country| self.matcher_api.match_international(&digits, country))
            .collect()
    }
}
