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


use log::error;

use crate::{country::CountryRecord, interfaces, pattern_index::PatternIndex};

pub struct RegexBasedMatcher {
    index: PatternIndex,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { index: PatternIndex::with_capacity(1024) }
    }

    pub fn index(&self) -> &PatternIndex {
        &self.index
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_international(&self, digits: &str, country: &CountryRecord) -> bool {
        // An empty digit string never selects a country, even if a pattern
        // would accept it.
        if digits.is_empty() {
            return false;
        }
        match self.index.compiled_international(country) {
            Ok(regex) => regex.is_match(digits),
            Err(err) => {
                error!("Invalid regex for {}! {}", country.iso_code(), err);
                false
            }
        }
    }

    fn match_local(&self, number: &str, country: &CountryRecord) -> bool {
        if number.is_empty() {
            return false;
        }
        match self.index.any_local_match(country, number) {
            Ok(matched) => matched,
            Err(err) => {
                error!("Invalid regex for {}! {}", country.iso_code(), err);
                false
            }
        }
    }
}
