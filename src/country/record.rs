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

use std::fmt;

use super::helper_constants::{DEFAULT_PRIORITY, PLUS_SIGN};

/// One row of the country reference table.
///
/// Records are immutable once built. Whether a record is consistent (ISO
/// code shape, dial code shape, compiling patterns...) is checked when it is
/// put into a [`CountryTable`](super::CountryTable), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    iso_code: String,
    name: String,
    dial_code: String,
    flag: String,
    international_pattern: String,
    local_patterns: Vec<String>,
    priority: i32,
}

impl CountryRecord {
    pub fn new(
        iso_code: impl Into<String>,
        name: impl Into<String>,
        dial_code: impl Into<String>,
        flag: impl Into<String>,
        international_pattern: impl Into<String>,
        local_patterns: Vec<String>,
    ) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            dial_code: dial_code.into(),
            flag: flag.into(),
            international_pattern: international_pattern.into(),
            local_patterns,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the tie-break weight used when several countries share a dial
    /// code. Higher wins.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dial code with its leading `+`, e.g. `+20`.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Dial code without the leading `+`, e.g. `20`.
    pub fn dial_code_digits(&self) -> &str {
        self.dial_code.strip_prefix(PLUS_SIGN).unwrap_or(&self.dial_code)
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Expression matched against the full digit string, dial code included.
    pub fn international_pattern(&self) -> &str {
        &self.international_pattern
    }

    /// Expressions matched against the subscriber number alone. A number is
    /// valid locally if any of them matches.
    pub fn local_patterns(&self) -> &[String] {
        &self.local_patterns
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.flag, self.name, self.dial_code)
    }
}
