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

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

use crate::country::CountryRecord;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compiled form of every pattern a [`CountryRecord`] carries.
#[derive(Debug)]
pub struct CompiledPatterns {
    international: Regex,
    local: Vec<Regex>,
}

impl CompiledPatterns {
    pub fn international(&self) -> &Regex {
        &self.international
    }

    pub fn local(&self) -> &[Regex] {
        &self.local
    }
}

/// Lazily compiled patterns, one entry per pattern text.
///
/// Records are never used as keys: any record, in a table or not, only ever
/// reads the entries of its own pattern strings.
pub struct PatternIndex {
    cache: DashMap<String, Regex>,
}

impl PatternIndex {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Compiles all patterns of `record` without touching any cache.
    pub fn compile(record: &CountryRecord) -> Result<CompiledPatterns, InvalidRegexError> {
        let international = Regex::new(record.international_pattern())?;
        let local = record
            .local_patterns()
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CompiledPatterns { international, local })
    }

    /// Returns the cached regex for `pattern`, compiling it on first use.
    ///
    /// Concurrent first uses of the same pattern converge on one cached value:
    /// the compile runs under the map entry, and only a `Regex` handle leaves
    /// it.
    pub fn regex(&self, pattern: &str) -> Result<Regex, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| Regex::new(pattern))?;
        Ok(entry.value().clone())
    }

    /// All patterns of `record`, each one compiled at most once.
    pub fn compiled(&self, record: &CountryRecord) -> Result<CompiledPatterns, InvalidRegexError> {
        Ok(CompiledPatterns {
            international: self.compiled_international(record)?,
            local: self.compiled_local(record)?,
        })
    }

    pub fn compiled_international(&self, record: &CountryRecord) -> Result<Regex, InvalidRegexError> {
        self.regex(record.international_pattern())
    }

    pub fn compiled_local(&self, record: &CountryRecord) -> Result<Vec<Regex>, InvalidRegexError> {
        record
            .local_patterns()
            .iter()
            .map(|pattern| self.regex(pattern))
            .collect()
    }

    /// `true` if any local pattern of `record` matches `number`. Stops at the
    /// first match without collecting the compiled patterns.
    pub fn any_local_match(&self, record: &CountryRecord, number: &str) -> Result<bool, InvalidRegexError> {
        for pattern in record.local_patterns() {
            if self.regex(pattern)?.is_match(number) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of distinct compiled patterns.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for PatternIndex {
    fn default() -> Self {
        Self::new()
    }
}
