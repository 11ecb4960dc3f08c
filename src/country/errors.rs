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

use std::num::ParseIntError;

use thiserror::Error;

use crate::pattern_index::InvalidRegexError;

/// Data-integrity failures found while building a [`CountryTable`](super::CountryTable).
///
/// Query functions never return these: they are only produced by table
/// construction, which is expected to abort.
#[derive(Debug, PartialEq, Error)]
pub enum TableError {
    #[error("Line {line_num}: {reason}")]
    MalformedLine { line_num: usize, reason: String },

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num}: failed to parse priority: {source}")]
    InvalidPriority {
        line_num: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("{0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Iso code {0} is used by more than one country")]
    DuplicateIsoCode(String),

    #[error("Name '{0}' is used by more than one country")]
    DuplicateName(String),
}

/// A single record violating the table invariants.
#[derive(Debug, PartialEq, Error)]
pub enum RecordError {
    #[error("Country name must not be empty (iso code '{iso_code}')")]
    EmptyName { iso_code: String },

    #[error("Iso code '{0}' must be two uppercase ASCII letters")]
    InvalidIsoCode(String),

    #[error("Dial code '{dial_code}' of {iso_code} must be '+' followed by digits")]
    InvalidDialCode { iso_code: String, dial_code: String },

    #[error("Flag of {0} must not be empty")]
    EmptyFlag(String),

    #[error("{0} must have at least one local pattern")]
    NoLocalPatterns(String),

    #[error("International pattern of {iso_code} must start with its dial code digits {dial_code_digits}")]
    InternationalPatternPrefix { iso_code: String, dial_code_digits: String },

    #[error("Pattern of {iso_code} does not compile: {source}")]
    InvalidRegex {
        iso_code: String,
        #[source]
        source: InvalidRegexError,
    },
}
