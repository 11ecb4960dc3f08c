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

use crate::{pattern_index::PatternIndex, regex_util::strip_leading_anchors};

use super::{
    CountryRecord,
    errors::{RecordError, TableError},
    helper_constants::{
        COMMENT_PREFIX, FIELD_SEPARATOR, ISO_CODE_LENGTH, MAX_LINE_LENGTH, MIN_FIELDS_PER_LINE,
        PLUS_SIGN,
    },
};

/// Parses tab separated country rows. Blank lines and `#` comments are
/// skipped; any other malformed line fails the whole load.
pub(super) fn parse_country_rows(source: &str) -> Result<Vec<CountryRecord>, TableError> {
    let mut records = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line_num = index + 1;
        if line.len() > MAX_LINE_LENGTH {
            return Err(TableError::LineTooLong {
                line_num,
                max_len: MAX_LINE_LENGTH,
            });
        }
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        records.push(parse_country_line(line, line_num)?);
    }
    Ok(records)
}

fn parse_country_line(line: &str, line_num: usize) -> Result<CountryRecord, TableError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS_PER_LINE {
        return Err(TableError::MalformedLine {
            line_num,
            reason: format!(
                "expected at least {} tab separated fields, found {}",
                MIN_FIELDS_PER_LINE,
                fields.len()
            ),
        });
    }

    let priority = fields[4]
        .trim()
        .parse::<i32>()
        .map_err(|source| TableError::InvalidPriority { line_num, source })?;

    let local_patterns = fields[6..]
        .iter()
        .filter(|pattern| !pattern.is_empty())
        .map(|pattern| pattern.to_string())
        .collect();

    Ok(CountryRecord::new(
        fields[0].trim(),
        fields[1].trim(),
        fields[2].trim(),
        fields[3].trim(),
        fields[5],
        local_patterns,
    )
    .with_priority(priority))
}

/// Checks every per-record invariant, compiling the patterns once to prove
/// they are valid expressions.
pub(super) fn check_record(record: &CountryRecord) -> Result<(), RecordError> {
    let iso_code = record.iso_code();
    if iso_code.len() != ISO_CODE_LENGTH || !iso_code.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(RecordError::InvalidIsoCode(iso_code.to_owned()));
    }
    if record.name().trim().is_empty() {
        return Err(RecordError::EmptyName { iso_code: iso_code.to_owned() });
    }
    if record.flag().is_empty() {
        return Err(RecordError::EmptyFlag(iso_code.to_owned()));
    }

    let dial_code_digits = record
        .dial_code()
        .strip_prefix(PLUS_SIGN)
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| RecordError::InvalidDialCode {
            iso_code: iso_code.to_owned(),
            dial_code: record.dial_code().to_owned(),
        })?;

    if !strip_leading_anchors(record.international_pattern()).starts_with(dial_code_digits) {
        return Err(RecordError::InternationalPatternPrefix {
            iso_code: iso_code.to_owned(),
            dial_code_digits: dial_code_digits.to_owned(),
        });
    }
    if record.local_patterns().is_empty() {
        return Err(RecordError::NoLocalPatterns(iso_code.to_owned()));
    }

    PatternIndex::compile(record).map_err(|source| RecordError::InvalidRegex {
        iso_code: iso_code.to_owned(),
        source,
    })?;
    Ok(())
}

/// Keys for the dial code index: `+44`, `44` and ` +44 ` all map to `44`.
pub(super) fn dial_code_key(dial_code: &str) -> &str {
    let trimmed = dial_code.trim();
    trimmed.strip_prefix(PLUS_SIGN).unwrap_or(trimmed)
}
