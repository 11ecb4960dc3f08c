/**
 * Checks the shape of resources/countries.tsv so that a malformed row
 * breaks the build instead of the first lookup at runtime.
 */

use std::{collections::HashSet, fs::File, io::{BufRead, BufReader}, num::ParseIntError};

use thiserror::Error;

const TABLE_PATH: &str = "resources/countries.tsv";
/// iso, name, dial code, flag, priority, international pattern, first local pattern
const MIN_FIELDS: usize = 7;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Line {line_num} has {found} fields, at least {min} expected", min = MIN_FIELDS)]
    MissingFields { line_num: usize, found: usize },

    #[error("Line {line_num}: dial code '{dial_code}' is not '+' followed by digits")]
    InvalidDialCode { line_num: usize, dial_code: String },

    #[error("Line {line_num}: iso code '{iso_code}' appears twice")]
    DuplicateIsoCode { line_num: usize, iso_code: String },

    #[error("Failed to parse priority '{priority}': {source}")]
    PriorityParseError {
        priority: String,
        #[source]
        source: ParseIntError,
    },
}

fn check_table(path: &str) -> Result<usize, BuildError> {
    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut iso_codes = HashSet::new();

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(BuildError::MissingFields { line_num: line_number, found: fields.len() });
        }

        let dial_code = fields[2];
        let dial_digits = dial_code.strip_prefix('+').unwrap_or("");
        if dial_digits.is_empty() || !dial_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BuildError::InvalidDialCode {
                line_num: line_number,
                dial_code: dial_code.to_string(),
            });
        }

        fields[4].parse::<i32>().map_err(|e| BuildError::PriorityParseError {
            priority: fields[4].to_string(),
            source: e,
        })?;

        if !iso_codes.insert(fields[0].to_string()) {
            return Err(BuildError::DuplicateIsoCode {
                line_num: line_number,
                iso_code: fields[0].to_string(),
            });
        }
    }

    Ok(iso_codes.len())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed={}", TABLE_PATH);
    let rows = check_table(TABLE_PATH)?;
    if rows == 0 {
        println!("cargo:warning={} contains no countries", TABLE_PATH);
    }
    Ok(())
}
