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

use std::borrow::Cow;

use dec_from_char::DecimalExtended;

use crate::country::helper_constants::LOCAL_SEPARATORS;

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

fn is_non_ascii_decimal(c: char) -> bool {
    !c.is_ascii_digit() && c.is_decimal_utf8()
}

fn is_local_separator(c: char) -> bool {
    c.is_whitespace() || LOCAL_SEPARATORS.contains(c)
}

fn push_ascii_decimal(out: &mut String, c: char) {
    if is_non_ascii_decimal(c) {
        let mut buf = [0u8; 4];
        out.extend(dec_from_char::normalize_decimals(&*c.encode_utf8(&mut buf)).chars());
    } else {
        out.push(c);
    }
}

/// Keeps only the digits of `raw`, `+` included in the removed set.
/// Unicode decimal digits (full-width, Arabic-Indic, ...) are converted to
/// their ASCII form first.
///
/// Input made of ASCII digits only is returned borrowed, which makes the
/// function idempotent without allocating.
pub fn clean_international(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }
    let mut digits = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| c.is_ascii_digit() || c.is_decimal_utf8()) {
        push_ascii_decimal(&mut digits, c);
    }
    digits.retain(|c| c.is_ascii_digit());
    Cow::Owned(digits)
}

/// Removes whitespace, dashes and parentheses and nothing else: a leading
/// trunk prefix or `+` stays where it is.
pub fn clean_local(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(|c| is_local_separator(c) || is_non_ascii_decimal(c)) {
        return Cow::Borrowed(raw);
    }
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !is_local_separator(*c)) {
        push_ascii_decimal(&mut cleaned, c);
    }
    Cow::Owned(cleaned)
}
