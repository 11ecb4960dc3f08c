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

/// Removes leading start-of-text anchors (`^` or `\A`) from a pattern
/// source, so the literal part that follows can be inspected.
pub fn strip_leading_anchors(pattern: &str) -> &str {
    let mut rest = pattern;
    loop {
        if let Some(stripped) = rest.strip_prefix('^') {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("\\A") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::strip_leading_anchors;

    #[test]
    fn strips_only_leading_anchors() {
        assert_eq!(strip_leading_anchors(r"^20\d{0,10}$"), r"20\d{0,10}$");
        assert_eq!(strip_leading_anchors(r"\A^7[67]"), "7[67]");
        assert_eq!(strip_leading_anchors("44"), "44");
        assert_eq!(strip_leading_anchors(""), "");
    }
}
