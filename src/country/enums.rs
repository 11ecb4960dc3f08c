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

use strum::{Display, EnumIter};

use super::CountryRecord;

/// Which detection pass recognised a number.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionMode {
    /// **International pass.**
    /// The digits, dial code included, matched a country's international
    /// pattern. Example: `+20 101 234 5678` for Egypt.
    International,
    /// **Local pass.**
    /// No international pattern matched, but the number as typed (trunk
    /// prefix kept) matched a country's local pattern. Example: `8 999
    /// 123-45-67` for Russia.
    Local,
}

/// Outcome of a successful detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection<'a> {
    pub country: &'a CountryRecord,
    pub mode: DetectionMode,
}
