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

use std::{cmp::Ordering, collections::HashMap};

use log::{trace, warn};

use super::{
    CountryRecord,
    errors::TableError,
    helper_constants::COUNTRY_TABLE_TSV,
    helper_functions::{check_record, dial_code_key, parse_country_rows},
};

pub type Result<T> = std::result::Result<T, TableError>;

/// The immutable country reference table together with its lookup indexes.
///
/// All indexes are built once, in [`CountryTable::new`], and never change
/// afterwards.
#[derive(Debug)]
pub struct CountryTable {
    countries: Vec<CountryRecord>,

    /// Uppercased iso code -> position in `countries`.
    by_iso_code: HashMap<String, usize>,

    /// Lowercased name -> position in `countries`.
    by_name: HashMap<String, usize>,

    /// Dial code digits (no `+`) -> positions in `countries`, in table
    /// order. Regions under NANPA share `1`, Russia and Kazakhstan share `7`.
    by_dial_code: HashMap<String, Vec<usize>>,
}

impl CountryTable {
    /// Builds a table, rejecting the first record that breaks an invariant
    /// or collides with an earlier record on iso code or name.
    pub fn new(countries: Vec<CountryRecord>) -> Result<Self> {
        let mut by_iso_code = HashMap::with_capacity(countries.len());
        let mut by_name = HashMap::with_capacity(countries.len());
        let mut by_dial_code: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, record) in countries.iter().enumerate() {
            check_record(record)?;

            if by_iso_code.insert(record.iso_code().to_owned(), position).is_some() {
                return Err(TableError::DuplicateIsoCode(record.iso_code().to_owned()));
            }
            if by_name.insert(record.name().to_lowercase(), position).is_some() {
                return Err(TableError::DuplicateName(record.name().to_owned()));
            }
            by_dial_code
                .entry(record.dial_code_digits().to_owned())
                .or_default()
                .push(position);
        }

        trace!("Country table built with {} countries", countries.len());
        Ok(Self {
            countries,
            by_iso_code,
            by_name,
            by_dial_code,
        })
    }

    /// Parses tab separated rows (see `resources/countries.tsv`) and builds a
    /// table from them.
    pub fn from_tsv(source: &str) -> Result<Self> {
        Self::new(parse_country_rows(source)?)
    }

    /// The table compiled into the crate.
    pub fn load_embedded() -> Result<Self> {
        Self::from_tsv(COUNTRY_TABLE_TSV)
    }

    /// Read-only snapshot, in table order.
    pub fn all(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn by_iso_code(&self, iso_code: &str) -> Option<&CountryRecord> {
        self.by_iso_code
            .get(&iso_code.to_ascii_uppercase())
            .map(|&position| &self.countries[position])
            .or_else(|| {
                warn!("Invalid or unknown iso code provided: {}", iso_code);
                None
            })
    }

    pub fn by_name(&self, name: &str) -> Option<&CountryRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&position| &self.countries[position])
    }

    /// All countries using `dial_code`, which may be given with or without
    /// its leading `+`. Table order.
    pub fn by_dial_code(&self, dial_code: &str) -> Vec<&CountryRecord> {
        self.by_dial_code
            .get(dial_code_key(dial_code))
            .map(|positions| positions.iter().map(|&p| &self.countries[p]).collect())
            .unwrap_or_default()
    }

    pub fn is_shared_dial_code(&self, dial_code: &str) -> bool {
        self.by_dial_code
            .get(dial_code_key(dial_code))
            .is_some_and(|positions| positions.len() > 1)
    }

    /// Other countries sharing the dial code of `country`; `country` itself
    /// is left out.
    pub fn related_by_dial_code(&self, country: &CountryRecord) -> Vec<&CountryRecord> {
        self.by_dial_code(country.dial_code())
            .into_iter()
            .filter(|other| other.iso_code() != country.iso_code())
            .collect()
    }

    /// Distinct dial codes, in order of first appearance.
    pub fn dial_codes(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.countries
            .iter()
            .map(|country| country.dial_code())
            .filter(|dial_code| seen.insert(*dial_code))
            .collect()
    }

    /// Case-insensitive substring search over names, iso codes and dial
    /// codes, as used by a country picker. An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&CountryRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.countries.iter().collect();
        }
        let dial_query = dial_code_key(&query);
        self.filtered(|country| {
            country.name().to_lowercase().contains(&query)
                || country.iso_code().eq_ignore_ascii_case(&query)
                || (!dial_query.is_empty()
                    && dial_query.bytes().all(|b| b.is_ascii_digit())
                    && country.dial_code_digits().starts_with(dial_query))
        })
    }

    /// Countries accepted by `predicate`, in table order.
    pub fn filtered<F>(&self, predicate: F) -> Vec<&CountryRecord>
    where
        F: Fn(&CountryRecord) -> bool,
    {
        self.countries.iter().filter(|country| predicate(country)).collect()
    }

    /// All countries ordered by `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, mut compare: F) -> Vec<&CountryRecord>
    where
        F: FnMut(&CountryRecord, &CountryRecord) -> Ordering,
    {
        let mut countries: Vec<&CountryRecord> = self.countries.iter().collect();
        countries.sort_by(|a, b| compare(a, b));
        countries
    }

    pub fn sorted_by_name(&self) -> Vec<&CountryRecord> {
        self.sorted_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    }
}
