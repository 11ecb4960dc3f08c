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

use log::trace;

use crate::country::{CountryRecord, PHONE_VALIDATOR, PhoneValidator};

/// Custom validation strategy: raw text and current country in, validity out.
pub type ValidatorFn = Box<dyn Fn(&str, Option<&CountryRecord>) -> bool + Send + Sync>;

pub type Listener<'a> = Box<dyn FnMut(&FieldSnapshot<'a>) + Send + 'a>;

/// How a [`FieldState`] behaves. The message text belongs to the UI; the
/// engine only decides when it applies.
pub struct FieldConfig {
    /// Re-detect the country on every text change.
    pub auto_detect: bool,
    /// Iso code of the country selected before anything is typed.
    pub initial_country: Option<String>,
    /// Shown while the text is non-empty and invalid.
    pub invalid_message: Option<String>,
    /// Replaces [`PhoneValidator::validate`] when set.
    pub validator: Option<ValidatorFn>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            auto_detect: true,
            initial_country: None,
            invalid_message: None,
            validator: None,
        }
    }
}

/// Everything a listener observes after one update.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot<'a> {
    pub text: String,
    pub country: Option<&'a CountryRecord>,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

/// State behind one phone input field.
///
/// Each mutation detects, then validates, then notifies listeners once, all
/// under `&mut self`: a listener never sees new text with stale validity.
/// Hosts sharing a field between threads wrap it in their own lock.
pub struct FieldState<'a> {
    validator: &'a PhoneValidator<'a>,
    config: FieldConfig,
    initial_country: Option<&'a CountryRecord>,
    text: String,
    country: Option<&'a CountryRecord>,
    is_valid: bool,
    error_message: Option<String>,
    listeners: Vec<Listener<'a>>,
}

impl FieldState<'static> {
    /// A field over the compiled-in country table.
    pub fn new(config: FieldConfig) -> Self {
        FieldState::with_validator(&PHONE_VALIDATOR, config)
    }
}

impl<'a> FieldState<'a> {
    pub fn with_validator(validator: &'a PhoneValidator<'a>, config: FieldConfig) -> Self {
        let initial_country = config
            .initial_country
            .as_deref()
            .and_then(|iso_code| validator.by_iso_code(iso_code));
        Self {
            validator,
            config,
            initial_country,
            text: String::new(),
            country: initial_country,
            is_valid: false,
            error_message: None,
            listeners: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn country(&self) -> Option<&'a CountryRecord> {
        self.country
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn snapshot(&self) -> FieldSnapshot<'a> {
        FieldSnapshot {
            text: self.text.clone(),
            country: self.country,
            is_valid: self.is_valid,
            error_message: self.error_message.clone(),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FieldSnapshot<'a>) + Send + 'a,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the text. With auto-detection on, a detected country replaces
    /// the current one; when nothing is detected the current one is kept.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.config.auto_detect {
            if let Some(country) = self.validator.detect_country(&self.text) {
                trace!("Field country set to {} from text", country.iso_code());
                self.country = Some(country);
            }
        }
        self.revalidate();
        self.notify();
    }

    pub fn set_country(&mut self, country: Option<&'a CountryRecord>) {
        self.country = country;
        self.revalidate();
        self.notify();
    }

    /// Recomputes validity and the error message, and returns the validity.
    pub fn validate(&mut self) -> bool {
        self.revalidate();
        self.notify();
        self.is_valid
    }

    /// Empties the field. With auto-detection on, the country goes back to
    /// the initial one.
    pub fn clear(&mut self) {
        self.text.clear();
        if self.config.auto_detect {
            self.country = self.initial_country;
        }
        self.is_valid = false;
        self.error_message = None;
        self.notify();
    }

    fn revalidate(&mut self) {
        if self.text.trim().is_empty() {
            // Nothing typed yet: invalid, but nothing to complain about.
            self.is_valid = false;
            self.error_message = None;
            return;
        }
        self.is_valid = match &self.config.validator {
            Some(validator) => validator(&self.text, self.country),
            None => self.validator.validate(&self.text, self.country),
        };
        self.error_message = if self.is_valid {
            None
        } else {
            self.config.invalid_message.clone()
        };
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::country::CountryRecord;

    use super::{FieldConfig, FieldSnapshot, FieldState};

    fn recorded(field: &mut FieldState<'static>) -> Arc<Mutex<Vec<FieldSnapshot<'static>>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        field.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));
        seen
    }

    #[test]
    fn text_change_detects_then_validates_then_notifies() {
        let mut field = FieldState::new(FieldConfig {
            invalid_message: Some("Invalid phone number".to_owned()),
            ..FieldConfig::default()
        });
        let seen = recorded(&mut field);

        field.set_text("+20 101");
        field.set_text("+20 101 234 5678");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);

        assert_eq!(seen[0].text, "+20 101");
        assert_eq!(seen[0].country.map(|c| c.iso_code()), Some("EG"));
        assert!(!seen[0].is_valid);
        assert_eq!(seen[0].error_message.as_deref(), Some("Invalid phone number"));

        assert_eq!(seen[1].text, "+20 101 234 5678");
        assert_eq!(seen[1].country.map(|c| c.iso_code()), Some("EG"));
        assert!(seen[1].is_valid);
        assert_eq!(seen[1].error_message, None);
    }

    #[test]
    fn selected_country_validates_local_numbers() {
        let mut field = FieldState::new(FieldConfig {
            auto_detect: false,
            initial_country: Some("gb".to_owned()),
            ..FieldConfig::default()
        });
        assert_eq!(field.country().map(|c| c.iso_code()), Some("GB"));

        field.set_text("07700 900123");
        assert_eq!(field.country().map(|c| c.iso_code()), Some("GB"));
        assert!(field.is_valid());

        field.set_text("+20 101 234 5678");
        // Auto-detection is off and the dial code is not the United Kingdom's.
        assert_eq!(field.country().map(|c| c.iso_code()), Some("GB"));
        assert!(!field.is_valid());
    }

    #[test]
    fn undetectable_text_keeps_country() {
        let mut field = FieldState::new(FieldConfig {
            initial_country: Some("EG".to_owned()),
            ..FieldConfig::default()
        });
        field.set_text("+");
        assert_eq!(field.country().map(|c| c.iso_code()), Some("EG"));
        assert!(!field.is_valid());
    }

    #[test]
    fn set_country_revalidates() {
        let mut field = FieldState::new(FieldConfig { auto_detect: false, ..FieldConfig::default() });
        let seen = recorded(&mut field);

        field.set_text("1012345678");
        // No country: the number must be recognisable internationally.
        assert!(!field.is_valid());

        let egypt = crate::get_country_by_code("EG");
        field.set_country(egypt);
        assert!(field.is_valid());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_valid);
    }

    #[test]
    fn clear_and_empty_text() {
        let mut field = FieldState::new(FieldConfig {
            invalid_message: Some("Invalid phone number".to_owned()),
            ..FieldConfig::default()
        });
        field.set_text("+7 999 123 45 67");
        assert_eq!(field.country().map(|c| c.iso_code()), Some("RU"));
        assert!(field.is_valid());

        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.country(), None);
        assert!(!field.is_valid());
        assert_eq!(field.error_message(), None);

        field.set_text("   ");
        assert!(!field.validate());
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn custom_validator() {
        let mut field = FieldState::new(FieldConfig {
            validator: Some(Box::new(|text: &str, country: Option<&CountryRecord>| {
                country.is_some() && text.chars().filter(|c| c.is_ascii_digit()).count() >= 5
            })),
            ..FieldConfig::default()
        });
        field.set_text("+20 1");
        assert!(!field.is_valid());
        field.set_text("+20 123");
        assert!(field.is_valid());
    }
}
