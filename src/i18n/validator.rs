//! Locale table coverage validation.
//!
//! Compares every locale in a table against a reference locale and reports
//! keys that are missing, extra, empty or malformed. The report is purely
//! diagnostic: lookups keep falling back to the key literal whatever it says.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::i18n::LocaleTable;

/// Coverage report containing errors and warnings about a locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Problems that will show up as raw keys in the UI
    pub errors: Vec<String>,

    /// Problems that do not affect what users see
    pub warnings: Vec<String>,
}

impl CoverageReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for CoverageReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale table coverage.
pub struct CoverageValidator;

// Dotted lowerCamel segments, e.g. "profile.japaneseLevel"
static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageValidator {
    /// Check `table` against the key set of `reference_locale`.
    ///
    /// - reference locale absent from the table: error
    /// - key of the reference missing in another locale: error
    /// - empty translation: error (it resolves to the key)
    /// - key only present in a non-reference locale: warning
    /// - key not in `section.name` form: warning
    pub fn validate(table: &LocaleTable, reference_locale: &str) -> CoverageReport {
        let mut report = CoverageReport::new();

        let Some(reference) = table.strings(reference_locale) else {
            report
                .errors
                .push(format!("Reference locale '{}' is missing", reference_locale));
            return report;
        };
        let reference_keys: BTreeSet<&str> = reference.keys().map(String::as_str).collect();

        for key in &reference_keys {
            if !Self::is_well_formed_key(key) {
                report.warnings.push(format!("Malformed key '{}'", key));
            }
        }

        for locale in table.locales() {
            let Some(strings) = table.strings(locale) else {
                continue;
            };
            let keys: BTreeSet<&str> = strings.keys().map(String::as_str).collect();

            if locale != reference_locale {
                let missing: Vec<_> = reference_keys.difference(&keys).collect();
                if !missing.is_empty() {
                    report.errors.push(format!(
                        "Locale '{}' is missing {} keys: {:?}",
                        locale,
                        missing.len(),
                        missing
                    ));
                }

                let extra: Vec<_> = keys.difference(&reference_keys).collect();
                if !extra.is_empty() {
                    report.warnings.push(format!(
                        "Locale '{}' has keys not in '{}': {:?}",
                        locale, reference_locale, extra
                    ));
                }
            }

            let mut empty: Vec<_> = strings
                .iter()
                .filter(|(_, text)| text.is_empty())
                .map(|(key, _)| key.as_str())
                .collect();
            if !empty.is_empty() {
                empty.sort_unstable();
                report.errors.push(format!(
                    "Locale '{}' has empty translations: {:?}",
                    locale, empty
                ));
            }
        }

        report
    }

    /// Whether a key has the `section.name` shape.
    pub fn is_well_formed_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[a-z][a-zA-Z0-9]*(\.[a-z][a-zA-Z0-9]*)+$").unwrap());
        regex.is_match(key)
    }
}
