//! Locale table: locale identifier → (translation key → display text).
//!
//! The table is read-only once built. It imposes no schema beyond
//! "a map of locales to string-keyed string maps", so an external JSON asset
//! such as `{"en": {"profile.save": "Save Profile"}}` loads directly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::i18n::strings::BUILTIN_LOCALES;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    locales: HashMap<String, HashMap<String, String>>,
}

impl LocaleTable {
    /// The table shipped with the app (ja, en, uz).
    pub fn builtin() -> Self {
        let locales = BUILTIN_LOCALES
            .iter()
            .map(|(locale, entries)| {
                let strings = entries
                    .iter()
                    .map(|(key, text)| (key.to_string(), text.to_string()))
                    .collect();
                (locale.to_string(), strings)
            })
            .collect();

        Self { locales }
    }

    /// Parse a table from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid locale table JSON")
    }

    /// Read and parse a JSON table from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Look up a key within one locale. `None` when either is absent.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale identifiers present in the table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<_> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// The key → text map for one locale.
    pub fn strings(&self, locale: &str) -> Option<&HashMap<String, String>> {
        self.locales.get(locale)
    }
}

impl<L, K, V> FromIterator<(L, K, V)> for LocaleTable
where
    L: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, K, V)>>(iter: I) -> Self {
        let mut locales: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (locale, key, text) in iter {
            locales
                .entry(locale.into())
                .or_default()
                .insert(key.into(), text.into());
        }
        Self { locales }
    }
}
