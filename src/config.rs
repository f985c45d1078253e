use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::i18n::{LocaleRegistry, LocaleTable};

#[derive(Debug, Clone)]
pub struct Config {
    // Localization
    pub default_locale: String,
    pub locale_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Localization
            default_locale: std::env::var("HYMATCH_DEFAULT_LOCALE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| LocaleRegistry::get().default_locale().code.to_string()),
            locale_file: std::env::var("HYMATCH_LOCALE_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Load the locale table this configuration points at.
    ///
    /// Falls back to the built-in table when no file is configured.
    pub fn load_locale_table(&self) -> Result<LocaleTable> {
        match &self.locale_file {
            Some(path) => LocaleTable::from_json_file(path)
                .with_context(|| format!("Failed to load locale table from {}", path.display())),
            None => Ok(LocaleTable::builtin()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: LocaleRegistry::get().default_locale().code.to_string(),
            locale_file: None,
        }
    }
}
