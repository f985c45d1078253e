//! Locale resolver: the selected locale plus key lookup with key-literal fallback.
//!
//! One resolver instance owns the "current locale" for the whole app. It is
//! created at startup with a default and lives as long as the app does.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::i18n::{LocaleRegistry, LocaleTable, MetricsReport, ResolverMetrics};

#[derive(Debug)]
pub struct LocaleResolver {
    table: Arc<LocaleTable>,
    locale: String,
    metrics: ResolverMetrics,
}

impl LocaleResolver {
    /// Create a resolver over `table` starting in `locale`.
    pub fn new(table: impl Into<Arc<LocaleTable>>, locale: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            locale: locale.into(),
            metrics: ResolverMetrics::new(),
        }
    }

    /// Resolver over the built-in table, starting in the registry's default locale.
    pub fn builtin() -> Self {
        Self::new(
            LocaleTable::builtin(),
            LocaleRegistry::get().default_locale().code,
        )
    }

    /// Switch the locale used by subsequent `resolve` calls.
    ///
    /// Any identifier is accepted. One the table does not know makes every
    /// later lookup fall back to the key itself.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if !self.table.has_locale(&locale) {
            warn!("Locale '{}' has no strings, lookups will return keys", locale);
        }
        info!("Locale changed from '{}' to '{}'", self.locale, locale);
        self.locale = locale;
        self.metrics.record_locale_switch();
    }

    /// The currently selected locale identifier.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Text for `key` in the current locale, or `key` itself when there is none.
    ///
    /// Never falls back to another locale. An empty translation counts as missing.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.lookup(&self.locale, key) {
            Some(text) if !text.is_empty() => {
                self.metrics.record_translated();
                text
            }
            _ => {
                debug!("No '{}' translation for key '{}'", self.locale, key);
                self.metrics.record_fallback();
                key
            }
        }
    }

    /// Whether `key` has a non-empty translation in the current locale.
    pub fn has_key(&self, key: &str) -> bool {
        self.table
            .lookup(&self.locale, key)
            .is_some_and(|text| !text.is_empty())
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::builtin()
    }
}
