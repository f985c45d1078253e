//! Lookup metrics for a locale resolver.
//!
//! Counts how many lookups were served from the table and how many fell back
//! to the key literal, so missing translations show up in numbers as well as
//! on screen.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a single resolver.
#[derive(Debug, Default)]
pub struct ResolverMetrics {
    /// Lookups answered with a translation
    translated: AtomicUsize,

    /// Lookups answered with the key itself
    fallbacks: AtomicUsize,

    /// Locale switches
    locale_switches: AtomicUsize,
}

/// Point-in-time snapshot of resolver metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub translated: usize,
    pub fallbacks: usize,
    pub locale_switches: usize,
    /// Share of lookups that fell back, in percent
    pub fallback_rate: f64,
}

impl ResolverMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_translated(&self) {
        self.translated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_switch(&self) {
        self.locale_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn translated(&self) -> usize {
        self.translated.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn locale_switches(&self) -> usize {
        self.locale_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let translated = self.translated();
        let fallbacks = self.fallbacks();
        let total = translated + fallbacks;
        let fallback_rate = if total > 0 {
            (fallbacks as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translated,
            fallbacks,
            locale_switches: self.locale_switches(),
            fallback_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.translated.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.locale_switches.store(0, Ordering::Relaxed);
    }
}

impl MetricsReport {
    /// One-line summary suitable for a log line.
    pub fn format(&self) -> String {
        format!(
            "lookups: {} translated, {} fallbacks ({:.1}% fallback), {} locale switches",
            self.translated, self.fallbacks, self.fallback_rate, self.locale_switches
        )
    }
}
