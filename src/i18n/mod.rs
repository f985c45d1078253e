//! Internationalization (i18n) module.
//!
//! Resolves translation keys to display text for the selected locale. A key
//! with no translation resolves to itself, so gaps are visible in the running
//! UI instead of rendering blank.
//!
//! # Architecture
//!
//! - `registry`: metadata for the locales offered in the language picker
//! - `strings`: built-in strings for every shipped locale
//! - `table`: locale → key → text mapping, built-in or loaded from JSON
//! - `resolver`: owns the selected locale and performs lookups
//! - `validator`: coverage diagnostics for a table
//! - `metrics`: translated/fallback lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use hymatch_core::i18n::LocaleResolver;
//!
//! let mut resolver = LocaleResolver::builtin();
//! resolver.set_locale("en");
//! assert_eq!(resolver.resolve("profile.save"), "Save Profile");
//! assert_eq!(resolver.resolve("nonexistent.key"), "nonexistent.key");
//! ```

mod metrics;
mod registry;
mod resolver;
mod strings;
mod table;
mod validator;

pub use metrics::{MetricsReport, ResolverMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::LocaleResolver;
pub use table::LocaleTable;
pub use validator::{CoverageReport, CoverageValidator};
