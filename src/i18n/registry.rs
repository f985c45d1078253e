//! Locale registry: static metadata for the locales the app ships with.
//!
//! The registry describes what a language picker can offer. It does not gate
//! `LocaleResolver::set_locale`; selecting an identifier that is not listed
//! here is legal and simply resolves every key to itself.

use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale identifier as used in the locale table (e.g., "ja", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese", "Uzbek")
    pub name: &'static str,

    /// Native name of the language (e.g., "日本語", "O'zbek")
    pub native_name: &'static str,

    /// Whether this is the startup locale (exactly one should be true)
    pub is_default: bool,
}

/// Registry of supported locales, initialized once and immutable thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: supported_locales(),
        })
    }

    /// Get a locale configuration by its identifier.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in picker order.
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The startup locale.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one default locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check whether an identifier names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn supported_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
        LocaleConfig {
            code: "uz",
            name: "Uzbek",
            native_name: "O'zbek",
            is_default: false,
        },
    ]
}
