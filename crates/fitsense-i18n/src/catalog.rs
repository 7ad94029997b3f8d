//! String catalog keyed by [`Locale`].
//!
//! # Invariants
//!
//! 1. **No fallback**: a lookup only consults the requested locale. A key
//!    missing there yields `None`, even if the other locale has it.
//!
//! 2. **Empty is absent**: an entry whose value is the empty string is
//!    reported as missing, so callers never blank out an element.
//!
//! 3. **Thread safety**: `StringCatalog` is `Send + Sync` (all data is
//!    immutable after construction).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in the locale | Returns `None` |
//! | Missing locale | Locale never added | Returns `None` |
//! | Duplicate key | Same key twice in one table | `from_pairs` returns `DuplicateKey` |

use std::collections::HashMap;

use crate::locale::Locale;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale tag was not one of the supported tags.
    InvalidLocale(String),
    /// Duplicate key in the same locale.
    DuplicateKey { locale: Locale, key: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(l) => write!(f, "invalid locale: {l}"),
            Self::DuplicateKey { locale, key } => {
                write!(f, "duplicate key '{key}' in locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a literal table, rejecting keys that appear twice.
    pub fn from_pairs(locale: Locale, pairs: &[(&str, &str)]) -> Result<Self, I18nError> {
        let mut strings = HashMap::with_capacity(pairs.len());
        for &(key, value) in pairs {
            if strings.insert(key.to_string(), value.to_string()).is_some() {
                return Err(I18nError::DuplicateKey {
                    locale,
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { strings })
    }

    /// Insert a string, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key. Empty entries count as missing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all keys in this locale.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

/// Central string catalog, one [`LocaleStrings`] per [`Locale`].
///
/// # Example
///
/// ```
/// use fitsense_i18n::{Locale, LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
///
/// let mut en = LocaleStrings::new();
/// en.insert("inicio", "Home");
/// catalog.add_locale(Locale::En, en);
///
/// assert_eq!(catalog.get(Locale::En, "inicio"), Some("Home"));
/// assert_eq!(catalog.get(Locale::Es, "inicio"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the strings for a locale.
    pub fn add_locale(&mut self, locale: Locale, strings: LocaleStrings) {
        self.locales.insert(locale, strings);
    }

    /// Look up a string by key in exactly one locale.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.locales.get(&locale).and_then(|ls| ls.get(key))
    }

    /// All registered locales, in [`Locale::ALL`] order.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|l| self.locales.contains_key(l))
            .collect()
    }

    // -----------------------------------------------------------------
    // Extraction & Coverage
    // -----------------------------------------------------------------

    /// Collect all unique keys across every registered locale.
    ///
    /// The result is sorted for deterministic output.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .locales
            .values()
            .flat_map(|ls| ls.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Find keys from `reference_keys` that `locale` cannot translate.
    ///
    /// Returns the missing keys sorted alphabetically.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale, reference_keys: &[&str]) -> Vec<String> {
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| self.get(locale, key).is_none())
            .map(|key| (*key).to_string())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Generate a coverage report across all registered locales.
    ///
    /// Uses `all_keys()` as the reference set.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.all_keys();
        let ref_keys: Vec<&str> = all.iter().map(String::as_str).collect();
        let total = ref_keys.len();

        let locales = self
            .locales()
            .into_iter()
            .map(|locale| {
                let missing = self.missing_keys(locale, &ref_keys);
                let present = total.saturating_sub(missing.len());
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    (present as f32 / total as f32) * 100.0
                };
                LocaleCoverage {
                    locale,
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys: total,
            locales,
        }
    }
}

/// Coverage report for a string catalog.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    /// Total number of unique keys across all locales.
    pub total_keys: usize,
    /// Per-locale coverage data.
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Whether every locale translates every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing.is_empty())
    }
}

/// Per-locale coverage statistics.
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: Locale,
    /// Number of reference keys present.
    pub present: usize,
    /// Keys from the reference set that are missing.
    pub missing: Vec<String>,
    /// Coverage as a percentage (0.0–100.0).
    pub coverage_percent: f32,
}
