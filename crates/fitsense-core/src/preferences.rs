//! Persistent user preferences over a browser-style key/value store.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | No storage | Disabled or blocked by the browser | Loads absent, saves dropped |
//! | Read throws | Backend error | `warn!`, treated as absent |
//! | Write throws | Quota, privacy mode | `warn!`, value kept in memory only |
//!
//! None of these reach the caller: the page always works from in-memory
//! defaults.

use std::fmt;

use tracing::{debug, warn};

/// Errors a [`Storage`] backend may report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend exists but refuses all access.
    Unavailable,
    /// A single operation was rejected.
    Rejected { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("storage unavailable"),
            Self::Rejected { key, reason } => write!(f, "storage rejected '{key}': {reason}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Minimal key/value persistence, shaped like `window.localStorage`.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The preferences the page remembers across visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// `"true"` when dark mode is on.
    Theme,
    /// A locale tag.
    Language,
}

impl PreferenceKey {
    /// Storage key, shared with earlier versions of the page.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Theme => "darkMode",
            Self::Language => "language",
        }
    }
}

/// Preference store. Never fails; see the module docs.
#[derive(Debug)]
pub struct Preferences<S> {
    backend: Option<S>,
}

impl<S: Storage> Preferences<S> {
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A store with no backend: every load is absent.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Read a stored value.
    #[must_use]
    pub fn load(&self, key: PreferenceKey) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get_item(key.as_str()) {
            Ok(value) => value,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "preference load failed");
                None
            }
        }
    }

    /// Persist a value. Returns whether it reached the backend.
    pub fn save(&self, key: PreferenceKey, value: &str) -> bool {
        let Some(backend) = self.backend.as_ref() else {
            debug!(key = key.as_str(), "no storage, preference not saved");
            return false;
        };
        match backend.set_item(key.as_str(), value) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = key.as_str(), error = %err, "preference save failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;
    use tracing_test::traced_test;

    #[test]
    fn keys_match_existing_storage_layout() {
        assert_eq!(PreferenceKey::Theme.as_str(), "darkMode");
        assert_eq!(PreferenceKey::Language.as_str(), "language");
    }

    #[test]
    fn save_then_load() {
        let storage = MemoryStorage::new();
        let prefs = Preferences::new(storage.clone());
        assert_eq!(prefs.load(PreferenceKey::Language), None);
        assert!(prefs.save(PreferenceKey::Language, "en"));
        assert_eq!(prefs.load(PreferenceKey::Language).as_deref(), Some("en"));
        assert_eq!(storage.get("language").as_deref(), Some("en"));
    }

    #[test]
    fn unavailable_store_is_always_absent() {
        let prefs: Preferences<MemoryStorage> = Preferences::unavailable();
        assert!(!prefs.is_available());
        assert!(!prefs.save(PreferenceKey::Theme, "false"));
        assert_eq!(prefs.load(PreferenceKey::Theme), None);
    }

    #[traced_test]
    #[test]
    fn failing_backend_degrades_to_absent() {
        let storage = MemoryStorage::new();
        storage.insert("darkMode", "false");
        storage.set_available(false);
        let prefs = Preferences::new(storage);

        assert_eq!(prefs.load(PreferenceKey::Theme), None);
        assert!(!prefs.save(PreferenceKey::Theme, "true"));
        assert!(logs_contain("preference load failed"));
        assert!(logs_contain("preference save failed"));
    }

    #[traced_test]
    #[test]
    fn rejected_write_keeps_previous_value() {
        let storage = MemoryStorage::new();
        storage.insert("language", "es");
        storage.reject_writes("quota exceeded");
        let prefs = Preferences::new(storage.clone());

        assert!(!prefs.save(PreferenceKey::Language, "en"));
        assert_eq!(prefs.load(PreferenceKey::Language).as_deref(), Some("es"));
        assert!(logs_contain("quota exceeded"));
    }

    #[test]
    fn error_display() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        let err = StorageError::Rejected {
            key: "language".into(),
            reason: "quota".into(),
        };
        assert_eq!(err.to_string(), "storage rejected 'language': quota");
    }
}
