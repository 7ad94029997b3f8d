//! `window.localStorage` as a preference backend.

use fitsense_core::{Preferences, Storage, StorageError};
use tracing::debug;
use wasm_bindgen::JsValue;

fn rejected(key: &str, err: &JsValue) -> StorageError {
    StorageError::Rejected {
        key: key.to_owned(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage(web_sys::Storage);

impl LocalStorage {
    #[must_use]
    pub fn new(storage: web_sys::Storage) -> Self {
        Self(storage)
    }

    /// Preferences over the window's local storage.
    ///
    /// Sandboxed frames and some privacy modes throw on access or return no
    /// storage at all; both yield an unavailable store.
    #[must_use]
    pub fn preferences(window: &web_sys::Window) -> Preferences<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Preferences::new(Self(storage)),
            Ok(None) => {
                debug!("no local storage, preferences kept in memory");
                Preferences::unavailable()
            }
            Err(err) => {
                debug!(error = ?err, "local storage blocked, preferences kept in memory");
                Preferences::unavailable()
            }
        }
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key).map_err(|err| rejected(key, &err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set_item(key, value).map_err(|err| rejected(key, &err))
    }
}
