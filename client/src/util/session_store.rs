//! Tab-scoped session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `sessionStorage` survives reloads but not the tab. Hydrate
//! builds write there; the server render and tests use `MemoryStorage`, so
//! everything above this module is storage-agnostic.
//!
//! TRADE-OFFS
//! ==========
//! Unreadable entries load as `None` rather than erroring: a corrupt entry is
//! indistinguishable from a logged-out tab as far as routing is concerned.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::Session;

/// Failures writing to session storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (server render, privacy mode).
    #[error("session storage unavailable")]
    Unavailable,

    /// The browser refused the write, usually for quota.
    #[error("session storage write rejected: {0}")]
    Quota(String),

    /// The value could not be serialized.
    #[error("session serialize failed: {0}")]
    Serialize(String),
}

/// Key/value storage area the session store writes through.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a `StorageError` if the value could not be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// `window.sessionStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Quota(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage area. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().map_or(0, |items| items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// JSON session persistence over a `SessionStorage` area.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by the browser in hydrate builds, memory otherwise.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(BrowserSessionStorage)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemoryStorage::new())
        }
    }

    /// Serialize and persist `session` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if serialization or the write fails.
    pub fn save(&self, key: &str, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(key, &raw)
    }

    /// Load the session saved under `key`, if present and parsable.
    pub fn load(&self, key: &str) -> Option<Session> {
        let raw = self.storage.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable session under {key}: {e}");
                None
            }
        }
    }

    pub fn clear(&self, key: &str) {
        self.storage.remove(key);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
