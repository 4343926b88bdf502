//! Persistent key-value storage for session state.
//!
//! Every service takes its storage backend as a type parameter so the upload
//! and chat logic can be exercised against [`MemoryStorage`] without a
//! browser. The production backend is [`BrowserStorage`], a thin wrapper
//! around `window.localStorage` in which every failure path (storage
//! disabled, quota exceeded, corrupt value) degrades to fresh-session
//! behavior instead of crashing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Persisted keys
// ============================================================================

pub const SESSION_ID_KEY: &str = "pdf-chat-session-id";
pub const DOCUMENTS_KEY: &str = "uploaded-pdfs";
pub const MESSAGES_KEY: &str = "chat-messages";
pub const MODEL_KEY: &str = "selected-model";
pub const CUSTOM_PROMPT_KEY: &str = "custom-prompt";
pub const THEME_KEY: &str = "theme";

/// String key-value persistence with silent failure semantics.
pub trait StorageBackend: Clone + Send + Sync + 'static {
    /// Returns the stored value, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores a value. Write failures are swallowed.
    fn write(&self, key: &str, value: &str);

    /// Removes a key. Missing keys are not an error.
    fn remove(&self, key: &str);
}

// ============================================================================
// Browser localStorage
// ============================================================================

/// `window.localStorage` backend used by the running application.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Map-backed storage for tests and non-browser contexts.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
