//! Session-scoped verifier storage.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Key under which the code verifier is stored for the current session.
pub const VERIFIER_KEY: &str = "code_verifier";

/// Session-scoped string storage.
///
/// The authorization flow keeps exactly one value here for the duration of
/// one flow: the code verifier under [`VERIFIER_KEY`]. Implementations map
/// onto whatever session mechanism the hosting application provides.
pub trait SessionStore: Send + Sync {
    /// Get the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String);

    /// Remove the value under `key`, returning it if present.
    fn remove(&self, key: &str) -> Option<String>;
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.values.write().remove(key)
    }
}
