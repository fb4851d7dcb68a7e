use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{SessionStore, StateKey};

/// In-memory session store. Clones share the same underlying map, so a clone
/// handed to a controller can be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: Arc<Mutex<HashMap<StateKey, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing any typed encoding.
    pub fn with(self, key: StateKey, value: &str) -> Self {
        self.lock().insert(key, value.to_string());
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<StateKey, String>> {
        // A poisoned map still holds valid strings.
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: StateKey) -> Result<Option<String>, AppError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn set(&self, key: StateKey, value: &str) -> Result<(), AppError> {
        self.lock().insert(key, value.to_string());
        Ok(())
    }
}
