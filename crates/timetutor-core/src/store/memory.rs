//! In-memory key-value store.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard,
    },
};

use super::KeyValueStore;
use crate::error::{Result, TutorError};

/// Process-local storage that disappears with the process.
///
/// Reads and writes can be made to fail on demand, which is how an
/// unavailable or over-quota store is simulated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items().insert(key.to_string(), value.to_string());
        store
    }

    /// Makes every subsequent read fail until switched off again.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail until switched off again.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent strings; keep using it.
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TutorError::store_unavailable("memory store refused the read"));
        }
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(TutorError::store_unavailable("quota exceeded"));
        }
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
