//! Key-value storage and the plan collection adapter.
//!
//! Plans are persisted as one JSON array under a single fixed key, mirroring
//! how a browser's `localStorage` holds them. The [`KeyValueStore`] trait is
//! that synchronous two-call surface; [`PlanStore`] layers the collection
//! encoding on top of it and absorbs every storage failure into an
//! [`Outcome`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ PlanRepository  │───▶│    PlanStore    │───▶│  KeyValueStore  │
//! │ (ids, filters)  │    │ (JSON, absorb)  │    │ (sqlite/memory) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use log::{debug, error};

use crate::{
    error::{Result, TutorError},
    models::StudyPlan,
    outcome::{Degradation, Outcome},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key under which the serialized plan collection is stored.
pub const STORAGE_KEY: &str = "timetutor_study_plans";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key` in a single write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Reads and writes the whole plan collection as one blob.
pub struct PlanStore<S> {
    store: S,
}

impl<S: KeyValueStore> PlanStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the stored collection.
    ///
    /// A missing blob is an empty collection. An unreadable or unparseable
    /// blob is logged and also treated as empty, with the failure reported as
    /// [`Degradation::ReadFallback`].
    pub fn load(&self) -> Outcome<Vec<StudyPlan>> {
        let blob = match self.store.get_item(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Outcome::clean(Vec::new()),
            Err(e) => {
                error!("Error reading study plans: {e}");
                return Outcome::degraded(Vec::new(), Degradation::ReadFallback(e));
            }
        };

        match serde_json::from_str::<Vec<StudyPlan>>(&blob) {
            Ok(plans) => {
                debug!("Loaded {} study plans", plans.len());
                Outcome::clean(plans)
            }
            Err(e) => {
                error!("Error reading study plans: {e}");
                Outcome::degraded(
                    Vec::new(),
                    Degradation::ReadFallback(TutorError::from(e)),
                )
            }
        }
    }

    /// Overwrites the stored collection with `plans`.
    ///
    /// A failed write is logged and reported as [`Degradation::WriteDropped`];
    /// the previous blob stays in place.
    pub fn save(&self, plans: &[StudyPlan]) -> Outcome<()> {
        let result = serde_json::to_string(plans)
            .map_err(TutorError::from)
            .and_then(|blob| self.store.set_item(STORAGE_KEY, &blob));

        match result {
            Ok(()) => {
                debug!("Saved {} study plans", plans.len());
                Outcome::clean(())
            }
            Err(e) => {
                error!("Error saving study plans: {e}");
                Outcome::degraded((), Degradation::WriteDropped(e))
            }
        }
    }
}
