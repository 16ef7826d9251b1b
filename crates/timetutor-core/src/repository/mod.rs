//! Plan repository: the operations front-ends call.
//!
//! A [`PlanRepository`] is constructed once per process and passed by
//! reference to whatever needs it. Each operation loads the full collection
//! through the [`PlanStore`], works on an in-memory copy, and writes the full
//! collection back. Nothing is cached between calls.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating repositories over the default SQLite file
//! - [`plan_ops`]: Create, list, filter and status-update operations
//! - [`plan_handlers`]: Day views and progress built on top of the operations
//!
//! # Concurrency
//!
//! Repositories sharing one underlying store do not coordinate. A
//! load → mutate → save sequence in one can overwrite a change another made in
//! between: the last whole-collection write wins.
//!
//! # Usage
//!
//! ```rust
//! use timetutor_core::{
//!     models::{Importance, PlanStatus},
//!     params::CreatePlan,
//!     store::MemoryStore,
//!     PlanRepository,
//! };
//!
//! let repository = PlanRepository::new(MemoryStore::new());
//!
//! let plan = repository
//!     .create(&CreatePlan {
//!         subject: "Maths".to_string(),
//!         time: "7-8PM".to_string(),
//!         importance: Importance::High,
//!     })
//!     .into_value();
//!
//! let _ = repository.update_status(&plan.id, PlanStatus::Skipped);
//!
//! let today = repository.list_for_today().into_value();
//! assert_eq!(today.len(), 1);
//! assert_eq!(today[0].status, PlanStatus::Skipped);
//! ```

use jiff::civil::Date;

use crate::{
    clock::{Clock, DayBoundary, SystemClock},
    store::{KeyValueStore, PlanStore, SqliteStore},
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::RepositoryBuilder;

/// Study plan operations over a key-value store.
pub struct PlanRepository<S = SqliteStore> {
    pub(crate) store: PlanStore<S>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) day_boundary: DayBoundary,
}

impl<S: KeyValueStore> PlanRepository<S> {
    /// Creates a repository using the system clock and UTC calendar days.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock, DayBoundary::default())
    }

    /// Creates a repository with an explicit time source and day boundary.
    pub fn with_clock<C>(store: S, clock: C, day_boundary: DayBoundary) -> Self
    where
        C: Clock + 'static,
    {
        Self {
            store: PlanStore::new(store),
            clock: Box::new(clock),
            day_boundary,
        }
    }

    /// Today's calendar date under the configured day boundary.
    pub fn today(&self) -> Date {
        self.day_boundary.date_of(self.clock.now())
    }

    pub fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }
}
