//! Core library for the TimeTutor study planner.
//!
//! This crate provides the study plan model, the key-value persistence it is
//! stored in, the repository operations front-ends call, and markdown display
//! types for rendering the results.
//!
//! # Failure model
//!
//! Repository operations never return storage errors. A collection that cannot
//! be read is treated as empty and a write that cannot be completed is
//! dropped; both are logged and reported through [`Outcome`] so a front-end
//! can choose to warn about them.
//!
//! # Quick Start
//!
//! ```rust
//! use timetutor_core::{models::Importance, params::CreatePlan, RepositoryBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = RepositoryBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()?;
//!
//! let plan = repository
//!     .create(&CreatePlan {
//!         subject: "Maths".to_string(),
//!         time: "7-8PM".to_string(),
//!         importance: Importance::High,
//!     })
//!     .into_value();
//! println!("Created plan {}", plan.id);
//!
//! for plan in repository.list_for_today().into_value() {
//!     println!("{plan}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod models;
pub mod outcome;
pub mod params;
pub mod quotes;
pub mod repository;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, DayBoundary, FixedClock, SystemClock};
pub use display::{CreateResult, DayView, OperationStatus, Plans, ProgressView, UpdateResult};
pub use error::{Result, TutorError};
pub use models::{Importance, PlanStatus, ProgressSummary, StudyPlan};
pub use outcome::{Degradation, Outcome};
pub use params::{CreatePlan, ListPlans, UpdateStatus};
pub use quotes::random_quote;
pub use repository::{PlanRepository, RepositoryBuilder};
pub use store::{KeyValueStore, MemoryStore, PlanStore, SqliteStore, STORAGE_KEY};
