//! Display formatting for plans, day views and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and page-like views are newtype or struct wrappers that
//! compose those implementations. Everything formats as markdown so the CLI
//! can render it richly or print it as plain text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Plans)
//! - [`views`]: Day and progress views (DayView, ProgressView)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use timetutor_core::{
//!     display::CreateResult,
//!     models::{Importance, PlanStatus, StudyPlan},
//! };
//!
//! let plan = StudyPlan {
//!     id: "1672531200000".to_string(),
//!     subject: "Maths".to_string(),
//!     time: "7-8PM".to_string(),
//!     date: date(2023, 1, 1),
//!     importance: Importance::High,
//!     status: PlanStatus::Incomplete,
//! };
//!
//! let output = CreateResult::new(plan).to_string();
//! assert!(output.contains("Added plan with ID: 1672531200000"));
//! assert!(output.contains("Maths"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::Plans;
pub use datetime::LongDate;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
pub use views::{DayView, ProgressView};
