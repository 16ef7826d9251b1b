//! Data models for study plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data
//! structures.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use timetutor_core::models::{Importance, PlanStatus, ProgressSummary, StudyPlan};
//!
//! let plan = StudyPlan {
//!     id: "1700000000000".to_string(),
//!     subject: "Maths".to_string(),
//!     time: "7-8PM".to_string(),
//!     date: date(2023, 1, 1),
//!     importance: Importance::High,
//!     status: PlanStatus::Incomplete,
//! };
//!
//! let done = plan.with_status(PlanStatus::Complete);
//! let progress = ProgressSummary::from(&[plan, done][..]);
//! assert_eq!(progress.completed, 1);
//! assert_eq!(progress.remaining, 1);
//! ```

pub mod plan;
pub mod progress;
pub mod status;


pub use plan::StudyPlan;
pub use progress::ProgressSummary;
pub use status::{Importance, PlanStatus};
