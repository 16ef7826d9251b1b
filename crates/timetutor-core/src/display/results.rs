//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{PlanStatus, StudyPlan};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<StudyPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a status change.
///
/// The headline mirrors the status the plan was moved to.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use timetutor_core::{
///     display::UpdateResult,
///     models::{Importance, PlanStatus, StudyPlan},
/// };
///
/// let plan = StudyPlan {
///     id: "1".to_string(),
///     subject: "Maths".to_string(),
///     time: "7-8PM".to_string(),
///     date: date(2023, 1, 1),
///     importance: Importance::High,
///     status: PlanStatus::Complete,
/// };
///
/// let output = UpdateResult::new(plan).to_string();
/// assert!(output.contains("One step closer to victory"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<StudyPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headline = match self.resource.status {
            PlanStatus::Complete => "Semma da! One step closer to victory! 💪",
            PlanStatus::Skipped => "No problem da! Try again next time! 💫",
            PlanStatus::Incomplete => "Plan is back on the list.",
        };
        writeln!(f, "{headline}")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
