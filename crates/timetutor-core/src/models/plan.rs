//! Study plan model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Importance, PlanStatus};

/// One study task recorded for a given day.
///
/// The serialized form is the persisted record layout: exactly these six
/// fields, with `date` written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudyPlan {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Subject to study
    pub subject: String,

    /// Free-form description of the time window ("7-8PM", "2 hours")
    pub time: String,

    /// Calendar day the plan was created for
    pub date: Date,

    /// Priority chosen at creation
    pub importance: Importance,

    /// Current lifecycle status
    pub status: PlanStatus,
}

impl StudyPlan {
    /// Returns a copy of this plan carrying `status`, all other fields unchanged.
    pub fn with_status(&self, status: PlanStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
