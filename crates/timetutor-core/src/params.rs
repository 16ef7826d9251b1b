//! Parameter structures for planner operations.
//!
//! These are plain structures without framework-specific derives so that the
//! CLI (or any other front-end) can wrap them with its own argument types and
//! convert via `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶ PlanRepository
//! │  (clap derives) │    │ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TutorError},
    models::{Importance, PlanStatus},
};

/// Parameters for creating a new plan.
///
/// The repository stores the fields as given; use [`CreatePlan::validated`]
/// to apply the trimming and non-empty checks front-ends perform before
/// creating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePlan {
    /// Subject to study
    pub subject: String,
    /// Free-form time window
    pub time: String,
    /// Priority of the plan
    pub importance: Importance,
}

impl CreatePlan {
    /// Trims `subject` and `time`, rejecting either if nothing is left.
    pub fn validated(self) -> Result<Self> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(TutorError::invalid_input("subject").with_reason("must not be empty"));
        }
        let time = self.time.trim();
        if time.is_empty() {
            return Err(TutorError::invalid_input("time").with_reason("must not be empty"));
        }

        Ok(Self {
            subject: subject.to_string(),
            time: time.to_string(),
            importance: self.importance,
        })
    }
}

/// Parameters for changing the status of one plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateStatus {
    /// ID of the plan to update
    pub id: String,
    /// New status
    pub status: PlanStatus,
}

/// Parameters for listing plans.
///
/// With no date, every stored plan is listed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListPlans {
    pub date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_trims_fields() {
        let params = CreatePlan {
            subject: "  Maths ".to_string(),
            time: "\t7-8PM\n".to_string(),
            importance: Importance::High,
        }
        .validated()
        .expect("Params should be valid");

        assert_eq!(params.subject, "Maths");
        assert_eq!(params.time, "7-8PM");
        assert_eq!(params.importance, Importance::High);
    }

    #[test]
    fn test_validated_rejects_blank_subject() {
        let err = CreatePlan {
            subject: "   ".to_string(),
            time: "7-8PM".to_string(),
            importance: Importance::Low,
        }
        .validated()
        .unwrap_err();

        assert!(matches!(err, TutorError::InvalidInput { ref field, .. } if field == "subject"));
    }

    #[test]
    fn test_validated_rejects_blank_time() {
        let err = CreatePlan {
            subject: "Maths".to_string(),
            time: String::new(),
            importance: Importance::Low,
        }
        .validated()
        .unwrap_err();

        assert!(matches!(err, TutorError::InvalidInput { ref field, .. } if field == "time"));
    }
}
