//! Progress summary over a set of plans.

use serde::{Deserialize, Serialize};

use super::{PlanStatus, StudyPlan};

/// Aggregate completion statistics for a day's plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of plans considered
    pub total: u32,
    /// Plans marked complete
    pub completed: u32,
    /// Plans marked skipped
    pub skipped: u32,
    /// Plans still incomplete
    pub remaining: u32,
    /// Completed share of all plans, 0..=100
    pub percentage: f64,
}

impl ProgressSummary {
    /// True when there is at least one plan and every plan is complete.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Percentage rounded to the nearest whole number.
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}

impl From<&[StudyPlan]> for ProgressSummary {
    fn from(plans: &[StudyPlan]) -> Self {
        let total = plans.len() as u32;
        let count = |status: PlanStatus| plans.iter().filter(|p| p.status == status).count() as u32;
        let completed = count(PlanStatus::Complete);
        let skipped = count(PlanStatus::Skipped);
        let percentage = if total > 0 {
            f64::from(completed) / f64::from(total) * 100.0
        } else {
            0.0
        };

        Self {
            total,
            completed,
            skipped,
            remaining: total - completed - skipped,
            percentage,
        }
    }
}

impl From<&Vec<StudyPlan>> for ProgressSummary {
    fn from(plans: &Vec<StudyPlan>) -> Self {
        Self::from(plans.as_slice())
    }
}
