//! Importance and status enumerations for study plans.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Priority tag attached to a plan when it is created.
///
/// Serialized with capitalized names (`"High"`, `"Medium"`, `"Low"`) so that
/// previously stored collections keep loading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            "low" => Ok(Importance::Low),
            _ => Err(format!("Invalid importance: {s}")),
        }
    }
}

impl Importance {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
        }
    }

    /// Importance with its colour marker, e.g. `🔴 High`.
    pub fn with_icon(&self) -> &'static str {
        match self {
            Importance::High => "🔴 High",
            Importance::Medium => "🟡 Medium",
            Importance::Low => "🟢 Low",
        }
    }
}

/// Lifecycle tag tracking whether a plan was resolved.
///
/// Nothing restricts transitions between variants: a completed plan may be
/// marked skipped later, or moved back to incomplete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PlanStatus {
    /// Not yet done
    #[default]
    Incomplete,

    /// Marked as done
    Complete,

    /// Marked as skipped
    Skipped,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomplete" => Ok(PlanStatus::Incomplete),
            "complete" | "done" => Ok(PlanStatus::Complete),
            "skipped" | "skip" => Ok(PlanStatus::Skipped),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Incomplete => "Incomplete",
            PlanStatus::Complete => "Complete",
            PlanStatus::Skipped => "Skipped",
        }
    }

    /// Whether the plan has been completed or skipped.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, PlanStatus::Incomplete)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timetutor_core::models::PlanStatus;
    ///
    /// assert_eq!(PlanStatus::Complete.with_icon(), "✅ Completed");
    /// assert_eq!(PlanStatus::Skipped.with_icon(), "❌ Skipped");
    /// assert_eq!(PlanStatus::Incomplete.with_icon(), "○ Incomplete");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanStatus::Complete => "✅ Completed",
            PlanStatus::Skipped => "❌ Skipped",
            PlanStatus::Incomplete => "○ Incomplete",
        }
    }
}
