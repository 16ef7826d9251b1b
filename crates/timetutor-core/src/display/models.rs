//! Display implementations for domain models.

use std::fmt;

use crate::models::{Importance, PlanStatus, ProgressSummary, StudyPlan};

/// Width of the textual progress bar, in cells.
const BAR_WIDTH: usize = 20;

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.subject, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Time: {}", self.time)?;
        writeln!(f, "- Importance: {}", self.importance.with_icon())?;
        writeln!(f, "- Date: {}", self.date)?;
        writeln!(f)?;

        Ok(())
    }
}

impl ProgressSummary {
    /// Renders the completion percentage as a fixed-width bar.
    pub fn bar(&self) -> String {
        let filled = ((self.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Completed**: {}", self.completed)?;
        writeln!(f, "- **Skipped**: {}", self.skipped)?;
        writeln!(f, "- **Total**: {}", self.total)?;
        writeln!(
            f,
            "- **Progress**: {} {}%",
            self.bar(),
            self.rounded_percentage()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn plan(status: PlanStatus) -> StudyPlan {
        StudyPlan {
            id: "1672531200000".to_string(),
            subject: "Maths".to_string(),
            time: "7-8PM".to_string(),
            date: date(2023, 1, 1),
            importance: Importance::High,
            status,
        }
    }

    #[test]
    fn test_plan_display() {
        let output = plan(PlanStatus::Incomplete).to_string();
        assert!(output.starts_with("### Maths (○ Incomplete)"));
        assert!(output.contains("- ID: 1672531200000"));
        assert!(output.contains("- Time: 7-8PM"));
        assert!(output.contains("- Importance: 🔴 High"));
        assert!(output.contains("- Date: 2023-01-01"));
    }

    #[test]
    fn test_resolved_plan_display() {
        assert!(plan(PlanStatus::Complete).to_string().contains("✅ Completed"));
        assert!(plan(PlanStatus::Skipped).to_string().contains("❌ Skipped"));
    }

    #[test]
    fn test_enum_display_uses_stored_spelling() {
        assert_eq!(Importance::Low.to_string(), "Low");
        assert_eq!(PlanStatus::Skipped.to_string(), "Skipped");
    }

    #[test]
    fn test_progress_bar_bounds() {
        let empty = ProgressSummary::default();
        assert_eq!(empty.bar(), format!("[{}]", "░".repeat(BAR_WIDTH)));

        let full = ProgressSummary {
            total: 2,
            completed: 2,
            percentage: 100.0,
            ..Default::default()
        };
        assert_eq!(full.bar(), format!("[{}]", "█".repeat(BAR_WIDTH)));

        let half = ProgressSummary {
            total: 2,
            completed: 1,
            remaining: 1,
            percentage: 50.0,
            ..Default::default()
        };
        assert_eq!(half.bar().matches('█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_progress_display() {
        let summary = ProgressSummary {
            total: 4,
            completed: 1,
            skipped: 1,
            remaining: 2,
            percentage: 25.0,
        };
        let output = summary.to_string();
        assert!(output.contains("- **Completed**: 1"));
        assert!(output.contains("- **Skipped**: 1"));
        assert!(output.contains("- **Total**: 4"));
        assert!(output.contains("25%"));
    }
}
