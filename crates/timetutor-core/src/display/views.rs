//! Page-like views over one day's plans.

use std::fmt;

use jiff::civil::Date;

use super::datetime::LongDate;
use crate::models::{ProgressSummary, StudyPlan};

/// One day's plans with their progress and a motivational quote.
pub struct DayView {
    pub date: Date,
    pub plans: Vec<StudyPlan>,
    pub progress: ProgressSummary,
    pub quote: &'static str,
}

impl fmt::Display for DayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", LongDate(&self.date))?;
        writeln!(f)?;

        if self.plans.is_empty() {
            writeln!(f, "Nothing planned for this day yet.")?;
            writeln!(f, "Add a study schedule to get started.")?;
            return Ok(());
        }

        writeln!(
            f,
            "**{} of {} completed** {} {}%",
            self.progress.completed,
            self.progress.total,
            self.progress.bar(),
            self.progress.rounded_percentage()
        )?;
        writeln!(
            f,
            "Done: {} | Skipped: {} | Pending: {}",
            self.progress.completed, self.progress.skipped, self.progress.remaining
        )?;
        writeln!(f)?;

        writeln!(f, "## Study Plans")?;
        writeln!(f)?;
        for (index, plan) in self.plans.iter().enumerate() {
            writeln!(
                f,
                "### #{} {} ({})",
                index + 1,
                plan.subject,
                plan.status.with_icon()
            )?;
            writeln!(f)?;
            writeln!(f, "- Time: {}", plan.time)?;
            writeln!(f, "- Importance: {}", plan.importance.with_icon())?;
            writeln!(f)?;
        }

        writeln!(f, "## Daily Motivation 🔥")?;
        writeln!(f)?;
        writeln!(f, "{}", self.quote)?;

        Ok(())
    }
}

/// Today's plans, with ids, for marking them done or skipped.
pub struct ProgressView {
    pub plans: Vec<StudyPlan>,
    pub progress: ProgressSummary,
}

impl ProgressView {
    /// Encouragement shown once at least one plan is complete.
    pub fn encouragement(&self) -> Option<String> {
        let progress = &self.progress;
        if progress.completed == 0 {
            None
        } else if progress.is_perfect() {
            Some("Perfect score! All tasks completed! 🏆".to_string())
        } else {
            Some(format!(
                "{} tasks done, {} to go!",
                progress.completed, progress.remaining
            ))
        }
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Track Progress")?;
        writeln!(f)?;

        if self.plans.is_empty() {
            writeln!(f, "Nothing to track yet.")?;
            writeln!(f, "Add your first plan, then come back to track it.")?;
            return Ok(());
        }

        write!(f, "{}", self.progress)?;
        writeln!(f)?;

        writeln!(f, "## Tasks")?;
        writeln!(f)?;
        for plan in &self.plans {
            write!(f, "{plan}")?;
        }

        if let Some(message) = self.encouragement() {
            writeln!(f, "## Keep it up! 🔥")?;
            writeln!(f)?;
            writeln!(f, "{message}")?;
        }

        Ok(())
    }
}
