//! Collection wrapper types for displaying groups of plans.

use std::{fmt, ops::Index};

use crate::models::StudyPlan;

/// Newtype wrapper for displaying a list of plans.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use timetutor_core::{
///     display::Plans,
///     models::{Importance, PlanStatus, StudyPlan},
/// };
///
/// let plan = StudyPlan {
///     id: "1".to_string(),
///     subject: "History".to_string(),
///     time: "4-5PM".to_string(),
///     date: date(2023, 1, 1),
///     importance: Importance::Low,
///     status: PlanStatus::Incomplete,
/// };
///
/// let output = Plans(vec![plan]).to_string();
/// assert!(output.contains("History"));
/// assert_eq!(Plans(vec![]).to_string(), "No plans found.\n");
/// ```
pub struct Plans(pub Vec<StudyPlan>);

impl Plans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plans.
    pub fn iter(&self) -> std::slice::Iter<'_, StudyPlan> {
        self.0.iter()
    }
}

impl Index<usize> for Plans {
    type Output = StudyPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Plans {
    type Item = StudyPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Plans {
    type Item = &'a StudyPlan;
    type IntoIter = std::slice::Iter<'a, StudyPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}
