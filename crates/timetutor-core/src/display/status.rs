//! Notices for operations that completed without changing anything.

use std::fmt;

/// Wrapper type for displaying an operation failure notice.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn failure(message: String) -> Self {
        Self { message }
    }

    /// Notice for a status change that matched no plan.
    pub fn plan_not_found(id: &str) -> Self {
        Self::failure(format!("No plan with ID {id}; nothing changed."))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = OperationStatus::failure("Plan missing".to_string());
        assert_eq!(failure.to_string(), "Error: Plan missing\n");
    }

    #[test]
    fn test_plan_not_found() {
        let status = OperationStatus::plan_not_found("123");
        assert_eq!(status.to_string(), "Error: No plan with ID 123; nothing changed.\n");
    }
}
