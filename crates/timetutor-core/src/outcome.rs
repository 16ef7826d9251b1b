//! Best-effort operation results.
//!
//! Storage failures never abort a repository operation. Instead the operation
//! completes against whatever state it could obtain and reports what went
//! wrong alongside the value. Callers that only care about the value call
//! [`Outcome::into_value`]; callers that want to warn the user inspect
//! [`Outcome::degradations`].

use std::fmt;

use crate::error::TutorError;

/// A storage failure that was absorbed instead of returned.
#[derive(Debug)]
pub enum Degradation {
    /// The stored collection could not be read or parsed; an empty collection
    /// was used in its place.
    ReadFallback(TutorError),

    /// The collection could not be written; the change is not durable.
    WriteDropped(TutorError),
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::ReadFallback(e) => {
                write!(f, "stored plans could not be read, showing none: {e}")
            }
            Degradation::WriteDropped(e) => write!(f, "changes were not saved: {e}"),
        }
    }
}

/// A value produced by a best-effort operation, plus any absorbed failures.
#[derive(Debug)]
#[must_use]
pub struct Outcome<T> {
    value: T,
    degradations: Vec<Degradation>,
}

impl<T> Outcome<T> {
    /// A value obtained without any storage failure.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            degradations: Vec::new(),
        }
    }

    /// A value obtained after absorbing `degradation`.
    pub fn degraded(value: T, degradation: Degradation) -> Self {
        Self {
            value,
            degradations: vec![degradation],
        }
    }

    /// True if any storage failure was absorbed.
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    /// Absorbed failures, in the order they happened.
    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Discards the degradation report and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the outcome into its value and degradation report.
    pub fn into_parts(self) -> (T, Vec<Degradation>) {
        (self.value, self.degradations)
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            value: f(self.value),
            degradations: self.degradations,
        }
    }

    /// Chains another best-effort step, accumulating degradations from both.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        let mut next = f(self.value);
        let mut degradations = self.degradations;
        degradations.append(&mut next.degradations);
        Outcome {
            value: next.value,
            degradations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_outcome() {
        let outcome = Outcome::clean(3);
        assert!(!outcome.is_degraded());
        assert_eq!(*outcome.value(), 3);
        assert_eq!(outcome.into_value(), 3);
    }

    #[test]
    fn test_and_then_accumulates_in_order() {
        let outcome = Outcome::degraded(
            1,
            Degradation::ReadFallback(TutorError::store_unavailable("read")),
        )
        .and_then(|v| {
            Outcome::degraded(
                v + 1,
                Degradation::WriteDropped(TutorError::store_unavailable("write")),
            )
        });

        let (value, degradations) = outcome.into_parts();
        assert_eq!(value, 2);
        assert_eq!(degradations.len(), 2);
        assert!(matches!(degradations[0], Degradation::ReadFallback(_)));
        assert!(matches!(degradations[1], Degradation::WriteDropped(_)));
    }

    #[test]
    fn test_map_keeps_degradations() {
        let outcome = Outcome::degraded(
            vec![1, 2],
            Degradation::WriteDropped(TutorError::store_unavailable("quota exceeded")),
        )
        .map(|v| v.len());

        assert!(outcome.is_degraded());
        assert_eq!(*outcome.value(), 2);
        assert!(outcome.degradations()[0]
            .to_string()
            .contains("quota exceeded"));
    }
}
