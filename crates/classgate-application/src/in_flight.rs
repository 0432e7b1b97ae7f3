//! Client-side guard against concurrent decisions on one class.
//!
//! Refuses a second approve/reject for a class while the first is still
//! outstanding. This only covers this process; the scheduling collaborator
//! still has to detect conflicting decisions from other reviewers.

use classgate_core::error::{ClassgateError, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// Set of class ids with a decision currently outstanding.
#[derive(Debug, Default)]
pub struct InFlightDecisions {
    classes: Mutex<HashSet<String>>,
}

impl InFlightDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `class_id` until the returned permit is dropped.
    ///
    /// # Errors
    ///
    /// `DecisionInFlight` when another decision for the class is outstanding.
    pub fn acquire(&self, class_id: &str) -> Result<DecisionPermit<'_>> {
        let mut classes = self.classes.lock().unwrap_or_else(|e| e.into_inner());
        if !classes.insert(class_id.to_string()) {
            return Err(ClassgateError::decision_in_flight(class_id));
        }
        Ok(DecisionPermit {
            registry: self,
            class_id: class_id.to_string(),
        })
    }

    pub fn contains(&self, class_id: &str) -> bool {
        self.classes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(class_id)
    }
}

/// Releases its class id on drop, including when the decision future is
/// dropped before completing.
#[derive(Debug)]
pub struct DecisionPermit<'a> {
    registry: &'a InFlightDecisions,
    class_id: String,
}

impl DecisionPermit<'_> {
    pub fn class_id(&self) -> &str {
        &self.class_id
    }
}

impl Drop for DecisionPermit<'_> {
    fn drop(&mut self) {
        let mut classes = self
            .registry
            .classes
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        classes.remove(&self.class_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_refused_until_release() {
        let guard = InFlightDecisions::new();
        let permit = guard.acquire("c-1").unwrap();
        assert_eq!(permit.class_id(), "c-1");
        assert!(guard.contains("c-1"));

        let err = guard.acquire("c-1").unwrap_err();
        assert!(err.is_decision_in_flight());

        drop(permit);
        assert!(!guard.contains("c-1"));
        assert!(guard.acquire("c-1").is_ok());
    }

    #[test]
    fn test_classes_are_independent() {
        let guard = InFlightDecisions::new();
        let _a = guard.acquire("c-1").unwrap();
        assert!(guard.acquire("c-2").is_ok());
    }
}
