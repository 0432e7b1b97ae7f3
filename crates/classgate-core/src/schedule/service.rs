//! Scheduling collaborator contract.
//!
//! Defines the interface to the external service that owns ClassSchedule and
//! Session state.

use super::model::{ClassSchedule, DecisionReceipt, SessionListing};
use crate::error::Result;
use async_trait::async_trait;

/// The single writer of authoritative class and session state.
///
/// Implementations must serialize concurrent decisions for the same class:
/// the first decision wins and later conflicting ones fail with
/// `ClassgateError::StateConflict` instead of overwriting it.
#[async_trait]
pub trait SchedulingService: Send + Sync {
    /// Fetches the class overview.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no class with this id
    /// - `Collaborator`: transport failure; safe to retry
    async fn get_class_overview(&self, class_id: &str) -> Result<ClassSchedule>;

    /// Fetches the class's sessions and the collaborator's week grouping.
    async fn get_sessions(&self, class_id: &str) -> Result<SessionListing>;

    /// Sets `approvalStatus = APPROVED` and stamps `decidedAt`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no class with this id
    /// - `StateConflict`: the class is no longer PENDING
    async fn approve_class(&self, class_id: &str) -> Result<DecisionReceipt>;

    /// Returns the class to draft, stores `reason` and stamps `decidedAt`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no class with this id
    /// - `StateConflict`: the class is no longer PENDING
    /// - `Validation`: the collaborator refused the reason
    async fn reject_class(&self, class_id: &str, reason: &str) -> Result<DecisionReceipt>;
}
