//! In-memory scheduling collaborator.
//!
//! Holds class snapshots in a map and applies decisions with the core
//! approval state machine. Used by the CLI and by tests.

use crate::fixture::{ClassFixture, FixtureFile};
use async_trait::async_trait;
use chrono::Utc;
use classgate_core::approval::{self, ApprovalDecision};
use classgate_core::config::ReasonPolicy;
use classgate_core::error::{ClassgateError, Result};
use classgate_core::schedule::{
    ClassSchedule, DecisionReceipt, SchedulingService, SessionListing,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A `SchedulingService` backed by a map of class fixtures.
///
/// Decisions take the write lock, so concurrent decisions on one class are
/// serialized: the first one wins and the rest fail with `StateConflict`.
pub struct InMemorySchedulingService {
    classes: RwLock<HashMap<String, ClassFixture>>,
    reason_policy: ReasonPolicy,
}

impl InMemorySchedulingService {
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(HashMap::new()),
            reason_policy: ReasonPolicy::default(),
        }
    }

    pub fn from_fixture(fixture: FixtureFile) -> Self {
        let classes = fixture
            .classes
            .into_iter()
            .map(|c| (c.class.class_id.clone(), c))
            .collect();
        Self {
            classes: RwLock::new(classes),
            reason_policy: ReasonPolicy::default(),
        }
    }

    /// Overrides the reason bounds this collaborator enforces on its side.
    pub fn with_reason_policy(mut self, policy: ReasonPolicy) -> Self {
        self.reason_policy = policy;
        self
    }

    /// Adds or replaces a class.
    pub async fn insert(&self, fixture: ClassFixture) {
        let mut classes = self.classes.write().await;
        classes.insert(fixture.class.class_id.clone(), fixture);
    }

    /// All classes, ordered by class id.
    pub async fn snapshot(&self) -> FixtureFile {
        let classes = self.classes.read().await;
        let mut out: Vec<ClassFixture> = classes.values().cloned().collect();
        out.sort_by(|a, b| a.class.class_id.cmp(&b.class.class_id));
        FixtureFile { classes: out }
    }

    /// Puts a rejected or never-submitted class back into review.
    pub async fn resubmit(&self, class_id: &str) -> Result<DecisionReceipt> {
        let mut classes = self.classes.write().await;
        let fixture = classes
            .get_mut(class_id)
            .ok_or_else(|| ClassgateError::not_found("ClassSchedule", class_id))?;
        approval::resubmit(&mut fixture.class, Utc::now())?;
        tracing::info!(class_id, "class resubmitted for approval");
        Ok(DecisionReceipt::new(format!(
            "Class {} submitted for approval",
            class_id
        )))
    }

    async fn decide(&self, class_id: &str, decision: ApprovalDecision) -> Result<()> {
        let mut classes = self.classes.write().await;
        let fixture = classes
            .get_mut(class_id)
            .ok_or_else(|| ClassgateError::not_found("ClassSchedule", class_id))?;
        approval::apply_decision(&mut fixture.class, &decision, Utc::now())
    }
}

impl Default for InMemorySchedulingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulingService for InMemorySchedulingService {
    async fn get_class_overview(&self, class_id: &str) -> Result<ClassSchedule> {
        let classes = self.classes.read().await;
        classes
            .get(class_id)
            .map(|c| c.class.clone())
            .ok_or_else(|| ClassgateError::not_found("ClassSchedule", class_id))
    }

    async fn get_sessions(&self, class_id: &str) -> Result<SessionListing> {
        let classes = self.classes.read().await;
        classes
            .get(class_id)
            .map(|c| c.listing.clone())
            .ok_or_else(|| ClassgateError::not_found("SessionListing", class_id))
    }

    async fn approve_class(&self, class_id: &str) -> Result<DecisionReceipt> {
        self.decide(class_id, ApprovalDecision::Approve).await?;
        Ok(DecisionReceipt::new(format!("Class {} approved", class_id)))
    }

    async fn reject_class(&self, class_id: &str, reason: &str) -> Result<DecisionReceipt> {
        let reason = approval::validate_rejection_reason(reason, &self.reason_policy)?;
        self.decide(class_id, ApprovalDecision::Reject { reason })
            .await?;
        Ok(DecisionReceipt::new(format!("Class {} rejected", class_id)))
    }
}
