//! Class review use case.
//!
//! This module provides the `ClassReviewUseCase` which fetches a class's read
//! views from the scheduling collaborator, builds the reviewer-facing
//! `ClassReview`, and issues approve/reject decisions.

use crate::in_flight::InFlightDecisions;
use classgate_core::approval::{self, ApprovalDecision};
use classgate_core::config::ReviewConfig;
use classgate_core::error::Result;
use classgate_core::review::ClassReview;
use classgate_core::schedule::{DecisionReceipt, SchedulingService};
use std::sync::Arc;

/// Use case for reviewing and deciding on a class schedule.
///
/// # Responsibilities
///
/// - Fetching the class overview and session list independently
/// - Building the read view from that snapshot
/// - Validating rejection reasons before any collaborator call
/// - Refusing decisions on classes that are not PENDING
/// - Allowing at most one outstanding decision per class
///
/// Writes are never retried here. After a failed decision the caller should
/// reload the review and check `approval_status` before trying again.
pub struct ClassReviewUseCase {
    /// The scheduling collaborator (single writer of class state)
    scheduling: Arc<dyn SchedulingService>,
    /// Reason bounds and display settings
    config: ReviewConfig,
    /// Classes with a decision currently outstanding
    in_flight: InFlightDecisions,
}

impl ClassReviewUseCase {
    /// Creates a new `ClassReviewUseCase`.
    ///
    /// # Arguments
    ///
    /// * `scheduling` - The scheduling collaborator
    /// * `config` - Review configuration (reason bounds, display labels)
    pub fn new(scheduling: Arc<dyn SchedulingService>, config: ReviewConfig) -> Self {
        Self {
            scheduling,
            config,
            in_flight: InFlightDecisions::new(),
        }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Whether a decision for `class_id` is currently outstanding.
    pub fn is_decision_in_flight(&self, class_id: &str) -> bool {
        self.in_flight.contains(class_id)
    }

    /// Loads the review view for a class.
    ///
    /// Both reads run concurrently. A failed session read degrades the view
    /// to zero sessions and is recorded in `sessions_error`.
    ///
    /// # Errors
    ///
    /// Returns the overview read's error; without the class there is nothing
    /// to review. Reads are safe to retry.
    pub async fn load_review(&self, class_id: &str) -> Result<ClassReview> {
        let (overview, sessions) = tokio::join!(
            self.scheduling.get_class_overview(class_id),
            self.scheduling.get_sessions(class_id),
        );

        let class = overview.inspect_err(|e| {
            tracing::warn!(class_id, error = %e, "class overview unavailable");
        })?;
        if let Err(e) = &sessions {
            tracing::warn!(class_id, error = %e, "session list unavailable, showing empty view");
        }

        let review = ClassReview::build(class, sessions, &self.config.display);
        tracing::debug!(
            class_id,
            total = review.readiness.total,
            with_time_slot = review.readiness.with_time_slot,
            with_resource = review.readiness.with_resource,
            with_teacher = review.readiness.with_teacher,
            "built class review"
        );
        Ok(review)
    }

    /// Approves a pending class.
    ///
    /// # Errors
    ///
    /// - `DecisionInFlight`: another decision for the class is outstanding
    /// - `StateConflict`: the class is not PENDING
    /// - any collaborator error, surfaced unchanged
    pub async fn approve(&self, class_id: &str) -> Result<DecisionReceipt> {
        self.decide(class_id, ApprovalDecision::Approve).await
    }

    /// Rejects a pending class with a reason.
    ///
    /// The reason is validated (trimmed length within the configured bounds)
    /// before anything else happens; an invalid reason never reaches the
    /// collaborator.
    ///
    /// # Errors
    ///
    /// - `Validation`: reason too short or too long
    /// - otherwise as for [`approve`](Self::approve)
    pub async fn reject(&self, class_id: &str, reason: &str) -> Result<DecisionReceipt> {
        let reason = approval::validate_rejection_reason(reason, &self.config.rejection_reason)
            .inspect_err(|e| {
                tracing::warn!(class_id, error = %e, "rejection reason refused");
            })?;
        self.decide(class_id, ApprovalDecision::Reject { reason })
            .await
    }

    async fn decide(&self, class_id: &str, decision: ApprovalDecision) -> Result<DecisionReceipt> {
        let _permit = self.in_flight.acquire(class_id).inspect_err(|_| {
            tracing::warn!(class_id, "decision already in flight");
        })?;

        let class = self.scheduling.get_class_overview(class_id).await?;
        approval::ensure_pending(&class).inspect_err(|e| {
            tracing::warn!(class_id, error = %e, "decision refused");
        })?;

        let target = decision.target_status();
        tracing::info!(class_id, %target, "issuing decision");
        let outcome = match &decision {
            ApprovalDecision::Approve => self.scheduling.approve_class(class_id).await,
            ApprovalDecision::Reject { reason } => {
                self.scheduling.reject_class(class_id, reason).await
            }
        };

        match &outcome {
            Ok(receipt) => tracing::info!(class_id, %target, message = %receipt.message, "decision accepted"),
            Err(e) => tracing::warn!(class_id, %target, error = %e, "decision failed"),
        }
        outcome
    }
}
