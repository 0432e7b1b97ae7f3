//! Approval state machine.
//!
//! ```text
//! PENDING ──approve──▶ APPROVED        (terminal for this submission)
//!    │
//!    └────reject────▶ REJECTED ──resubmit──▶ PENDING
//! ```
//!
//! `approve` and `reject` are only valid from PENDING. A refused transition
//! leaves the class untouched. Resubmission belongs to the scheduling
//! collaborator; [`resubmit`] is provided so collaborator implementations
//! apply it consistently.

use crate::config::ReasonPolicy;
use crate::error::{ClassgateError, Result};
use crate::schedule::{ApprovalStatus, ClassSchedule, DecisionRecord, SchedulingStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reviewer's decision on a pending class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum ApprovalDecision {
    Approve,
    Reject { reason: String },
}

impl ApprovalDecision {
    pub fn target_status(&self) -> ApprovalStatus {
        match self {
            ApprovalDecision::Approve => ApprovalStatus::Approved,
            ApprovalDecision::Reject { .. } => ApprovalStatus::Rejected,
        }
    }
}

/// Checks a rejection reason and returns it trimmed.
///
/// Length is counted in characters after trimming and must fall within the
/// policy's inclusive bounds.
pub fn validate_rejection_reason(reason: &str, policy: &ReasonPolicy) -> Result<String> {
    let trimmed = reason.trim();
    let length = trimmed.chars().count();
    if length < policy.min_chars {
        return Err(ClassgateError::validation(format!(
            "Rejection reason is too short: {} characters, at least {} required",
            length, policy.min_chars
        )));
    }
    if length > policy.max_chars {
        return Err(ClassgateError::validation(format!(
            "Rejection reason is too long: {} characters, at most {} allowed",
            length, policy.max_chars
        )));
    }
    Ok(trimmed.to_string())
}

/// Fails with `StateConflict` unless the class is awaiting a decision.
pub fn ensure_pending(class: &ClassSchedule) -> Result<()> {
    if class.is_awaiting_decision() {
        Ok(())
    } else {
        Err(ClassgateError::state_conflict(
            &class.class_id,
            class.approval_status,
        ))
    }
}

// decidedAt must never precede submittedAt, even with a skewed clock.
fn decision_time(class: &ClassSchedule, now: DateTime<Utc>) -> DateTime<Utc> {
    match class.submitted_at {
        Some(submitted) if submitted > now => submitted,
        _ => now,
    }
}

/// Applies `decision` to a pending class.
///
/// Approval stamps `decided_at`. Rejection additionally returns the class to
/// draft and records the reason, which stays on the class until the next
/// rejection overwrites it.
pub fn apply_decision(
    class: &mut ClassSchedule,
    decision: &ApprovalDecision,
    now: DateTime<Utc>,
) -> Result<()> {
    ensure_pending(class)?;
    let decided_at = decision_time(class, now);

    match decision {
        ApprovalDecision::Approve => {
            class.approval_status = ApprovalStatus::Approved;
        }
        ApprovalDecision::Reject { reason } => {
            class.approval_status = ApprovalStatus::Rejected;
            class.scheduling_status = SchedulingStatus::Draft;
            class.rejection_reason = Some(reason.clone());
        }
    }
    class.decided_at = Some(decided_at);
    Ok(())
}

/// Puts a rejected (or never submitted) draft back into review.
///
/// The previous decision moves into `decision_history` and `decided_at` is
/// cleared. `rejection_reason` is kept as the last-cycle breadcrumb.
pub fn resubmit(class: &mut ClassSchedule, now: DateTime<Utc>) -> Result<()> {
    let never_submitted =
        class.approval_status == ApprovalStatus::Pending && class.submitted_at.is_none();
    if class.approval_status != ApprovalStatus::Rejected && !never_submitted {
        return Err(ClassgateError::state_conflict(
            &class.class_id,
            class.approval_status,
        ));
    }

    if let Some(decided_at) = class.decided_at.take() {
        class.decision_history.push(DecisionRecord {
            status: class.approval_status,
            decided_at,
            reason: class.rejection_reason.clone(),
        });
    }
    class.approval_status = ApprovalStatus::Pending;
    class.scheduling_status = SchedulingStatus::Draft;
    class.submitted_at = Some(now);
    Ok(())
}
