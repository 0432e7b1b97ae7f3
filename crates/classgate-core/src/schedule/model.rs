//! Class schedule domain model.
//!
//! These types mirror the shapes the scheduling collaborator hands out. Many
//! fields are optional or arrive in more than one shape; the pure components
//! (`normalize`, `readiness`, `teacher`, `resource`, `week`) resolve them into
//! canonical views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// An identifier that may arrive as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    /// Returns the identifier as an owned key, or `None` for a blank string.
    pub fn to_key(&self) -> Option<String> {
        match self {
            RawId::Number(n) => Some(n.to_string()),
            RawId::Text(s) => non_blank(s).map(str::to_string),
        }
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawId {
    fn from(value: i64) -> Self {
        RawId::Number(value)
    }
}

impl From<&str> for RawId {
    fn from(value: &str) -> Self {
        RawId::Text(value.to_string())
    }
}

/// Reads an optional count, treating an explicit `null` like a missing key.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a class is actually being delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SchedulingStatus {
    #[default]
    Draft,
    Scheduled,
    Ongoing,
    Completed,
    Cancelled,
}

/// Review state of the class's current schedule draft.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A decision from an earlier submission cycle, kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRecord {
    pub status: ApprovalStatus,
    pub decided_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One entry of a precomputed class-level teacher roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(default)]
    pub id: Option<RawId>,
    /// Alternate identifier field some payloads use instead of `id`.
    #[serde(default)]
    pub teacher_id: Option<RawId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub session_count: u32,
}

/// The unit under review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub class_id: String,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub scheduling_status: SchedulingStatus,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    /// Weekday integers, 0 = Sunday. Not yet normalized.
    #[serde(default)]
    pub schedule_days: Option<Vec<i64>>,
    /// Free-text fallback used when `schedule_days` is absent.
    #[serde(default)]
    pub schedule_summary: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub decided_at: Option<DateTime<Utc>>,
    /// Reason from the most recent rejection; never cleared automatically.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decision_history: Vec<DecisionRecord>,
    /// Authoritative roster; when present it replaces session-derived data.
    #[serde(default)]
    pub teachers: Option<Vec<RosterEntry>>,
    /// Authoritative resource; when present it replaces session-derived data.
    #[serde(default)]
    pub assigned_resource: Option<String>,
}

impl ClassSchedule {
    pub fn new(class_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            ..Self::default()
        }
    }

    /// Approval actions are only exposed while the draft awaits review.
    pub fn is_awaiting_decision(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }
}

/// Nested time-slot details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotInfo {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRef {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub info: Option<TimeSlotInfo>,
}

/// A structured per-session teacher assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRef {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub teacher_id: Option<RawId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub employee_code: Option<String>,
}

/// Per-session teacher data in either of the shapes the collaborator emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionTeachers {
    Structured(Vec<TeacherRef>),
    /// Degraded shape: `"Alice, Bob"`.
    NameList(String),
}

impl SessionTeachers {
    /// Names from the degraded shape: split on commas, trimmed, empties dropped.
    pub fn split_names(raw: &str) -> impl Iterator<Item = &str> {
        raw.split(',').map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SessionTeachers::Structured(list) => list.is_empty(),
            SessionTeachers::NameList(raw) => Self::split_names(raw).next().is_none(),
        }
    }
}

/// One scheduled occurrence of a class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub sequence_number: u32,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub day_of_week: Option<i64>,
    #[serde(default)]
    pub time_slot: Option<TimeSlotRef>,
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub resource_display_name: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub teachers: Option<SessionTeachers>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, sequence_number: u32) -> Self {
        Self {
            session_id: session_id.into(),
            sequence_number,
            ..Self::default()
        }
    }

    pub fn has_time_slot(&self) -> bool {
        crate::normalize::slot_label(self.time_slot.as_ref(), "–").is_some()
    }

    pub fn has_resource(&self) -> bool {
        self.resource_label().is_some()
    }

    pub fn has_teacher(&self) -> bool {
        self.teachers.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Resource identifier: primary name, then display name, then room.
    pub fn resource_label(&self) -> Option<&str> {
        [&self.resource_name, &self.resource_display_name, &self.room]
            .into_iter()
            .find_map(|field| field.as_deref().and_then(non_blank))
    }
}

/// A calendar-week bucket of sessions. View only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub week_range: String,
    pub session_ids: Vec<String>,
}

/// Result of the collaborator's session read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionListing {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

/// Message returned by the collaborator for an accepted decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReceipt {
    pub message: String,
}

impl DecisionReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trims `value` and returns it only if something is left.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
