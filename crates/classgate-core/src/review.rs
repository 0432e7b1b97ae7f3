//! Reviewer-facing read view of one class snapshot.

use crate::config::DisplaySettings;
use crate::error::ClassgateError;
use crate::normalize::ScheduleDays;
use crate::readiness::Readiness;
use crate::resource::ResourceSummary;
use crate::schedule::{ClassSchedule, Session, SessionListing, Week};
use crate::teacher::{TeacherSource, TeacherSummary, aggregate_teachers, display_teachers};
use crate::week::weeks_for;
use serde::Serialize;

/// Everything a reviewer sees next to the approve/reject actions.
///
/// Built from a single snapshot and never patched; refetch and rebuild to
/// pick up changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReview {
    pub class: ClassSchedule,
    /// Sessions in sequence order.
    pub sessions: Vec<Session>,
    pub weeks: Vec<Week>,
    pub readiness: Readiness,
    pub schedule_days: ScheduleDays,
    pub schedule_days_display: String,
    pub teachers: Vec<TeacherSummary>,
    pub teachers_display: String,
    pub resources: ResourceSummary,
    pub resources_display: String,
    /// Approve/reject are offered only while the class is PENDING.
    pub actions_available: bool,
    /// Set when the session read failed; the view then has no sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_error: Option<ClassgateError>,
}

impl ClassReview {
    /// Builds the view. `sessions` is the session read's outcome; a failed
    /// read degrades to an empty listing and is kept in `sessions_error`.
    pub fn build(
        class: ClassSchedule,
        sessions: Result<SessionListing, ClassgateError>,
        display: &DisplaySettings,
    ) -> Self {
        let (mut listing, sessions_error) = match sessions {
            Ok(listing) => (listing, None),
            Err(err) => (SessionListing::default(), Some(err)),
        };
        listing.sessions.sort_by_key(|s| s.sequence_number);

        let weeks = weeks_for(&listing);
        let readiness = Readiness::from_sessions(&listing.sessions);
        let schedule_days = ScheduleDays::resolve(
            class.schedule_days.as_deref(),
            class.schedule_summary.as_deref(),
        );
        let schedule_days_display =
            schedule_days.display(&display.list_separator, &display.unscheduled_label);
        let teachers = aggregate_teachers(TeacherSource::for_class(&class, &listing.sessions));
        let teachers_display =
            display_teachers(&teachers, &display.list_separator, &display.unassigned_label);
        let resources = ResourceSummary::for_class(&class, &listing.sessions);
        let resources_display =
            resources.display(&display.list_separator, &display.unassigned_label);

        Self {
            actions_available: class.is_awaiting_decision(),
            class,
            sessions: listing.sessions,
            weeks,
            readiness,
            schedule_days,
            schedule_days_display,
            teachers,
            teachers_display,
            resources,
            resources_display,
            sessions_error,
        }
    }

    /// Slot label for one session, using the configured range separator.
    pub fn slot_label(session: &Session, display: &DisplaySettings) -> Option<String> {
        crate::normalize::slot_label(session.time_slot.as_ref(), &display.slot_range_separator)
    }
}
