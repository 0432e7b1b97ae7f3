//! Session readiness counts.

use crate::schedule::Session;
use serde::{Deserialize, Serialize};

/// How many of a class's sessions carry each assignment.
///
/// Informational only: an incomplete class can still be approved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub total: usize,
    pub with_time_slot: usize,
    pub with_resource: usize,
    pub with_teacher: usize,
}

impl Readiness {
    /// Counts sessions per dimension. Order-independent; empty input yields zeros.
    pub fn from_sessions(sessions: &[Session]) -> Self {
        sessions.iter().fold(Self::default(), |mut acc, session| {
            acc.total += 1;
            acc.with_time_slot += usize::from(session.has_time_slot());
            acc.with_resource += usize::from(session.has_resource());
            acc.with_teacher += usize::from(session.has_teacher());
            acc
        })
    }

    pub fn pending_time_slot(&self) -> usize {
        self.total.saturating_sub(self.with_time_slot)
    }

    pub fn pending_resource(&self) -> usize {
        self.total.saturating_sub(self.with_resource)
    }

    pub fn pending_teacher(&self) -> usize {
        self.total.saturating_sub(self.with_teacher)
    }

    /// True when every session has a slot, a resource and a teacher.
    pub fn is_complete(&self) -> bool {
        self.pending_time_slot() == 0 && self.pending_resource() == 0 && self.pending_teacher() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{SessionTeachers, TimeSlotRef};

    fn session(id: &str, slot: bool, resource: bool, teacher: bool) -> Session {
        let mut s = Session::new(id, 0);
        if slot {
            s.time_slot = Some(TimeSlotRef {
                label: Some("P1".into()),
                ..TimeSlotRef::default()
            });
        }
        if resource {
            s.room = Some("R1".into());
        }
        if teacher {
            s.teachers = Some(SessionTeachers::NameList("Ann".into()));
        }
        s
    }

    #[test]
    fn test_empty_is_all_zero() {
        let r = Readiness::from_sessions(&[]);
        assert_eq!(r, Readiness::default());
        assert!(r.is_complete());
    }

    #[test]
    fn test_counts_and_pending() {
        let sessions = vec![
            session("a", true, true, true),
            session("b", true, false, true),
            session("c", true, true, true),
            session("d", false, false, true),
        ];
        let r = Readiness::from_sessions(&sessions);
        assert_eq!(
            r,
            Readiness {
                total: 4,
                with_time_slot: 3,
                with_resource: 2,
                with_teacher: 4,
            }
        );
        assert_eq!(r.pending_time_slot(), 1);
        assert_eq!(r.pending_resource(), 2);
        assert_eq!(r.pending_teacher(), 0);
        assert_eq!(r.with_resource + r.pending_resource(), r.total);
        assert!(!r.is_complete());
    }

    #[test]
    fn test_pending_never_underflows() {
        let r = Readiness {
            total: 1,
            with_time_slot: 3,
            with_resource: 2,
            with_teacher: 1,
        };
        assert_eq!(r.pending_time_slot(), 0);
        assert_eq!(r.pending_resource(), 0);
        assert_eq!(r.pending_teacher(), 0);
        assert!(r.is_complete());
    }

    #[test]
    fn test_order_independent() {
        let mut sessions = vec![
            session("a", true, false, false),
            session("b", false, true, false),
            session("c", false, false, true),
        ];
        let forward = Readiness::from_sessions(&sessions);
        sessions.reverse();
        assert_eq!(forward, Readiness::from_sessions(&sessions));
    }

    #[test]
    fn test_blank_values_do_not_count() {
        let mut s = Session::new("x", 1);
        s.room = Some("   ".into());
        s.teachers = Some(SessionTeachers::Structured(Vec::new()));
        s.time_slot = Some(TimeSlotRef::default());
        let r = Readiness::from_sessions(&[s]);
        assert_eq!(r.with_resource, 0);
        assert_eq!(r.with_teacher, 0);
        assert_eq!(r.with_time_slot, 0);
    }
}
