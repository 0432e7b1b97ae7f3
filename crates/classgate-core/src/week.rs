//! Week grouping for display.
//!
//! The scheduling collaborator normally supplies its own week buckets; those
//! are passed through untouched. When it sends none, sessions are grouped
//! into Monday-started calendar weeks here.

use crate::schedule::{Session, SessionListing, Week};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Weeks for a session listing, preferring the collaborator's grouping.
pub fn weeks_for(listing: &SessionListing) -> Vec<Week> {
    if !listing.weeks.is_empty() {
        return listing.weeks.clone();
    }
    group_by_week(&listing.sessions)
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Buckets dated sessions into calendar weeks. Undated sessions are skipped.
pub fn group_by_week(sessions: &[Session]) -> Vec<Week> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        if let Some(date) = session.date {
            buckets.entry(week_start(date)).or_default().push(session);
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(i, (monday, mut members))| {
            members.sort_by_key(|s| (s.date, s.sequence_number));
            let sunday = monday + Duration::days(6);
            Week {
                week_number: i as u32 + 1,
                week_range: format!("{} – {}", monday.format("%Y-%m-%d"), sunday.format("%Y-%m-%d")),
                session_ids: members.into_iter().map(|s| s.session_id.clone()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(id: &str, seq: u32, y: i32, m: u32, d: u32) -> Session {
        let mut s = Session::new(id, seq);
        s.date = NaiveDate::from_ymd_opt(y, m, d);
        s
    }

    #[test]
    fn test_collaborator_weeks_pass_through() {
        let listing = SessionListing {
            sessions: vec![dated("s1", 1, 2026, 9, 7)],
            weeks: vec![Week {
                week_number: 4,
                week_range: "Week 4".into(),
                session_ids: vec!["s1".into()],
            }],
        };
        assert_eq!(weeks_for(&listing), listing.weeks);
    }

    #[test]
    fn test_local_grouping_by_monday_week() {
        // 2026-09-06 is a Sunday, 2026-09-07 a Monday.
        let sessions = vec![
            dated("s3", 3, 2026, 9, 9),
            dated("s1", 1, 2026, 9, 6),
            dated("s2", 2, 2026, 9, 7),
            Session::new("undated", 4),
            dated("s4", 5, 2026, 9, 13),
        ];
        let weeks = group_by_week(&sessions);
        assert_eq!(weeks.len(), 2);

        assert_eq!(weeks[0].week_number, 1);
        assert_eq!(weeks[0].week_range, "2026-08-31 – 2026-09-06");
        assert_eq!(weeks[0].session_ids, vec!["s1"]);

        assert_eq!(weeks[1].week_number, 2);
        assert_eq!(weeks[1].week_range, "2026-09-07 – 2026-09-13");
        assert_eq!(weeks[1].session_ids, vec!["s2", "s3", "s4"]);
    }

    #[test]
    fn test_empty_listing_has_no_weeks() {
        assert!(weeks_for(&SessionListing::default()).is_empty());
    }
}
