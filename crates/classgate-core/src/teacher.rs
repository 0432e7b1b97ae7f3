//! Teacher roster aggregation.
//!
//! A class's teachers come from one of two places: a precomputed roster on
//! the class itself, or the per-session assignments. [`TeacherSource`] picks
//! the shape once; [`aggregate_teachers`] turns it into a roster of
//! [`TeacherSummary`] values in first-seen order.
//!
//! Sessions that only carry a comma-separated name string get a key scoped
//! to that session, so the same name in two sessions yields two entries.
//! Structured assignments with ids merge across sessions. Whether the
//! name-string behavior should merge by name is still awaiting product
//! confirmation; it is kept as-is.

use crate::schedule::{ClassSchedule, RawId, RosterEntry, Session, SessionTeachers, non_blank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One teacher as shown to a reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummary {
    pub id: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    /// Session-teacher pairs observed for this teacher.
    pub session_count: u32,
}

/// Where a class's teacher data comes from.
#[derive(Debug, Clone, Copy)]
pub enum TeacherSource<'a> {
    Roster(&'a [RosterEntry]),
    Sessions(&'a [Session]),
}

impl<'a> TeacherSource<'a> {
    /// The class roster wins whenever the class exposes a non-empty one.
    pub fn for_class(class: &'a ClassSchedule, sessions: &'a [Session]) -> Self {
        match class.teachers.as_deref() {
            Some(roster) if !roster.is_empty() => TeacherSource::Roster(roster),
            _ => TeacherSource::Sessions(sessions),
        }
    }
}

/// A single session-teacher pairing, already keyed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    key: String,
    full_name: String,
    email: Option<String>,
    employee_code: Option<String>,
}

fn id_key(id: Option<&RawId>) -> Option<String> {
    id.and_then(RawId::to_key)
}

fn text(value: Option<&String>) -> Option<String> {
    value.and_then(|v| non_blank(v)).map(str::to_string)
}

fn summarize_roster(roster: &[RosterEntry]) -> Vec<TeacherSummary> {
    roster
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let full_name = text(entry.full_name.as_ref())
                .or_else(|| text(entry.name.as_ref()))
                .unwrap_or_default();
            let id = id_key(entry.id.as_ref())
                .or_else(|| id_key(entry.teacher_id.as_ref()))
                .or_else(|| text(entry.email.as_ref()))
                .or_else(|| (!full_name.is_empty()).then(|| full_name.clone()))
                .unwrap_or_else(|| format!("roster-{}", index));
            TeacherSummary {
                id,
                full_name,
                email: text(entry.email.as_ref()),
                employee_code: text(entry.employee_code.as_ref()),
                session_count: entry.session_count,
            }
        })
        .collect()
}

fn session_assignments(session: &Session) -> Vec<Assignment> {
    match &session.teachers {
        None => Vec::new(),
        Some(SessionTeachers::Structured(refs)) => refs
            .iter()
            .map(|teacher| {
                let full_name = text(teacher.full_name.as_ref()).or_else(|| text(teacher.name.as_ref()));
                let key = id_key(teacher.id.as_ref())
                    .or_else(|| id_key(teacher.teacher_id.as_ref()))
                    .or_else(|| full_name.clone())
                    .unwrap_or_else(|| session.session_id.clone());
                Assignment {
                    key,
                    full_name: full_name.unwrap_or_default(),
                    email: text(teacher.email.as_ref()),
                    employee_code: text(teacher.employee_code.as_ref()),
                }
            })
            .collect(),
        Some(SessionTeachers::NameList(raw)) => SessionTeachers::split_names(raw)
            .map(|name| Assignment {
                key: format!("{}::{}", session.session_id, name),
                full_name: name.to_string(),
                email: None,
                employee_code: None,
            })
            .collect(),
    }
}

fn summarize_sessions(sessions: &[Session]) -> Vec<TeacherSummary> {
    let mut roster: Vec<TeacherSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for assignment in sessions.iter().flat_map(session_assignments) {
        match index.get(&assignment.key) {
            Some(&pos) => {
                let entry = &mut roster[pos];
                entry.session_count += 1;
                if entry.full_name.is_empty() {
                    entry.full_name = assignment.full_name;
                }
                if entry.email.is_none() {
                    entry.email = assignment.email;
                }
                if entry.employee_code.is_none() {
                    entry.employee_code = assignment.employee_code;
                }
            }
            None => {
                index.insert(assignment.key.clone(), roster.len());
                roster.push(TeacherSummary {
                    id: assignment.key,
                    full_name: assignment.full_name,
                    email: assignment.email,
                    employee_code: assignment.employee_code,
                    session_count: 1,
                });
            }
        }
    }

    roster
}

/// Resolves the class's teacher roster. Never fails; missing fields degrade.
pub fn aggregate_teachers(source: TeacherSource<'_>) -> Vec<TeacherSummary> {
    let roster = match source {
        TeacherSource::Roster(entries) => summarize_roster(entries),
        TeacherSource::Sessions(sessions) => summarize_sessions(sessions),
    };
    tracing::debug!(teachers = roster.len(), "aggregated teacher roster");
    roster
}

/// Comma-joined teacher names, or the unassigned marker for an empty roster.
pub fn display_teachers(roster: &[TeacherSummary], separator: &str, unassigned: &str) -> String {
    let names: Vec<&str> = roster
        .iter()
        .map(|t| if t.full_name.is_empty() { t.id.as_str() } else { t.full_name.as_str() })
        .collect();
    if names.is_empty() {
        unassigned.to_string()
    } else {
        names.join(separator)
    }
}
