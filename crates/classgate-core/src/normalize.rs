//! Day and time-slot normalization.
//!
//! Raw weekday integers are folded into `0..=6` (0 = Sunday), deduplicated and
//! sorted. Time-slot descriptors are resolved into a single display label.

use crate::schedule::{TimeSlotRef, non_blank};
use chrono::Weekday;
use serde::Serialize;
use std::fmt;

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Folds any integer into the canonical `0..=6` range.
pub fn canonical_day(value: i64) -> u8 {
    value.rem_euclid(7) as u8
}

/// Canonical, deduplicated, ascending weekday numbers.
pub fn normalize_days(days: &[i64]) -> Vec<u8> {
    let mut out: Vec<u8> = days.iter().copied().map(canonical_day).collect();
    out.sort_unstable();
    out.dedup();
    out
}

pub fn day_label(day: u8) -> &'static str {
    DAY_LABELS[usize::from(day % 7)]
}

pub fn weekday_from_index(day: u8) -> Weekday {
    match day % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// How a class's meeting days should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ScheduleDays {
    /// Normalized weekday numbers.
    Days(Vec<u8>),
    /// Free-text summary, shown verbatim.
    FreeText(String),
    Unscheduled,
}

impl ScheduleDays {
    pub fn resolve(days: Option<&[i64]>, fallback: Option<&str>) -> Self {
        let normalized = days.map(normalize_days).unwrap_or_default();
        if !normalized.is_empty() {
            return ScheduleDays::Days(normalized);
        }
        match fallback.and_then(non_blank) {
            Some(text) => ScheduleDays::FreeText(text.to_string()),
            None => ScheduleDays::Unscheduled,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        match self {
            ScheduleDays::Days(days) => days.iter().map(|d| day_label(*d)).collect(),
            _ => Vec::new(),
        }
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        match self {
            ScheduleDays::Days(days) => days.iter().map(|d| weekday_from_index(*d)).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        !matches!(self, ScheduleDays::Unscheduled)
    }

    /// Renders the summary with the given separator and unscheduled marker.
    pub fn display(&self, separator: &str, unscheduled_label: &str) -> String {
        match self {
            ScheduleDays::Days(_) => self.labels().join(separator),
            ScheduleDays::FreeText(text) => text.clone(),
            ScheduleDays::Unscheduled => unscheduled_label.to_string(),
        }
    }
}

impl fmt::Display for ScheduleDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(", ", "Unscheduled"))
    }
}

/// Resolves a session's time-slot label.
///
/// Tries, in order: explicit display name, label, nested display name, then a
/// `start<sep>end` pair from the nested info. Returns `None` when nothing
/// resolves; the slot then counts as absent.
pub fn slot_label(slot: Option<&TimeSlotRef>, range_separator: &str) -> Option<String> {
    let slot = slot?;
    let info = slot.info.as_ref();

    let named = [
        slot.display_name.as_deref(),
        slot.label.as_deref(),
        info.and_then(|i| i.display_name.as_deref()),
    ]
    .into_iter()
    .flatten()
    .find_map(non_blank);
    if let Some(name) = named {
        return Some(name.to_string());
    }

    let info = info?;
    let start = info.start_time.as_deref().and_then(non_blank)?;
    let end = info.end_time.as_deref().and_then(non_blank)?;
    Some(format!("{}{}{}", start, range_separator, end))
}
