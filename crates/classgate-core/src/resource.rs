//! Resource usage summary.

use crate::schedule::{ClassSchedule, Session, non_blank};
use serde::Serialize;
use std::collections::HashMap;

/// A resource and how many sessions use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub name: String,
    pub count: usize,
}

/// Class-level resource view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResourceSummary {
    /// The class names a single resource; no aggregation is done.
    Assigned { name: String },
    /// Distinct session resources, most used first.
    Derived { usages: Vec<ResourceUsage> },
}

impl ResourceSummary {
    /// Summarizes a class's resources.
    ///
    /// Ties in usage keep first-seen order. All distinct resources are kept,
    /// not only the most used one.
    pub fn for_class(class: &ClassSchedule, sessions: &[Session]) -> Self {
        if let Some(name) = class.assigned_resource.as_deref().and_then(non_blank) {
            return ResourceSummary::Assigned {
                name: name.to_string(),
            };
        }
        Self::from_sessions(sessions)
    }

    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut usages: Vec<ResourceUsage> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for label in sessions.iter().filter_map(Session::resource_label) {
            match index.get(label) {
                Some(&pos) => usages[pos].count += 1,
                None => {
                    index.insert(label, usages.len());
                    usages.push(ResourceUsage {
                        name: label.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // stable: equal counts stay in first-seen order
        usages.sort_by(|a, b| b.count.cmp(&a.count));
        ResourceSummary::Derived { usages }
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            ResourceSummary::Assigned { name } => vec![name.as_str()],
            ResourceSummary::Derived { usages } => usages.iter().map(|u| u.name.as_str()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ResourceSummary::Assigned { .. } => false,
            ResourceSummary::Derived { usages } => usages.is_empty(),
        }
    }

    pub fn display(&self, separator: &str, unassigned: &str) -> String {
        if self.is_empty() {
            return unassigned.to_string();
        }
        self.names().join(separator)
    }
}
