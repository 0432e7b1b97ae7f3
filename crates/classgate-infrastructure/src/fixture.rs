//! JSON fixture files.
//!
//! A fixture holds class snapshots in the collaborator's wire shape and seeds
//! [`InMemorySchedulingService`](crate::InMemorySchedulingService).

use classgate_core::error::Result;
use classgate_core::schedule::{ClassSchedule, SessionListing};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One class with its sessions and week grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFixture {
    pub class: ClassSchedule,
    #[serde(flatten)]
    pub listing: SessionListing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub classes: Vec<ClassFixture>,
}

impl FixtureFile {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses a fixture file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let fixture = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            classes = fixture.classes.len(),
            "loaded fixture"
        );
        Ok(fixture)
    }

    /// Writes the fixture via a temporary file and rename.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, path).await?;
        tracing::debug!(path = %path.display(), "saved fixture");
        Ok(())
    }
}
