pub mod decide;
pub mod summary;

use anyhow::{Context, Result};
use classgate_core::config::ReviewConfig;
use classgate_infrastructure::{ConfigService, FixtureFile, InMemorySchedulingService};
use std::path::Path;
use std::sync::Arc;

pub fn load_config(path: Option<&Path>) -> Result<ReviewConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    service.get_config().context("Failed to load config")
}

pub async fn open_service(fixture: &Path, config: &ReviewConfig) -> Result<Arc<InMemorySchedulingService>> {
    let file = FixtureFile::load(fixture)
        .await
        .with_context(|| format!("Failed to load fixture {}", fixture.display()))?;
    let service = InMemorySchedulingService::from_fixture(file)
        .with_reason_policy(config.rejection_reason.clone());
    Ok(Arc::new(service))
}

pub async fn write_back(service: &InMemorySchedulingService, fixture: &Path) -> Result<()> {
    service
        .snapshot()
        .await
        .save(fixture)
        .await
        .with_context(|| format!("Failed to write fixture {}", fixture.display()))?;
    println!("  ✓ Updated {}", fixture.display());
    Ok(())
}
