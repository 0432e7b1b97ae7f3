//! Configuration service implementation.
//!
//! Loads `ReviewConfig` from the configuration file
//! (`~/.config/classgate/config.toml` by default).

use crate::paths::ClassgatePaths;
use classgate_core::config::ReviewConfig;
use classgate_core::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the review configuration.
///
/// A missing file yields the defaults. A file that exists but does not parse
/// or validate is an error; it is never replaced by defaults silently.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; `None` resolves the platform default.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ReviewConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => ClassgatePaths::config_file(),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<ReviewConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Writes `config` via a temporary file and rename, creating parent directories.
    pub fn save_config(&self, config: &ReviewConfig) -> Result<()> {
        config.validate()?;
        let path = self.config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, config.to_toml_string()?)?;
        std::fs::rename(&tmp_path, &path)?;
        self.invalidate_cache();
        tracing::info!(path = %path.display(), "saved review config");
        Ok(())
    }

    fn load_config(&self) -> Result<ReviewConfig> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ReviewConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = ReviewConfig::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded review config");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
