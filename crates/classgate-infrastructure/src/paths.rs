//! Path resolution for classgate configuration files.
//!
//! ```text
//! ~/.config/classgate/         # Config directory (platform config dir)
//! └── config.toml              # ReviewConfig
//! ```

use classgate_core::error::{ClassgateError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "classgate";
const CONFIG_FILE: &str = "config.toml";

pub struct ClassgatePaths;

impl ClassgatePaths {
    /// Returns the classgate configuration directory.
    ///
    /// # Errors
    ///
    /// `Config` when the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ClassgateError::config("Cannot find config directory"))
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
