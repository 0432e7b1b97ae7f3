use crate::error::{ClassgateError, Result};
use serde::{Deserialize, Serialize};

/// Bounds on a rejection reason, counted in characters after trimming.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReasonPolicy {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_min_chars() -> usize {
    10
}

fn default_max_chars() -> usize {
    500
}

impl Default for ReasonPolicy {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
        }
    }
}

/// Labels and separators used when rendering summaries as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    #[serde(default = "default_list_separator")]
    pub list_separator: String,
    #[serde(default = "default_unscheduled_label")]
    pub unscheduled_label: String,
    #[serde(default = "default_unassigned_label")]
    pub unassigned_label: String,
    #[serde(default = "default_slot_range_separator")]
    pub slot_range_separator: String,
}

fn default_list_separator() -> String {
    ", ".to_string()
}

fn default_unscheduled_label() -> String {
    "Unscheduled".to_string()
}

fn default_unassigned_label() -> String {
    "Unassigned".to_string()
}

fn default_slot_range_separator() -> String {
    "–".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            list_separator: default_list_separator(),
            unscheduled_label: default_unscheduled_label(),
            unassigned_label: default_unassigned_label(),
            slot_range_separator: default_slot_range_separator(),
        }
    }
}

/// Root configuration (`config.toml`).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewConfig {
    #[serde(default)]
    pub rejection_reason: ReasonPolicy,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl ReviewConfig {
    /// Parses a TOML document and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReviewConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let policy = &self.rejection_reason;
        if policy.min_chars == 0 {
            return Err(ClassgateError::config(
                "rejection_reason.min_chars must be at least 1",
            ));
        }
        if policy.min_chars > policy.max_chars {
            return Err(ClassgateError::config(format!(
                "rejection_reason.min_chars ({}) exceeds max_chars ({})",
                policy.min_chars, policy.max_chars
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReviewConfig::default();
        assert_eq!(config.rejection_reason.min_chars, 10);
        assert_eq!(config.rejection_reason.max_chars, 500);
        assert_eq!(config.display.unscheduled_label, "Unscheduled");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ReviewConfig::from_toml_str(
            r#"
            [display]
            list_separator = " / "
            "#,
        )
        .unwrap();
        assert_eq!(config.display.list_separator, " / ");
        assert_eq!(config.display.unassigned_label, "Unassigned");
        assert_eq!(config.rejection_reason, ReasonPolicy::default());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = ReviewConfig::from_toml_str(
            r#"
            [rejection_reason]
            min_chars = 50
            max_chars = 20
            "#,
        )
        .unwrap_err();
        assert!(err.is_config());
    }
}
