//! Error types for Classgate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Classgate workspace.
///
/// Every failure is returned to the caller as one of these variants. The
/// type is `Clone` and serializable so read views can carry a failed fetch
/// alongside whatever data did arrive.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassgateError {
    /// Input rejected before any collaborator call (e.g. rejection reason length).
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Workflow action attempted from a state that does not allow it.
    #[error("State conflict: class '{class_id}' is {status}")]
    StateConflict { class_id: String, status: String },

    /// A decision for this class is already outstanding.
    #[error("Decision already in flight for class '{class_id}'")]
    DecisionInFlight { class_id: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Read or write against the scheduling collaborator failed.
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassgateError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a StateConflict error
    pub fn state_conflict(class_id: impl Into<String>, status: impl ToString) -> Self {
        Self::StateConflict {
            class_id: class_id.into(),
            status: status.to_string(),
        }
    }

    /// Creates a DecisionInFlight error
    pub fn decision_in_flight(class_id: impl Into<String>) -> Self {
        Self::DecisionInFlight {
            class_id: class_id.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Collaborator error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a StateConflict error
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, Self::StateConflict { .. })
    }

    /// Check if this is a DecisionInFlight error
    pub fn is_decision_in_flight(&self) -> bool {
        matches!(self, Self::DecisionInFlight { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Collaborator error
    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Collaborator(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether re-invoking the failed operation is safe.
    ///
    /// Only reads qualify; a decision write must never be replayed without
    /// re-checking the class's current approval status first.
    pub fn is_retryable_read(&self) -> bool {
        matches!(self, Self::Collaborator(_) | Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ClassgateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ClassgateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ClassgateError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ClassgateError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (for collaborator adapters built on anyhow)
impl From<anyhow::Error> for ClassgateError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, ClassgateError>`.
pub type Result<T> = std::result::Result<T, ClassgateError>;
