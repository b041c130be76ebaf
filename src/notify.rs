//! User-facing notifications.
//!
//! Informational only: the UI collaborator decides how to render
//! them (the original surface showed them as transient snackbars).

use serde::{Deserialize, Serialize};

use crate::service::PantryError;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A transient message for the user, tagged with a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Maps a failed mutation to its notification: validation problems
    /// are warnings with their own message, store problems become the
    /// generic "Failed to {action} item" error.
    pub fn for_failure(action: &str, err: &PantryError) -> Self {
        match err {
            PantryError::InvalidName | PantryError::InvalidQuantity => {
                Self::warning(err.to_string())
            }
            PantryError::Store(_) => Self::error(format!("Failed to {} item", action)),
        }
    }
}
