//! Error taxonomy shared by every reasoning tool.
//!
//! Each failure a tool call can produce is one variant of [`ToolError`].
//! [`handle_tool_error`] is the only place a failure becomes user-visible text.

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors that can occur while executing a reasoning tool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// Caller-supplied arguments failed a precondition. Never retried.
    #[error("{0}")]
    Validation(String),

    /// Authorization failure. No current tool raises it.
    #[error("{0}")]
    Permission(String),

    /// Strategy execution failed for a reason other than input validation.
    #[error("{0}")]
    Reasoning(String),

    /// Anything that does not belong to the kinds above.
    #[error("{}", unknown_message(.0))]
    Unknown(Option<String>),
}

fn unknown_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => "Unknown error",
    }
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn reasoning(message: impl Into<String>) -> Self {
        Self::Reasoning(message.into())
    }

    /// True for failures that must propagate unchanged to the tool boundary.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<anyhow::Error> for ToolError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unknown(Some(format!("{err:#}")))
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unknown(Some(err.to_string()))
    }
}

/// Render any tool failure as the prefixed message shown to the caller.
pub fn handle_tool_error(error: &ToolError) -> String {
    match error {
        ToolError::Validation(message) => format!("Validation error: {message}"),
        ToolError::Permission(message) => format!("Permission denied: {message}"),
        ToolError::Reasoning(message) => format!("Reasoning error: {message}"),
        ToolError::Unknown(_) => format!("Error: {error}"),
    }
}
