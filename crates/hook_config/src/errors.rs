//! Hook configuration error types.
//!
//! Domain-specific errors for reading, writing, and validating the hooks
//! file.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Hook configuration errors.
///
/// These errors occur when the hooks file is read, parsed, rewritten, or
/// validated. Hook and argument indexes are 1-based so they can be shown
/// to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HookConfigError {
    #[error("Hooks file not found: {path}: {reason}")]
    FileNotFound { path: String, reason: String },

    #[error("Unable to read hooks file {path}: {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("Invalid YAML in {path}: {reason}")]
    ParseError { path: String, reason: String },

    #[error("Failed to write hooks file {path}: {reason}")]
    WriteError { path: String, reason: String },

    #[error("Failed to serialize hooks: {reason}")]
    SerializeError { reason: String },

    #[error("Hook #{hook_index} failed validation: missing required field '{field}'")]
    MissingField { hook_index: usize, field: String },

    #[error(
        "Hook #{hook_index} failed validation: argument #{argument_index} is missing '{field}'"
    )]
    MissingArgumentField {
        hook_index: usize,
        argument_index: usize,
        field: String,
    },
}

/// Result type alias for hook configuration operations.
pub type HookConfigResult<T> = Result<T, HookConfigError>;
