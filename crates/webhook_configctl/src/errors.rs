use hook_config::HookConfigError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the webhook-configctl CLI.
///
/// Hooks file errors are passed through unchanged so the user sees the
/// path, index, or field they are about.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading, writing, or validating the hooks file failed.
    #[error(transparent)]
    HookConfig(#[from] HookConfigError),

    /// An interactive prompt could not be completed.
    ///
    /// Returned when the terminal is unavailable, stdin is closed, or an
    /// answer is out of range.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// An add-flow step ran before a step it depends on.
    #[error("Add step '{step}' ran before '{dependency}'")]
    StepOrder {
        step: &'static str,
        dependency: &'static str,
    },

    /// Failed to flush the standard output buffer.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Prompt(e.to_string())
    }
}
