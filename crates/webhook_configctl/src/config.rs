//! Configuration for the webhook-configctl CLI.
//!
//! The only setting is where the hooks file lives. It defaults to
//! `webhook.yaml` in the current directory and can be overridden per
//! invocation with `--file`.

use std::path::PathBuf;

use hook_config::HooksFile;
use tracing::debug;

/// Default hooks file name
pub const DEFAULT_HOOKS_FILENAME: &str = "webhook.yaml";

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV_VAR: &str = "WEBHOOK_CONFIGCTL_LOG";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Resolves the path to the hooks file.
///
/// # Behaviour
///
/// - If `path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `path` is `None`, returns `./webhook.yaml` in the current directory
/// - Falls back to `.` if the working directory cannot be determined
pub fn get_hooks_path(path: Option<&str>) -> PathBuf {
    if let Some(path) = path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_HOOKS_FILENAME)
    }
}

/// Returns the hooks file handle both commands operate on.
pub fn hooks_file(path: Option<&str>) -> HooksFile {
    let path = get_hooks_path(path);
    debug!(message = "Using hooks file", path = ?path);
    HooksFile::new(path)
}
