//! Skeleton hooks file.

use tracing::info;

use crate::{document::HooksFile, errors::HookConfigResult, hook::Hook};

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

/// The example hook written by [`write_template`].
pub fn template_hook() -> Hook {
    let mut hook = Hook::new("demo", "/opt/deploy.sh");
    hook.command_working_directory = Some("/opt".to_string());
    hook
}

/// Writes the skeleton hooks file, replacing whatever is at the path.
///
/// This is destructive: existing hooks are discarded, not merged.
pub fn write_template(file: &HooksFile) -> HookConfigResult<()> {
    file.write_all(&[template_hook()])?;

    info!(message = "Template written", path = ?file.path());
    Ok(())
}
