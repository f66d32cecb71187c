//! Reading and writing the hooks file.
//!
//! The file is rewritten wholesale on every change. Rendering is done by
//! hand so each field can carry a fixed explanatory comment; values are
//! still emitted through `serde_yaml` so anything that needs quoting is
//! quoted.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    errors::{HookConfigError, HookConfigResult},
    hook::Hook,
};

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// Comment written at the top of every hooks file.
pub const FILE_HEADER: &str = "# webhook configuration file";

/// Handle on a hooks file at an explicit path.
///
/// Every operation reads or writes the file at [`HooksFile::path`]; nothing
/// is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksFile {
    path: PathBuf,
}

impl HooksFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the file does not exist
    /// - `FileAccessError` if it exists but cannot be read
    /// - `ParseError` if it is not a list of hook records
    pub fn read(&self) -> HookConfigResult<Vec<Hook>> {
        debug!(message = "Reading hooks file", path = ?self.path);

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => HookConfigError::FileNotFound {
                path: self.display_path(),
                reason: e.to_string(),
            },
            _ => HookConfigError::FileAccessError {
                path: self.display_path(),
                reason: e.to_string(),
            },
        })?;

        parse_hooks(&content).map_err(|e| HookConfigError::ParseError {
            path: self.display_path(),
            reason: e.to_string(),
        })
    }

    /// Reads the file, treating a missing file as an empty list.
    ///
    /// A file that exists but cannot be read or parsed is still an error, so
    /// a corrupt file is never silently replaced.
    pub fn read_or_empty(&self) -> HookConfigResult<Vec<Hook>> {
        match self.read() {
            Err(HookConfigError::FileNotFound { .. }) => {
                debug!(message = "Hooks file does not exist yet", path = ?self.path);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Appends `hook` to the end of the file and rewrites it.
    ///
    /// Returns the number of hooks in the file after the append.
    pub fn append(&self, hook: Hook) -> HookConfigResult<usize> {
        let mut hooks = self.read_or_empty()?;
        hooks.push(hook);

        self.write_all(&hooks)?;

        info!(message = "Hook appended", path = ?self.path, count = hooks.len());
        Ok(hooks.len())
    }

    /// Replaces the whole file with the rendered `hooks`.
    pub fn write_all(&self, hooks: &[Hook]) -> HookConfigResult<()> {
        let content = render_document(hooks)?;
        debug!(message = "Writing hooks file", path = ?self.path, bytes = content.len());

        fs::write(&self.path, content).map_err(|e| HookConfigError::WriteError {
            path: self.display_path(),
            reason: e.to_string(),
        })
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses hooks file content.
///
/// Empty and comment-only documents are an empty list.
pub fn parse_hooks(content: &str) -> Result<Vec<Hook>, serde_yaml::Error> {
    let has_content = content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(Vec::new());
    }

    let hooks: Option<Vec<Hook>> = serde_yaml::from_str(content)?;
    Ok(hooks.unwrap_or_default())
}

/// Renders `hooks` as a commented hooks file.
pub fn render_document(hooks: &[Hook]) -> HookConfigResult<String> {
    let mut output = String::new();
    output.push_str(FILE_HEADER);
    output.push('\n');

    for (index, hook) in hooks.iter().enumerate() {
        // A trailing `|+` block scalar already ends in a blank line, and
        // another one would become part of its value.
        if index > 0 && !output.ends_with("\n\n") {
            output.push('\n');
        }
        render_hook(&mut output, hook)?;
    }

    Ok(output)
}

fn render_hook(output: &mut String, hook: &Hook) -> HookConfigResult<()> {
    push_list_item(output, &render_field("id", &hook.id)?);

    output.push_str("  # command to execute\n");
    push_indented(output, &render_field("execute-command", &hook.execute_command)?);

    if let Some(dir) = hook.command_working_directory.as_deref() {
        if !dir.is_empty() {
            output.push_str("  # working directory for the command\n");
            push_indented(output, &render_field("command-working-directory", dir)?);
        }
    }

    output.push_str("  # whether to return the command output to the caller\n");
    push_indented(
        output,
        &render_field(
            "include-command-output-in-response",
            &hook.include_output_in_response,
        )?,
    );

    if hook.pass_arguments.is_empty() {
        output.push_str("  # arguments passed to the command (optional)\n");
        output.push_str("  pass-arguments-to-command: []\n");
    } else {
        output.push_str("  # arguments passed to the command\n");
        push_indented(
            output,
            &render_field("pass-arguments-to-command", &hook.pass_arguments)?,
        );
    }

    match &hook.trigger_rule {
        Some(rule) => {
            output.push_str("  # trigger rule\n");
            push_indented(output, &render_field("trigger-rule", rule)?);
        }
        None => {
            output.push_str("  # trigger rule (optional)\n");
            output.push_str("  trigger-rule: {}\n");
        }
    }

    Ok(())
}

/// Serializes `key: value` as a standalone YAML mapping.
fn render_field<T: Serialize + ?Sized>(key: &str, value: &T) -> HookConfigResult<String> {
    let value = serde_yaml::to_value(value).map_err(|e| HookConfigError::SerializeError {
        reason: e.to_string(),
    })?;

    let mut field = Mapping::new();
    field.insert(Value::String(key.to_string()), value);

    serde_yaml::to_string(&field).map_err(|e| HookConfigError::SerializeError {
        reason: e.to_string(),
    })
}

/// Appends `block` as the start of a list item: `- ` before the first line,
/// the remaining lines indented under it.
fn push_list_item(output: &mut String, block: &str) {
    let (first, rest) = block.split_once('\n').unwrap_or((block, ""));
    output.push_str("- ");
    output.push_str(first);
    output.push('\n');
    push_indented(output, rest);
}

/// Appends `block` indented by two spaces. Blank lines stay blank so
/// literal block scalars keep their content.
fn push_indented(output: &mut String, block: &str) {
    for line in block.lines() {
        if !line.is_empty() {
            output.push_str("  ");
            output.push_str(line);
        }
        output.push('\n');
    }
}
