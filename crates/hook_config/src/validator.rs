//! Structural validation of hook records.
//!
//! Validation stops at the first missing required field. Checks that are
//! only advisory (duplicate ids, unknown argument sources) are collected as
//! [`ValidationWarning`]s and never fail a file.

use std::collections::HashSet;
use tracing::{debug, warn};

use crate::{
    document::HooksFile,
    errors::{HookConfigError, HookConfigResult},
    hook::{ArgumentSource, Hook},
};

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Outcome of a successful validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Ids of the validated hooks, in file order.
    pub hook_ids: Vec<String>,
    /// Non-blocking findings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Number of hooks that passed validation.
    pub fn count(&self) -> usize {
        self.hook_ids.len()
    }
}

/// A non-blocking finding about a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based index of the hook the warning is about.
    pub hook_index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Checks the required fields of one hook.
///
/// `hook_index` is 1-based and only used for error reporting.
pub fn validate_hook(hook: &Hook, hook_index: usize) -> HookConfigResult<()> {
    if hook.id.is_empty() {
        return Err(HookConfigError::MissingField {
            hook_index,
            field: "id".to_string(),
        });
    }

    if hook.execute_command.is_empty() {
        return Err(HookConfigError::MissingField {
            hook_index,
            field: "execute-command".to_string(),
        });
    }

    for (position, argument) in hook.pass_arguments.iter().enumerate() {
        let missing = if argument.name.is_empty() {
            Some("name")
        } else if argument.source.is_empty() {
            Some("source")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(HookConfigError::MissingArgumentField {
                hook_index,
                argument_index: position + 1,
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates `hooks` in order, failing on the first invalid hook.
pub fn validate_hooks(hooks: &[Hook]) -> HookConfigResult<ValidationReport> {
    let mut report = ValidationReport::default();
    let mut seen_ids = HashSet::new();

    for (position, hook) in hooks.iter().enumerate() {
        let hook_index = position + 1;
        validate_hook(hook, hook_index)?;
        debug!(message = "Hook passed validation", id = %hook.id, index = hook_index);

        if !seen_ids.insert(hook.id.as_str()) {
            report.warnings.push(ValidationWarning {
                hook_index,
                message: format!("id '{}' is used by an earlier hook", hook.id),
            });
        }

        for (argument_position, argument) in hook.pass_arguments.iter().enumerate() {
            if argument.source_kind().is_none() {
                report.warnings.push(ValidationWarning {
                    hook_index,
                    message: format!(
                        "argument #{} has unrecognised source '{}' (expected one of: {})",
                        argument_position + 1,
                        argument.source,
                        known_sources()
                    ),
                });
            }
        }

        report.hook_ids.push(hook.id.clone());
    }

    for warning in &report.warnings {
        warn!(message = "Validation warning", hook_index = warning.hook_index, warning = %warning.message);
    }

    Ok(report)
}

fn known_sources() -> String {
    ArgumentSource::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads `file` and validates every hook in it.
pub fn validate_file(file: &HooksFile) -> HookConfigResult<ValidationReport> {
    let hooks = file.read()?;
    validate_hooks(&hooks)
}
