//! Hooks file validation command.

use std::path::Path;

use colored::Colorize;
use hook_config::{validate_file, HooksFile, ValidationReport};
use tracing::{debug, info, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "validate_cmd_tests.rs"]
mod tests;

/// Validates `file` and prints one line per hook plus a total.
///
/// The first missing required field is returned as an error and nothing
/// is printed for the hooks before it.
#[instrument]
pub fn execute(file: &HooksFile) -> Result<(), Error> {
    debug!(message = "Validating hooks file", path = ?file.path());

    let report = validate_file(file)?;

    info!(message = "Hooks file is valid", path = ?file.path(), count = report.count());
    print!("{}", format_report(&report, file.path()));
    Ok(())
}

/// Formats a successful validation report.
pub fn format_report(report: &ValidationReport, path: &Path) -> String {
    let mut output = String::new();

    for id in &report.hook_ids {
        output.push_str(&format!("{} Hook '{}' is valid\n", "✓".green(), id));
    }

    for warning in &report.warnings {
        output.push_str(&format!(
            "{} Hook #{}: {}\n",
            "⚠".yellow(),
            warning.hook_index,
            warning.message
        ));
    }

    output.push_str(&format!(
        "{} {} is valid: {} hook(s) checked\n",
        "✓".green().bold(),
        path.display(),
        report.count()
    ));
    output
}
