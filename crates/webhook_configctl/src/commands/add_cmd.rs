//! Hook creation command module.
//!
//! `add` walks the user through the add flow and appends the resulting hook
//! to the hooks file. `add --template` instead overwrites the hooks file with
//! a commented skeleton.

use std::path::Path;

use clap::Args;
use colored::Colorize;
use hook_config::{write_template, Hook, HooksFile};
use tracing::{info, instrument};

use crate::{add_flow::run_add_flow, errors::Error, prompt::Prompter};

#[cfg(test)]
#[path = "add_cmd_tests.rs"]
mod tests;

/// Placeholder for the server address in the printed sample request.
const SERVER_PLACEHOLDER: &str = "<your-server-ip-or-domain>";

/// Command-line arguments for the add command.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Write a commented skeleton hooks file instead of prompting.
    ///
    /// This replaces the whole file; existing hooks are lost.
    #[arg(long)]
    pub template: bool,
}

/// Executes the add command against `file`.
#[instrument(skip(prompter))]
pub fn execute(args: &AddArgs, file: &HooksFile, prompter: &mut dyn Prompter) -> Result<(), Error> {
    if args.template {
        generate_template(file)
    } else {
        add_hook(file, prompter)
    }
}

fn generate_template(file: &HooksFile) -> Result<(), Error> {
    write_template(file)?;

    println!(
        "{} Template written to {} {}",
        "✓".green(),
        file.path().display(),
        "(any previous content was replaced)".dimmed()
    );
    Ok(())
}

fn add_hook(file: &HooksFile, prompter: &mut dyn Prompter) -> Result<(), Error> {
    let hook = run_add_flow(prompter)?;
    let count = file.append(hook.clone())?;

    info!(message = "Hook added", id = %hook.id, path = ?file.path(), count = count);
    print!("{}", format_summary(&hook, file.path(), count));
    Ok(())
}

/// Formats the summary printed after a hook is added, including a sample
/// `curl` request that triggers it.
pub fn format_summary(hook: &Hook, path: &Path, count: usize) -> String {
    let mut output = String::new();
    let separator = "-".repeat(40);

    output.push_str(&format!(
        "\n{} Hook added to {} ({} in file)\n",
        "✓".green(),
        path.display(),
        hook_count(count)
    ));
    output.push_str(&format!("{separator}\n"));
    output.push_str(&format!("{}: {}\n", "ID".bold(), hook.id));
    output.push_str(&format!("{}: {}\n", "Command".bold(), hook.execute_command));
    if let Some(dir) = &hook.command_working_directory {
        output.push_str(&format!("{}: {}\n", "Working directory".bold(), dir));
    }
    output.push_str(&format!(
        "{}: {}\n",
        "Return output".bold(),
        hook.include_output_in_response
    ));

    if !hook.pass_arguments.is_empty() {
        output.push_str(&format!("{}:\n", "Arguments".bold()));
        for argument in &hook.pass_arguments {
            output.push_str(&format!("  - {} ({})", argument.name, argument.source));
            if let Some(env_name) = &argument.env_name {
                output.push_str(&format!(", env {env_name}"));
            }
            output.push('\n');
        }
    }

    if let Some(rule) = &hook.trigger_rule {
        output.push_str(&format!("{}: {}\n", "Trigger rule".bold(), rule.kind_name()));
    }
    output.push_str(&format!("{separator}\n"));

    let url = format!("http://{SERVER_PLACEHOLDER}/hooks/{}", hook.id);
    output.push_str(&format!(
        "\n{}\n",
        "Trigger the hook with a POST request to:".bold()
    ));
    output.push_str(&format!("  {}\n\n", url.bright_cyan()));
    output.push_str("For example, with curl:\n");
    output.push_str("  curl -X POST -H \"Content-Type: application/json\" \\\n");
    output.push_str("    -d '{\"your_key\": \"your_value\"}' \\\n");
    output.push_str(&format!("    {url}\n\n"));
    output.push_str(&format!(
        "Replace {} with the address of your webhook server.\n",
        SERVER_PLACEHOLDER.dimmed()
    ));

    output
}

fn hook_count(count: usize) -> String {
    if count == 1 {
        "1 hook".to_string()
    } else {
        format!("{count} hooks")
    }
}
