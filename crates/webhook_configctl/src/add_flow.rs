//! The interactive add flow.
//!
//! Collecting a hook is an ordered list of [`AddStep`]s. Each step asks its
//! questions through a [`Prompter`] and fills in part of a [`HookDraft`].
//! Steps declare which earlier steps they read from; running a step before
//! its dependencies is an error rather than a silent empty default.

use colored::Colorize;
use hook_config::{
    parent_directory, Argument, ArgumentSource, Hook, TriggerRule, TriggerRuleTemplate,
};
use tracing::{debug, instrument};

use crate::{
    errors::Error,
    prompt::{InputRequest, Prompter},
};

#[cfg(test)]
#[path = "add_flow_tests.rs"]
mod tests;

/// Menu label for including command output in the response.
pub const INCLUDE_OUTPUT_LABEL: &str = "true - return the command output (useful for debugging)";

/// Menu label for not returning command output.
pub const EXCLUDE_OUTPUT_LABEL: &str = "false - return no output (recommended for production)";

/// One stage of the add flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddStep {
    Id,
    ExecuteCommand,
    WorkingDirectory,
    IncludeOutput,
    Arguments,
    TriggerRule,
}

impl AddStep {
    /// The steps in the order they are asked.
    pub const SEQUENCE: [AddStep; 6] = [
        AddStep::Id,
        AddStep::ExecuteCommand,
        AddStep::WorkingDirectory,
        AddStep::IncludeOutput,
        AddStep::Arguments,
        AddStep::TriggerRule,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AddStep::Id => "id",
            AddStep::ExecuteCommand => "execute-command",
            AddStep::WorkingDirectory => "working-directory",
            AddStep::IncludeOutput => "include-output",
            AddStep::Arguments => "arguments",
            AddStep::TriggerRule => "trigger-rule",
        }
    }

    /// Steps whose answers this step reads.
    pub fn depends_on(self) -> &'static [AddStep] {
        match self {
            AddStep::WorkingDirectory => &[AddStep::ExecuteCommand],
            _ => &[],
        }
    }

    fn run(self, draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
        match self {
            AddStep::Id => ask_id(draft, prompter),
            AddStep::ExecuteCommand => ask_execute_command(draft, prompter),
            AddStep::WorkingDirectory => ask_working_directory(draft, prompter),
            AddStep::IncludeOutput => ask_include_output(draft, prompter),
            AddStep::Arguments => ask_arguments(draft, prompter),
            AddStep::TriggerRule => ask_trigger_rule(draft, prompter),
        }
    }
}

/// A hook under construction plus the steps that have filled it in.
#[derive(Debug, Clone, PartialEq)]
pub struct HookDraft {
    hook: Hook,
    completed: Vec<AddStep>,
}

impl HookDraft {
    pub fn new() -> Self {
        Self {
            hook: Hook::new("", ""),
            completed: Vec::new(),
        }
    }

    pub fn hook(&self) -> &Hook {
        &self.hook
    }

    pub fn is_completed(&self, step: AddStep) -> bool {
        self.completed.contains(&step)
    }

    /// Runs `step` after checking its dependencies have completed.
    pub fn apply(&mut self, step: AddStep, prompter: &mut dyn Prompter) -> Result<(), Error> {
        if let Some(missing) = step
            .depends_on()
            .iter()
            .find(|dependency| !self.is_completed(**dependency))
        {
            return Err(Error::StepOrder {
                step: step.name(),
                dependency: missing.name(),
            });
        }

        debug!(message = "Running add step", step = step.name());
        step.run(self, prompter)?;
        self.completed.push(step);
        Ok(())
    }

    pub fn into_hook(self) -> Hook {
        self.hook
    }
}

impl Default for HookDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs every step in order and returns the collected hook.
#[instrument(skip(prompter))]
pub fn run_add_flow(prompter: &mut dyn Prompter) -> Result<Hook, Error> {
    let mut draft = HookDraft::new();
    for step in AddStep::SEQUENCE {
        draft.apply(step, prompter)?;
    }
    Ok(draft.into_hook())
}

/// Asks until a non-blank answer is given.
fn ask_required(
    prompter: &mut dyn Prompter,
    request: &InputRequest,
    field: &str,
) -> Result<String, Error> {
    loop {
        let answer = prompter.input(request)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        prompter.note(&format!("  {} {field} cannot be empty.", "Error:".red()));
    }
}

fn pick<T: Copy>(items: &[T], index: usize) -> Result<T, Error> {
    items
        .get(index)
        .copied()
        .ok_or_else(|| Error::Prompt(format!("selection {index} is out of range")))
}

fn ask_id(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    prompter.note(&format!("{}", "Required fields".bold()));
    draft.hook.id = ask_required(prompter, &InputRequest::text("Hook id"), "Id")?;
    Ok(())
}

fn ask_execute_command(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    draft.hook.execute_command = ask_required(
        prompter,
        &InputRequest::path("Path of the command to execute"),
        "Command",
    )?;
    Ok(())
}

fn ask_working_directory(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    prompter.note(&format!("\n{}", "Working directory".bold()));

    let default_dir = parent_directory(&draft.hook.execute_command);
    let message = format!("Use a custom working directory? (default: {default_dir})");
    if !prompter.confirm(&message, false)? {
        return Ok(());
    }

    let request = InputRequest::path("Command working directory").with_default(default_dir);
    let dir = prompter.input(&request)?;
    let dir = dir.trim();
    draft.hook.command_working_directory = (!dir.is_empty()).then(|| dir.to_string());
    Ok(())
}

fn ask_include_output(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    prompter.note(&format!("\n{}", "Response output".bold()));

    let options = [INCLUDE_OUTPUT_LABEL, EXCLUDE_OUTPUT_LABEL];
    let choice = prompter.select(
        "Return the command output to the webhook caller?",
        &options,
        0,
    )?;
    draft.hook.include_output_in_response = pick(&[true, false], choice)?;
    Ok(())
}

fn ask_arguments(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    prompter.note(&format!("\n{}", "Command arguments".bold()));
    prompter.note("  Arguments pass values from the webhook request to your command,");
    prompter.note("  such as the Git branch, repository name or commit id.");

    if !prompter.confirm("Pass arguments to the command?", false)? {
        return Ok(());
    }

    let labels: Vec<&str> = ArgumentSource::ALL.iter().map(|s| s.label()).collect();
    loop {
        prompter.note(&format!("\n{}", "New argument".bold()));

        let name = ask_required(
            prompter,
            &InputRequest::text("Argument name (e.g. branch, repository, commit_id)"),
            "Argument name",
        )?;
        let source = pick(
            &ArgumentSource::ALL,
            prompter.select("Where does the value come from?", &labels, 0)?,
        )?;
        let env_name = prompter.input(&InputRequest::text(
            "Environment variable name (optional, e.g. GIT_BRANCH)",
        ))?;

        draft
            .hook
            .pass_arguments
            .push(Argument::new(name, source).with_env_name(env_name.trim()));

        if !prompter.confirm("Add another argument?", false)? {
            return Ok(());
        }
    }
}

fn ask_trigger_rule(draft: &mut HookDraft, prompter: &mut dyn Prompter) -> Result<(), Error> {
    prompter.note(&format!("\n{}", "Trigger rule".bold()));
    prompter.note("  Trigger rules decide which requests may run the hook.");

    if !prompter.confirm("Configure a trigger rule?", false)? {
        return Ok(());
    }

    let labels: Vec<&str> = TriggerRuleTemplate::ALL
        .iter()
        .map(|t| t.label())
        .collect();
    let template = pick(
        &TriggerRuleTemplate::ALL,
        prompter.select("Rule type", &labels, 0)?,
    )?;

    let rule = match template.canned_rule() {
        Some(rule) => {
            prompter.note("  Replace the placeholder values in the file before going live.");
            rule
        }
        None => TriggerRule::Custom {
            text: prompter.multiline("Custom trigger rule")?,
        },
    };
    debug!(message = "Trigger rule selected", kind = rule.kind_name());
    draft.hook.trigger_rule = Some(rule);
    Ok(())
}
