//! Prompting abstraction for the interactive add flow.
//!
//! The add flow only talks to a [`Prompter`]. [`TerminalPrompter`] drives a
//! real terminal through `dialoguer`; tests supply canned answers instead.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::{completion::PathCompletion, errors::Error};

/// A free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRequest {
    pub message: String,
    /// Pre-filled answer used when the user just presses enter.
    pub default: Option<String>,
    /// Offer filesystem path completion.
    pub complete_paths: bool,
}

impl InputRequest {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            complete_paths: false,
        }
    }

    pub fn path(message: impl Into<String>) -> Self {
        Self {
            complete_paths: true,
            ..Self::text(message)
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Source of answers for the add flow.
pub trait Prompter {
    /// Asks for free text. May return an empty string.
    fn input(&mut self, request: &InputRequest) -> Result<String, Error>;

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, Error>;

    /// Asks the user to pick one of `options`; returns its index.
    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize, Error>;

    /// Asks for several lines of text, returned joined with `\n`.
    fn multiline(&mut self, message: &str) -> Result<String, Error>;

    /// Shows informational text such as section headings.
    fn note(&mut self, text: &str);
}

/// [`Prompter`] backed by the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, request: &InputRequest) -> Result<String, Error> {
        let completion = PathCompletion;
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(request.message.as_str())
            .allow_empty(true);
        if let Some(default) = &request.default {
            input = input.default(default.clone());
        }
        if request.complete_paths {
            input = input.completion_with(&completion);
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, Error> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize, Error> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default)
            .interact()?)
    }

    fn multiline(&mut self, message: &str) -> Result<String, Error> {
        println!(
            "{} {}",
            message.bold(),
            "(finish with an empty line)".dimmed()
        );

        let stdin = io::stdin();
        let mut lines = Vec::new();
        loop {
            print!("{} ", "|".dimmed());
            io::stdout().flush().map_err(|_| Error::StdOutFlushFailed)?;

            let mut buffer = String::new();
            let read = stdin
                .lock()
                .read_line(&mut buffer)
                .map_err(|e| Error::Prompt(e.to_string()))?;
            let line = buffer.trim_end_matches(|c| c == '\r' || c == '\n');
            if read == 0 || line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        Ok(lines.join("\n"))
    }

    fn note(&mut self, text: &str) {
        println!("{text}");
    }
}
