//! Scripted prompter for driving the add flow in tests.

use std::collections::VecDeque;

use crate::{
    errors::Error,
    prompt::{InputRequest, Prompter},
};

/// One canned answer.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(&'static str),
    /// Press enter on an input, accepting its default.
    Default,
    Confirm(bool),
    Choice(usize),
    Lines(&'static str),
}

/// Replays canned answers in order and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub inputs: Vec<InputRequest>,
    pub questions: Vec<String>,
    pub notes: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, expected: &str) -> Result<Answer, Error> {
        self.answers
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no scripted answer left for {expected}")))
    }

    fn mismatch(expected: &str, answer: Answer) -> Error {
        Error::Prompt(format!("expected {expected} answer, got {answer:?}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, request: &InputRequest) -> Result<String, Error> {
        self.inputs.push(request.clone());
        self.questions.push(request.message.clone());
        match self.next("input")? {
            Answer::Text(text) => Ok(text.to_string()),
            Answer::Default => Ok(request.default.clone().unwrap_or_default()),
            other => Err(Self::mismatch("input", other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool, Error> {
        self.questions.push(message.to_string());
        match self.next("confirm")? {
            Answer::Confirm(value) => Ok(value),
            other => Err(Self::mismatch("confirm", other)),
        }
    }

    fn select(&mut self, message: &str, _options: &[&str], _default: usize) -> Result<usize, Error> {
        self.questions.push(message.to_string());
        match self.next("select")? {
            Answer::Choice(index) => Ok(index),
            other => Err(Self::mismatch("select", other)),
        }
    }

    fn multiline(&mut self, message: &str) -> Result<String, Error> {
        self.questions.push(message.to_string());
        match self.next("multiline")? {
            Answer::Lines(text) => Ok(text.to_string()),
            other => Err(Self::mismatch("multiline", other)),
        }
    }

    fn note(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }
}
