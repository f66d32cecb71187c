//! Hook and argument records.
//!
//! A hooks file is a YAML list of [`Hook`] records. Field names on disk are
//! kebab-case (`execute-command`, `pass-arguments-to-command`, ...).
//!
//! Keys missing from a hand-edited record, or set to an empty YAML value,
//! deserialize to their zero value so the validator can report them by name
//! instead of failing the parse.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

use crate::trigger_rule::TriggerRule;

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;

/// One webhook definition.
///
/// # Example YAML
///
/// ```yaml
/// - id: deploy
///   execute-command: /opt/deploy.sh
///   command-working-directory: /opt
///   include-command-output-in-response: true
///   pass-arguments-to-command:
///   - name: branch
///     source: payload
///     envname: GIT_BRANCH
///   trigger-rule: {}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Hook {
    /// Identifier used in the URL path that triggers the hook.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Path of the executable to run.
    #[serde(default, deserialize_with = "null_as_default")]
    pub execute_command: String,

    /// Working directory for the command. Defaults to the command's
    /// directory when unset.
    #[serde(
        default,
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub command_working_directory: Option<String>,

    /// Whether the caller receives the command's output.
    #[serde(
        default,
        rename = "include-command-output-in-response",
        deserialize_with = "null_as_default"
    )]
    pub include_output_in_response: bool,

    /// Request values forwarded to the command, in order.
    #[serde(
        default,
        rename = "pass-arguments-to-command",
        deserialize_with = "null_as_default"
    )]
    pub pass_arguments: Vec<Argument>,

    /// Security predicate gating the hook. `None` means unrestricted.
    #[serde(
        default,
        deserialize_with = "TriggerRule::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub trigger_rule: Option<TriggerRule>,
}

impl Hook {
    /// Creates a hook with the given id and command and defaults elsewhere.
    ///
    /// Output is included in the response by default, matching the add flow.
    pub fn new(id: impl Into<String>, execute_command: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            execute_command: execute_command.into(),
            command_working_directory: None,
            include_output_in_response: true,
            pass_arguments: Vec::new(),
            trigger_rule: None,
        }
    }
}

/// One value forwarded from an incoming request to the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Logical name of the argument.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Where the value is extracted from. The add flow only writes
    /// [`ArgumentSource`] tokens, but hand-edited files may contain anything.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Environment variable the value is also exposed as.
    #[serde(
        default,
        rename = "envname",
        deserialize_with = "non_empty_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub env_name: Option<String>,
}

impl Argument {
    pub fn new(name: impl Into<String>, source: ArgumentSource) -> Self {
        Self {
            name: name.into(),
            source: source.token().to_string(),
            env_name: None,
        }
    }

    /// Sets the environment variable name; an empty name clears it.
    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        let env_name = env_name.into();
        self.env_name = if env_name.is_empty() {
            None
        } else {
            Some(env_name)
        };
        self
    }

    /// The recognised source, if the stored token is part of the vocabulary.
    pub fn source_kind(&self) -> Option<ArgumentSource> {
        ArgumentSource::from_token(&self.source)
    }
}

/// Where an argument value is taken from in the triggering request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentSource {
    /// The JSON request body.
    Payload,
    /// An HTTP request header.
    Header,
    /// A URL query parameter.
    Query,
    /// A URL path parameter.
    Url,
}

impl ArgumentSource {
    /// All sources, in menu order.
    pub const ALL: [ArgumentSource; 4] = [
        ArgumentSource::Payload,
        ArgumentSource::Header,
        ArgumentSource::Query,
        ArgumentSource::Url,
    ];

    /// The token stored in the hooks file.
    pub fn token(self) -> &'static str {
        match self {
            ArgumentSource::Payload => "payload",
            ArgumentSource::Header => "header",
            ArgumentSource::Query => "query",
            ArgumentSource::Url => "url",
        }
    }

    /// Menu label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            ArgumentSource::Payload => "payload - from the JSON request body",
            ArgumentSource::Header => "header - from an HTTP request header",
            ArgumentSource::Query => "query - from a URL query parameter",
            ArgumentSource::Url => "url - from a URL path parameter",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.token() == token)
    }
}

impl fmt::Display for ArgumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns the parent directory of `command` using `/` separators.
///
/// A bare file name yields `.` and a file directly under the root yields `/`.
pub fn parent_directory(command: &str) -> String {
    match Path::new(command).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().replace('\\', "/")
        }
        Some(_) => ".".to_string(),
        None if command.starts_with('/') => "/".to_string(),
        None => ".".to_string(),
    }
}

/// Reads a YAML null (`~`, `null`, or no value) as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats an empty string the same as a missing key.
fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
