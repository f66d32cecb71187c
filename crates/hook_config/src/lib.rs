//! Webhook hook configuration model.
//!
//! A hooks file (`webhook.yaml` by default) is a YAML list of [`Hook`]
//! records, each describing the command a webhook runs, the request values
//! passed to it, and an optional [`TriggerRule`]. This crate reads, renders,
//! appends to, and validates that file. It does no terminal I/O.

pub mod document;
pub mod errors;
pub mod hook;
pub mod template;
pub mod trigger_rule;
pub mod validator;


pub use document::{parse_hooks, render_document, HooksFile};
pub use errors::{HookConfigError, HookConfigResult};
pub use hook::{parent_directory, Argument, ArgumentSource, Hook};
pub use template::{template_hook, write_template};
pub use trigger_rule::{TriggerRule, TriggerRuleTemplate};
pub use validator::{
    validate_file, validate_hook, validate_hooks, ValidationReport, ValidationWarning,
};
