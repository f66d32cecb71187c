//! Command modules for the webhook-configctl CLI.
//!
//! - `add_cmd`: interactive hook creation and template generation
//! - `validate_cmd`: structural validation of the hooks file

pub mod add_cmd;
pub mod validate_cmd;
