//! webhook-configctl library exports for integration testing.
//!
//! This module exposes the command implementations and the add-flow step
//! machine so they can be driven without a terminal.

pub mod add_flow;
pub mod commands;
pub mod completion;
pub mod config;
pub mod errors;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;
