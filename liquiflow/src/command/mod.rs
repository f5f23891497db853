//! Command module for liquiflow
//!
//! This module models the external command executor and the requests sent to it.

pub mod executor;
pub mod scope;

// Re-export key types
pub use executor::{CommandError, CommandExecutor, LiquibaseCli};
pub use scope::{CommandScope, FLOW_COMMAND, FLOW_FILE_ARG};
