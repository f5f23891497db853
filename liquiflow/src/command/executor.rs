//! Command execution
//!
//! This module provides the seam to the external command executor and the
//! production implementation that drives the Liquibase CLI.

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;

use crate::command::scope::CommandScope;
use crate::config::LiquibaseConfig;
use crate::properties;
use crate::utils::naming;

/// Binary used when the configuration does not locate one
pub const DEFAULT_BINARY: &str = "liquibase";

/// Failures raised by the external command executor
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to launch '{command}': {source}")]
    LaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed ({status}): {stderr}")]
    ExecutionError {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Executor for external migration commands
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command scope to completion
    async fn execute(&self, scope: &CommandScope) -> std::result::Result<(), CommandError>;
}

/// The Liquibase CLI as a command executor
///
/// Each execution exports a snapshot of the global property sink as
/// `LIQUIBASE_*` environment variables, the configuration surface the CLI
/// reads, and passes the scope's arguments as flags.
#[derive(Debug, Clone)]
pub struct LiquibaseCli {
    binary: String,
    working_dir: Option<String>,
}

impl LiquibaseCli {
    /// Create an executor for a `liquibase` binary on PATH
    pub fn new() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            working_dir: None,
        }
    }

    /// Create an executor from configuration
    pub fn from_config(config: &Option<LiquibaseConfig>) -> Self {
        match config {
            Some(cfg) => Self {
                binary: cfg
                    .binary
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BINARY.to_string()),
                working_dir: cfg.working_dir.clone(),
            },
            None => Self::new(),
        }
    }
}

impl Default for LiquibaseCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for LiquibaseCli {
    async fn execute(&self, scope: &CommandScope) -> std::result::Result<(), CommandError> {
        let mut command = Command::new(&self.binary);
        command.arg(scope.command_name());

        for (name, value) in scope.arguments() {
            command.arg(format!("{}={}", naming::cli_flag(name), value));
        }

        for (key, value) in properties::snapshot() {
            command.env(naming::env_var_name(&key), value);
        }

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        tracing::debug!(
            command = scope.command_name(),
            binary = %self.binary,
            "Executing Liquibase command"
        );

        let output = command
            .output()
            .await
            .map_err(|e| CommandError::LaunchError {
                command: scope.command_name().to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(CommandError::ExecutionError {
                command: scope.command_name().to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::info!(command = scope.command_name(), "Liquibase command completed");

        Ok(())
    }
}
