//! Configuration handling for liquiflow

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete liquiflow configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub database: ConnectionConfig,
    pub flow: FlowConfig,
    pub liquibase: Option<LiquibaseConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Target data store configuration
///
/// Values are published to the property sink verbatim. Nothing is validated
/// locally; a wrong URL or password surfaces when the flow runs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConnectionConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub change_log_file: String,
}

/// Flow execution configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FlowConfig {
    /// Path to the flow file interpreted by the external tool
    pub file: String,
    /// Passed through as a string, the external tool parses it
    pub reports_enabled: String,
    pub license_key: String,
}

/// Location of the external Liquibase installation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LiquibaseConfig {
    /// Binary to invoke, defaults to `liquibase` on PATH
    pub binary: Option<String>,
    pub working_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub stdout: bool,
}
