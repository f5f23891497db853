//! Logging utilities for liquiflow
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()), // No logging configuration, use defaults
    };

    // Parse log level
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO, // Default to INFO
    };

    // Create filter for the level
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("liquiflow={}", level).parse().unwrap());

    let json = config.format.to_lowercase() == "json";

    if let Some(file_path) = &config.file {
        // Ensure directory exists
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = Arc::new(File::create(file_path)?);
        let builder = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(file);

        if json {
            tracing::subscriber::set_global_default(builder.json().finish())
                .map_err(|e| Error::Unknown(e.to_string()))?;
        } else {
            tracing::subscriber::set_global_default(builder.finish())
                .map_err(|e| Error::Unknown(e.to_string()))?;
        }
    } else if config.stdout {
        let builder = fmt::Subscriber::builder().with_env_filter(env_filter);

        if json {
            tracing::subscriber::set_global_default(builder.json().finish())
                .map_err(|e| Error::Unknown(e.to_string()))?;
        } else {
            tracing::subscriber::set_global_default(builder.finish())
                .map_err(|e| Error::Unknown(e.to_string()))?;
        }
    }

    Ok(())
}
