//! Global property sink
//!
//! This module provides the process-wide property registry read by the
//! external Liquibase command executor at execution time.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Global key for the target data store URL
pub const COMMAND_URL: &str = "liquibase.command.url";

/// Global key for the data store username
pub const COMMAND_USERNAME: &str = "liquibase.command.username";

/// Global key for the data store password
pub const COMMAND_PASSWORD: &str = "liquibase.command.password";

/// Global key for the changelog file path
pub const COMMAND_CHANGELOG_FILE: &str = "liquibase.command.changelogFile";

/// Global key for the license key
pub const LICENSE_KEY: &str = "liquibase.licenseKey";

/// Global key for the flow file path
pub const COMMAND_FLOW_FILE: &str = "liquibase.command.flowFile";

/// Global key for the reports toggle
pub const REPORTS_ENABLED: &str = "liquibase.reports.enabled";

static PROPERTIES: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Set a property, overwriting any prior value
///
/// Writes are last-write-wins. Concurrent customization calls are not
/// synchronized against each other; a caller that customizes more than one
/// tool instance per process must serialize the calls, or the executor may
/// observe a mix of two calls' configuration.
pub fn set_property(key: &str, value: &str) {
    PROPERTIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key.to_string(), value.to_string());
}

/// Get the current value of a property
pub fn get_property(key: &str) -> Option<String> {
    PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
        .cloned()
}

/// Take a point-in-time copy of all properties
pub fn snapshot() -> HashMap<String, String> {
    PROPERTIES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
