//! Naming utilities for liquiflow
//!
//! This module converts property keys and command argument names into the
//! forms the external Liquibase CLI understands.

use inflector::Inflector;

/// Convert a dotted property key to the tool's environment variable name
///
/// Each dot-separated segment is upper-snake-cased and the segments are
/// joined with underscores, so `liquibase.command.changelogFile` becomes
/// `LIQUIBASE_COMMAND_CHANGELOG_FILE`.
pub fn env_var_name(property_key: &str) -> String {
    property_key
        .split('.')
        .map(|segment| segment.to_screaming_snake_case())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a camelCase command argument name to its CLI flag
///
/// `flowFile` becomes `--flow-file`.
pub fn cli_flag(argument_name: &str) -> String {
    format!("--{}", argument_name.to_kebab_case())
}
