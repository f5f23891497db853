//! Command scopes
//!
//! This module models requests to the external Liquibase command executor: a
//! fixed command name plus the named arguments for one invocation.

use indexmap::IndexMap;

/// Name of the external command that runs a flow file
pub const FLOW_COMMAND: &str = "flow";

/// Name of the flow file argument accepted by the flow command
pub const FLOW_FILE_ARG: &str = "flowFile";

/// A request to the external command executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandScope {
    command_name: String,
    arguments: IndexMap<String, String>,
}

impl CommandScope {
    /// Create a scope for the named command
    pub fn new(command_name: &str) -> Self {
        Self {
            command_name: command_name.to_string(),
            arguments: IndexMap::new(),
        }
    }

    /// Attach a named argument, replacing any prior value under the same name
    pub fn add_argument_value(mut self, name: &str, value: &str) -> Self {
        self.arguments.insert(name.to_string(), value.to_string());
        self
    }

    /// The command name
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// The named arguments in insertion order
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up an argument value by name
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}
