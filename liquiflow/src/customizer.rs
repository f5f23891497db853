//! Runtime customization
//!
//! This module adapts resolved configuration into the global property
//! contract the external command executor expects, then runs the pre-defined
//! migration flow.

use async_trait::async_trait;

use crate::command::{CommandExecutor, CommandScope, FLOW_COMMAND, FLOW_FILE_ARG};
use crate::config::{ConnectionConfig, FlowConfig};
use crate::error::Result;
use crate::properties;

/// Hook invoked by the hosting layer before the migration tool runs
///
/// The target is an opaque handle to the tool instance being customized.
/// Implementations receive it to satisfy the hook signature and may ignore it.
#[async_trait]
pub trait Customizer<T: ?Sized>: Send + Sync {
    /// Customize the runtime for the given target
    async fn customize(&self, target: &T) -> Result<()>;
}

/// Publishes connection and flow configuration as global properties, then
/// executes the flow command once
///
/// The call blocks for the full duration of the external command, which may
/// apply any number of migration steps against a live data store. No timeout
/// or cancellation is exposed.
pub struct FlowCustomizer<E> {
    connection: ConnectionConfig,
    flow: FlowConfig,
    executor: E,
}

impl<E> FlowCustomizer<E> {
    /// Create a customizer from resolved configuration and an executor
    pub fn new(connection: ConnectionConfig, flow: FlowConfig, executor: E) -> Self {
        Self {
            connection,
            flow,
            executor,
        }
    }

    /// Copy the configured values into the global property sink
    ///
    /// All seven properties are written unconditionally, overwriting prior
    /// values. Values pass through verbatim; validation is the external
    /// executor's responsibility.
    fn publish_properties(&self) {
        properties::set_property(properties::COMMAND_URL, &self.connection.url);
        properties::set_property(properties::COMMAND_USERNAME, &self.connection.username);
        properties::set_property(properties::COMMAND_PASSWORD, &self.connection.password);
        properties::set_property(
            properties::COMMAND_CHANGELOG_FILE,
            &self.connection.change_log_file,
        );

        properties::set_property(properties::LICENSE_KEY, &self.flow.license_key);
        properties::set_property(properties::COMMAND_FLOW_FILE, &self.flow.file);
        properties::set_property(properties::REPORTS_ENABLED, &self.flow.reports_enabled);
    }
}

#[async_trait]
impl<T, E> Customizer<T> for FlowCustomizer<E>
where
    T: ?Sized + Sync,
    E: CommandExecutor,
{
    async fn customize(&self, _target: &T) -> Result<()> {
        self.publish_properties();

        let scope =
            CommandScope::new(FLOW_COMMAND).add_argument_value(FLOW_FILE_ARG, &self.flow.file);

        tracing::info!(flow_file = %self.flow.file, "Running migration flow");

        self.executor.execute(&scope).await?;

        Ok(())
    }
}
