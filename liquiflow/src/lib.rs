//! Liquiflow: wires application configuration into Liquibase flow runs
//!
//! Liquiflow copies resolved configuration values into the process-wide
//! property namespace Liquibase reads, then triggers a single pre-defined
//! migration flow against the target data store. The migration engine itself,
//! the flow-file grammar, and the changelog format all belong to the external
//! tool; this crate only wires configuration into it and reports the outcome.

pub mod command;
pub mod config;
pub mod customizer;
pub mod error;
pub mod properties;
pub mod utils;


// Re-export main types for easier access
pub use command::{CommandError, CommandExecutor, CommandScope, LiquibaseCli};
pub use config::{Config, ConnectionConfig, FlowConfig};
pub use customizer::{Customizer, FlowCustomizer};
pub use error::{Error, Result};

/// Initialize liquiflow with the specified configuration file
pub fn init(config_path: &str) -> Result<LiquiflowClient> {
    let config = config::load_from_file(config_path)?;
    Ok(LiquiflowClient::new(config))
}

/// The main client for interacting with liquiflow
pub struct LiquiflowClient {
    runtime: LiquibaseCli,
    customizer: FlowCustomizer<LiquibaseCli>,
}

impl LiquiflowClient {
    /// Create a new liquiflow client from configuration
    pub fn new(config: Config) -> Self {
        let runtime = LiquibaseCli::from_config(&config.liquibase);
        let customizer = FlowCustomizer::new(config.database, config.flow, runtime.clone());

        Self {
            runtime,
            customizer,
        }
    }

    /// Publish configuration and run the pre-defined migration flow
    pub async fn run_flow(&self) -> Result<()> {
        self.customizer.customize(&self.runtime).await
    }
}
