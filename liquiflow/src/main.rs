//! Liquiflow host binary
//!
//! Loads configuration, initializes logging, and invokes the flow
//! customization hook once.

use clap::Parser;

/// Run a pre-defined Liquibase migration flow from application configuration
#[derive(Parser, Debug)]
#[command(name = "liquiflow", version, about)]
struct Cli {
    /// Path to the liquiflow configuration file
    #[arg(short, long, default_value = "liquiflow.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = liquiflow::config::load_from_file(&cli.config)?;
    liquiflow::utils::logging::init_logging(&config.logging)?;

    let client = liquiflow::LiquiflowClient::new(config);
    client.run_flow().await?;

    tracing::info!("Migration flow completed");

    Ok(())
}
