//! Live leaderboard client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (standings store) and Feeds via `client_bootstrap::RuntimeBuilder`
//! 2. Frontend (UI) - CLI
//!
//! All components are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! # Local development server
//! cargo run -p leaderboard-client
//!
//! # Remote server, active sessions only
//! LEADERBOARD_HOST=elves.example.com LEADERBOARD_FILTER=active cargo run -p leaderboard-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, logging};
    use leaderboard_client::Client;

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(client_config.log_dir.as_deref())?;

    tracing::info!("Starting leaderboard client");
    tracing::info!("Snapshot: {}", client_config.snapshot_url());
    tracing::info!("Stream: {}", client_config.stream_url());
    tracing::info!("Reconnect delay: {:?}", client_config.reconnect_delay);

    // 3. Build Runtime and Feeds (independent layer)
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new().config(client_config).build().await?;

    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .feeds(setup.feeds)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
