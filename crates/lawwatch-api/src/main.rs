//! Law change API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p lawwatch-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use lawwatch_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if try_init_tracing().is_ok() {
                error!(error = %e, "Failed to load configuration");
            } else {
                eprintln!("Failed to load configuration: {e}");
            }
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting law change API server"
    );

    // Run the server
    if let Err(e) = lawwatch_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
