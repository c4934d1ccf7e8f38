//! ftpgate - Entry Point
//!
//! A minimal FTP control-connection server: single credential pair,
//! line-oriented command sessions, one task per client.

use env_logger;
use log::{error, info};

use ftpgate::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Launching FTP control server...");

    // A bind failure is a fatal startup error: surface it and exit without serving.
    let server = match Server::new(&config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            std::process::exit(1);
        }
    };

    server.start().await;

    info!("Server shut down");
}
