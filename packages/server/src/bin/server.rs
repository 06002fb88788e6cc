//! Lounge chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lounge-server -- --port 5000
//! ```

use clap::Parser;
use lounge_server::{ServerArgs, ServerConfig};
use lounge_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = lounge_server::run_server(ServerConfig::from(&args)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
