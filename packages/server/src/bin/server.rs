//! Group-chat relay server over WebSocket.
//!
//! Receives events from clients (join / message / typing / stopTyping)
//! and fans them out to the other members of the room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin danwa-server
//! ```

use clap::Parser;

use danwa_shared::logger::setup_logger;

/// Command-line arguments for the relay server
#[derive(Debug, Parser)]
#[command(name = "danwa-server", about = "Group-chat relay server")]
struct ServerArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = danwa_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
