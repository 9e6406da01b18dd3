//! DiscoKV Server Binary
//!
//! Starts the HTTP discovery server.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use discokv::config::{DEFAULT_MAX_REQUEST_SIZE, DEFAULT_PORT};
use discokv::network::Server;
use discokv::{Config, ListenSpec, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// DiscoKV Server
#[derive(Parser, Debug)]
#[command(name = "discokv-server")]
#[command(about = "In-memory discovery registry over HTTP")]
#[command(version)]
struct Args {
    /// Listen on the first address of this network interface
    #[arg(short, long)]
    interface: Option<String>,

    /// Listen address (ignored when --interface is given)
    #[arg(short, long)]
    address: Option<String>,

    /// Listen port
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_REQUEST_SIZE)]
    max_request_size: usize,

    /// Seconds between "still running" log lines (0 disables)
    #[arg(long, default_value = "60")]
    heartbeat_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,discokv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("DiscoKV Server v{}", discokv::VERSION);

    let listen = ListenSpec {
        interface: args.interface,
        address: args.address,
        port: args.port,
    };
    let listen_addr = match listen.resolve() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Cannot resolve listen address: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::builder()
        .listen_addr(listen_addr)
        .max_request_size(args.max_request_size)
        .heartbeat_interval(Duration::from_secs(args.heartbeat_secs))
        .build();

    let store = Arc::new(Store::new());

    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
