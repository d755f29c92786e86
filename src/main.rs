//! Edge host capture runtime.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──Host: www.example.com──▶ ┌──────────────────────────────┐
//!                                     │        edge runtime          │
//!                                     │  Event { request { headers }}│
//!                                     │             │                │
//!                                     │             ▼                │
//!                                     │   capture::handle()          │
//!                                     │   host → x-original-host     │
//!                                     └─────────────┬────────────────┘
//!                                                   │ Host may be rewritten
//!                                                   ▼
//!                                     ┌──────────────────────────────┐
//!                                     │ origin: reads x-original-host│
//!                                     └──────────────────────────────┘
//! ```
//!
//! # Commands
//! - `serve`: local runtime host (`POST /invoke`, live capture on every other path)
//! - `invoke`: run the function once on an event read from a file or stdin

use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use edge_host_capture::capture;
use edge_host_capture::config::{load_config, EdgeConfig};
use edge_host_capture::edge::Event;
use edge_host_capture::http::response::ErrorBody;
use edge_host_capture::http::EdgeServer;
use edge_host_capture::lifecycle::{signals, Shutdown};
use edge_host_capture::observability::init_logging;

#[derive(Parser)]
#[command(name = "edge-host-capture")]
#[command(about = "Preserve the client Host header as x-original-host", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the local edge runtime host
    Serve {
        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
    /// Run the function once on an event (JSON) and print the request
    Invoke {
        /// Event file; stdin when omitted
        #[arg(short, long)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EdgeConfig::default(),
    };

    init_logging(&config.observability)?;

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(addr) = bind {
                config.listener.bind_address = addr.to_string();
            }
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Invoke { event } => invoke(event),
    }
}

async fn serve(config: EdgeConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.listener.max_body_bytes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    EdgeServer::new(config).run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn invoke(path: Option<PathBuf>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut event: Event = serde_json::from_str(&raw)?;

    let outcome = capture::handle(&mut event).map(|_| ());
    match outcome {
        Ok(()) => {
            println!("{}", serde_json::to_string_pretty(&event.request)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Edge function failed");
            println!("{}", serde_json::to_string_pretty(&ErrorBody::from(&e))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
