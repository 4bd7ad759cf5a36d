use clap::Parser;
use soleconnect_core::{config::Config, Dataset};
use soleconnect_web::AppState;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "soleconnect", about = "SoleConnect - Florida shoe-repair directory")]
struct Cli {
    /// Address to bind (overrides config).
    #[arg(long)]
    bind: Option<String>,
    /// Port to listen on (overrides config).
    #[arg(long)]
    port: Option<u16>,
    /// Write debug logs to /tmp/soleconnect-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/soleconnect-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("soleconnect debug log started, tail -f /tmp/soleconnect-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let dataset = Dataset::load()?;
    tracing::info!(businesses = dataset.len(), "dataset loaded");

    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;

    soleconnect_web::serve(addr, AppState::new(dataset, config)).await
}
