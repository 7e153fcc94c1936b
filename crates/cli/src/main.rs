use clap::Parser;
use nibbledns_domain::{CliOverrides, Protocol};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "nibbledns")]
#[command(version)]
#[command(about = "nibbledns - authoritative DNS that synthesizes IPv6 forward and reverse records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Transports to listen on (udp, tcp, both)
    #[arg(long)]
    protocol: Option<Protocol>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        protocol: cli.protocol,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting nibbledns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;

    let shutdown = CancellationToken::new();
    server::run_dns_server(&config, dns_services.handler, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
