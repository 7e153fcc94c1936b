use nibbledns_domain::Config;
use nibbledns_infrastructure::dns::{DnsServer, DnsServerHandler};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Serves DNS until a termination signal arrives or the listeners fail.
pub async fn run_dns_server(
    config: &Config,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let mut server = DnsServer::from_config(&config.server, handler)?;
    server.start(shutdown.clone())?;

    tokio::spawn(cancel_on_signal(shutdown.clone()));

    shutdown.cancelled().await;
    info!("Shutting down DNS server");
    server.close().await;
    Ok(())
}

async fn cancel_on_signal(shutdown: CancellationToken) {
    tokio::select! {
        _ = wait_for_signal() => {
            info!("Termination signal received");
            shutdown.cancel();
        }
        _ = shutdown.cancelled() => {}
    }
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            warn!(error = %e, "Cannot listen for SIGTERM, only Ctrl-C will stop the server");
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
            return;
        }
    };

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Cannot listen for Ctrl-C");
                terminate.recv().await;
            }
        }
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
