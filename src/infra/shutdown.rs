//! Process shutdown coordination.

use std::time::Duration;

/// Resolve once SIGINT or SIGTERM is received.
///
/// Once resolved, a watchdog is armed that exits the process with status 1
/// if the rest of the shutdown sequence overruns `grace`.
pub async fn shutdown_signal(grace: Duration) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received SIGTERM signal"),
    }

    tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    arm_watchdog(grace);
}

/// Force the process down if shutdown has not finished within `grace`.
fn arm_watchdog(grace: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        tracing::error!(
            "Graceful shutdown exceeded {}s, forcing exit",
            grace.as_secs()
        );
        std::process::exit(1);
    });
}
