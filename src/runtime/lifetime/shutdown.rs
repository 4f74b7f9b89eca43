use tokio::signal;
use tracing::warn;

/// 等待 Ctrl+C 或 SIGTERM，收到后返回以触发优雅停机
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = signal::ctrl_c() => {
                result.expect("Failed to listen for Ctrl+C");
                warn!("Ctrl+C received, initiating graceful shutdown...");
            }
            _ = sigterm.recv() => {
                warn!("SIGTERM received, initiating graceful shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        warn!("Shutdown signal received, initiating graceful shutdown...");
    }
}
