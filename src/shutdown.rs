//! Graceful shutdown, driven by termination signals.
//!
//! The process moves through Running → Draining → StoreClosing → Exited:
//! a signal stops the listener from accepting new connections and waits for
//! in-flight requests (Draining), `main` then closes the store and returns
//! (StoreClosing → Exited with status 0). A timer armed when draining begins
//! races those transitions and force-exits with status 1 if the whole
//! sequence takes longer than ten seconds.

use std::time::Duration;

use rocket::tokio::{self, time};
use rocket::Shutdown;

/// How long a graceful shutdown may take before the process is killed.
const FORCE_EXIT_AFTER: Duration = Duration::from_secs(10);

/// Installs the signal handlers and spawns the watcher task. Fails only if
/// the handlers cannot be registered with the OS.
pub fn spawn_watcher(shutdown: Shutdown) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;

        tokio::spawn(async move {
            let reason = tokio::select! {
                _ = interrupt.recv() => "SIGINT",
                _ = terminate.recv() => "SIGTERM",
            };
            drain(reason, shutdown).await;
        });
    }

    #[cfg(not(unix))]
    {
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                drain("interrupt", shutdown).await;
            }
        });
    }

    Ok(())
}

/// The single shutdown routine every trigger funnels into; `reason` is only
/// used for logging.
async fn drain(reason: &str, shutdown: Shutdown) {
    warn!("{reason} received. Starting graceful shutdown...");
    shutdown.notify();

    time::sleep(FORCE_EXIT_AFTER).await;
    error!("Could not close connections in time, forcefully shutting down");
    std::process::exit(1);
}
