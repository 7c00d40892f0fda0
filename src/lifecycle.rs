//! Server lifecycle: phase tracking and shutdown signal handling.
//!
//! [`Lifecycle`] wraps a [`tokio::sync::watch`] channel holding the
//! current [`Phase`]. The entry point drives the transitions; any task
//! may subscribe to observe them. Phases only move forward.

use std::fmt;

use tokio::sync::watch;

/// Phases a server instance moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Configuration loaded, persistence initializing.
    Starting,
    /// Listener bound and accepting requests.
    Listening,
    /// Termination signal received, in-flight requests finishing.
    Draining,
    /// Persistence released, process about to exit.
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Starting => "starting",
            Self::Listening => "listening",
            Self::Draining => "draining",
            Self::Stopped => "stopped",
        };
        write!(f, "{name}")
    }
}

/// Watch channel tracking the current server phase.
///
/// Created once at startup in [`Phase::Starting`]. Transitions are
/// logged; attempts to move backwards are ignored so a late signal
/// cannot resurrect a draining server.
#[derive(Debug)]
pub struct Lifecycle {
    sender: watch::Sender<Phase>,
}

impl Lifecycle {
    /// Creates a lifecycle tracker in [`Phase::Starting`].
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Phase::Starting);
        Self { sender }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn current(&self) -> Phase {
        *self.sender.borrow()
    }

    /// Advances to the given phase.
    ///
    /// Non-forward transitions are ignored.
    pub fn advance(&self, next: Phase) {
        let changed = self.sender.send_if_modified(|phase| {
            if next > *phase {
                *phase = next;
                true
            } else {
                false
            }
        });

        if changed {
            tracing::info!(phase = %next, "lifecycle phase changed");
        } else {
            tracing::warn!(
                current = %self.current(),
                requested = %next,
                "ignored non-forward lifecycle transition"
            );
        }
    }

    /// Creates a receiver that observes all future phase changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.sender.subscribe()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes when a termination signal arrives.
///
/// Listens for interrupt (Ctrl+C), terminate, and the user-defined
/// signal file-watch supervisors send to request a restart. All three
/// trigger the same graceful shutdown. On non-Unix targets only Ctrl+C
/// is wired.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = unix_signal(tokio::signal::unix::SignalKind::terminate(), "SIGTERM");
    #[cfg(unix)]
    let restart = unix_signal(tokio::signal::unix::SignalKind::user_defined2(), "SIGUSR2");

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    #[cfg(not(unix))]
    let restart = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
        () = restart => {},
    }
    tracing::info!("termination signal received");
}

/// Waits for one delivery of the given Unix signal.
///
/// If the handler cannot be installed the future never resolves, so the
/// remaining signal sources keep working.
#[cfg(unix)]
async fn unix_signal(kind: tokio::signal::unix::SignalKind, name: &str) {
    match tokio::signal::unix::signal(kind) {
        Ok(mut sig) => {
            sig.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, signal = name, "failed to install signal handler");
            std::future::pending::<()>().await;
        }
    }
}
