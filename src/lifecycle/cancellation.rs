//! Latching cancellation pair for context-derived work.

use tokio::sync::watch;

/// Create a connected cancellation pair.
///
/// The handle triggers; the token observes. Clone the token freely into
/// tasks that should stop when the bundle's context is cancelled.
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Trigger side of the cancellation pair.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Request cancellation of all work derived from the paired token.
    ///
    /// Idempotent: calling this any number of times is equivalent to calling
    /// it once, and the cancelled state is permanent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Observer side of the cancellation pair.
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested.
    ///
    /// If the handle was dropped without cancelling, this never resolves.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle gone, no cancellation can ever arrive.
                std::future::pending::<()>().await;
            }
        }
    }
}
