//! Timer plumbing for reveals.
//!
//! A [`TickSource`] starts a periodic tick stream for one reveal and hands
//! back a [`RevealHandle`]. Dropping the handle stops the stream.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::time::{Instant, MissedTickBehavior};

use crate::types::RevealId;

/// Starts tick streams for reveals.
pub trait TickSource: Send {
    /// Begin ticking every `period` on behalf of `id`.
    fn start(&self, id: RevealId, period: Duration) -> RevealHandle;
}

/// Ownership of a running tick stream. Cancels the stream when dropped.
pub struct RevealHandle {
    id: RevealId,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl RevealHandle {
    pub fn new(id: RevealId, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn id(&self) -> RevealId {
        self.id
    }

    /// Stop the tick stream now.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::trace!(id = %self.id, "Reveal ticks stopped");
            cancel();
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for RevealHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealHandle")
            .field("id", &self.id)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Tick source backed by a tokio interval task per reveal.
///
/// Ticks are delivered as the reveal's id over an unbounded channel; the
/// first tick arrives one period after `start`.
#[derive(Debug, Clone)]
pub struct TokioTicks {
    tx: mpsc::UnboundedSender<RevealId>,
}

impl TokioTicks {
    /// Create a tick source and the receiver its ticks arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RevealId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl TickSource for TokioTicks {
    fn start(&self, id: RevealId, period: Duration) -> RevealHandle {
        let tx = self.tx.clone();
        let shutdown = Arc::new(Notify::new());
        let stop = Arc::clone(&shutdown);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if tx.send(id).is_err() {
                            return; // receiver gone
                        }
                    }
                    _ = shutdown.notified() => return,
                }
            }
        });

        RevealHandle::new(id, move || stop.notify_one())
    }
}
