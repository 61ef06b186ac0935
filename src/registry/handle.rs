//! # Subscription handle: bounded queue + dedicated worker.
//!
//! One [`Handle`] per subscription. Creation spawns the worker; the worker
//! drains the queue and invokes the callback for each tuple, in order.
//!
//! ## Lifecycle
//! ```text
//! Running ──(sender dropped)──► Draining ──(queue empty)──► Terminated
//! ```
//! The transition happens exactly once: the handle owns the only sender, so
//! dropping the handle *is* the close, and a second close is
//! unrepresentable. The facade removes handles from the registry only under
//! the exclusive lock, so no publish can observe a closed queue.
//!
//! ## Failure containment
//! A callback that returns [`CallError`](crate::CallError) or panics is
//! logged and the worker
//! moves on to the next tuple. Neither the publisher, nor other
//! subscribers, nor later tuples on this queue are affected.

use futures::FutureExt;
use tokio::sync::mpsc;

use crate::{args::Args, handlers::Callback};

/// One live subscription: identity + queue sender.
///
/// Dropping the handle closes the queue; the worker finishes the tuples
/// already enqueued and exits.
pub(crate) struct Handle {
    callback: Callback,
    sender: mpsc::Sender<Args>,
}

impl Handle {
    /// Creates the handle and spawns its worker. Called once per
    /// subscription.
    pub(crate) fn spawn(topic: &str, callback: Callback, queue_capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Args>(queue_capacity);
        let worker_cb = callback.clone();
        let topic = topic.to_string();

        tokio::spawn(async move {
            while let Some(args) = receiver.recv().await {
                let fut = worker_cb.call(&args);
                match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => {
                        tracing::warn!(
                            topic = %topic,
                            handler = worker_cb.name(),
                            error = %err,
                            label = err.as_label(),
                            "callback rejected published arguments"
                        );
                    }
                    Err(_) => {
                        tracing::error!(
                            topic = %topic,
                            handler = worker_cb.name(),
                            "callback panicked; subscription stays alive"
                        );
                    }
                }
            }
        });

        Self { callback, sender }
    }

    /// Enqueues one tuple, waiting while the queue is full.
    ///
    /// This wait is the bus's backpressure: a slow subscriber throttles the
    /// publisher instead of losing tuples.
    pub(crate) async fn push(&self, args: Args) {
        if self.sender.send(args).await.is_err() {
            // The queue can only be closed by removing this handle under
            // the registry's write lock, which excludes publishers. Hitting
            // a closed queue therefore means the lock discipline is broken.
            panic!("publish reached a closed subscriber queue (registry lock discipline violated)");
        }
    }

    /// True if this subscription was registered with `callback`'s identity.
    pub(crate) fn matches(&self, callback: &Callback) -> bool {
        self.callback.same_identity(callback)
    }
}
