//! # Core callback trait.
//!
//! `Handler` is the contract a subscriber fulfils. It is invoked from the
//! subscription's dedicated worker task, one tuple at a time, in queue
//! order.
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching); they block only their own
//!   queue, and through it — via backpressure — publishers, never other
//!   subscribers' workers.
//! - Argument validation happens here, at call time, using the typed
//!   [`Args`] accessors. A returned [`CallError`] is logged by the worker
//!   and the subscription stays alive.

use async_trait::async_trait;

use crate::{args::Args, error::CallError};

/// Contract for subscriber callbacks.
///
/// Called from a subscription-dedicated worker task with each published
/// tuple, in FIFO order. Prefer async I/O and cooperative waits inside;
/// a blocked callback eventually blocks publishers on this topic.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Handles one published tuple.
    ///
    /// Returning a [`CallError`] reports an argument mismatch; the worker
    /// logs it and continues with the next tuple.
    async fn call(&self, args: &Args) -> Result<(), CallError>;

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
