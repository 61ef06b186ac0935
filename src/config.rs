//! # Bus-wide configuration.
//!
//! Provides [`BusConfig`], the settings applied to every subscription the
//! bus creates.
//!
//! There is deliberately little here: the bus has exactly one tunable, the
//! per-subscriber queue capacity. Everything else (locking, worker model,
//! backpressure) is fixed by design.

/// Global configuration for a [`Bus`](crate::Bus).
///
/// ## Field semantics
/// - `queue_capacity`: bounded queue length of **each** subscriber. When a
///   subscriber's queue is full, publishers block on it (backpressure);
///   nothing is dropped.
///
/// Capacity is per-handle, not shared: a topic with three subscribers holds
/// up to `3 * queue_capacity` in-flight tuples.
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Capacity of each subscriber's pending-tuple queue.
    ///
    /// Must be greater than zero; a zero-capacity queue could never accept
    /// a publish, so [`Bus::with_config`](crate::Bus::with_config) panics
    /// on it.
    pub queue_capacity: usize,
}

/// Default per-subscriber queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
