//! # Bus facade: publish / subscribe / unsubscribe / close.
//!
//! [`Bus`] is the public surface over the topic registry. It owns the
//! bus-wide queue configuration and translates calls into registry and
//! handle operations.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                  Subscribers (many):
//!   task A ──┐                          ┌► [queue] ─► worker ─► callback
//!   task B ──┼─► Bus ─► Registry ───────┼► [queue] ─► worker ─► callback
//!   task C ──┘   (read lock on publish) └► [queue] ─► worker ─► callback
//! ```
//!
//! ## Rules
//! - **Fan-out, not queueing**: every subscriber of a topic receives every
//!   published tuple independently.
//! - **Backpressure**: `publish` blocks while any target queue is full;
//!   nothing is dropped. A single slow subscriber stalls the whole publish
//!   call, including delivery to subscribers after it in the list.
//! - **Enqueue, not completion**: `publish` returns once every tuple is
//!   enqueued, not once callbacks have run. Callers needing confirmation
//!   pass a reply channel as one of the arguments.
//! - **No deadlines**: there is no timeout or cancellation primitive; a
//!   blocked publish waits indefinitely.

use std::{fmt, sync::Arc};

use crate::{
    args::Args,
    config::BusConfig,
    error::BusError,
    handlers::{Callback, IntoCallback},
    registry::Registry,
};

/// In-process publish/subscribe bus.
///
/// Cheap to clone; clones share the same registry, so producers and
/// consumers can each hold their own copy across tasks.
#[derive(Clone)]
pub struct Bus {
    registry: Arc<Registry>,
}

impl Bus {
    /// Creates a bus whose subscribers each get a queue of `queue_capacity`
    /// pending tuples.
    ///
    /// # Panics
    /// Panics if `queue_capacity` is zero — a zero-capacity queue could
    /// never accept a publish, so it signals misconfiguration (the same
    /// contract `tokio::sync::mpsc::channel` applies).
    ///
    /// ## Example
    /// ```
    /// use topicbus::{args, Bus, Callback};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() -> Result<(), topicbus::BusError> {
    ///     let bus = Bus::new(16);
    ///     let cb = Callback::from_fn(|args| async move {
    ///         let name = args.get::<String>(0)?;
    ///         println!("hello {name}");
    ///         Ok(())
    ///     });
    ///     bus.subscribe("greetings", &cb).await?;
    ///     bus.publish("greetings", args!["world".to_string()]).await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn new(queue_capacity: usize) -> Self {
        Self::with_config(BusConfig { queue_capacity })
    }

    /// Creates a bus from a [`BusConfig`].
    ///
    /// # Panics
    /// Panics if `config.queue_capacity` is zero.
    pub fn with_config(config: BusConfig) -> Self {
        assert!(
            config.queue_capacity > 0,
            "queue capacity must be greater than zero"
        );
        Self {
            registry: Arc::new(Registry::new(config.queue_capacity)),
        }
    }

    /// Publishes one argument tuple to every current subscriber of `topic`.
    ///
    /// ### Properties
    /// - Returns [`BusError::TopicNotExists`] when the topic has zero
    ///   subscribers; a dead topic is surfaced, not silently dropped.
    /// - Blocks while any target subscriber's queue is full (backpressure).
    /// - Returns `Ok` once all tuples are **enqueued**; callbacks run
    ///   asynchronously afterwards, FIFO per subscriber.
    pub async fn publish(&self, topic: &str, args: Args) -> Result<(), BusError> {
        self.registry.publish(topic, args).await
    }

    /// Registers a callback as a new subscriber of `topic`.
    ///
    /// Accepts a [`Callback`], an `Arc<dyn Handler>`, or — dynamically — an
    /// `Arc<dyn Any + Send + Sync>` that is checked at registration time
    /// and rejected with [`BusError::NotCallable`] when it does not hold a
    /// `Callback`. A rejected value leaves the registry untouched.
    ///
    /// Subscribing the same identity twice creates two independent
    /// subscriptions, each with its own queue and worker.
    pub async fn subscribe(
        &self,
        topic: &str,
        callback: impl IntoCallback,
    ) -> Result<(), BusError> {
        let callback = callback.into_callback()?;
        self.registry.subscribe(topic, callback).await;
        Ok(())
    }

    /// Removes every subscription of `topic` whose identity equals
    /// `callback`, closing each removed subscription's queue.
    ///
    /// ### Properties
    /// - Returns [`BusError::TopicNotExists`] if the topic has no
    ///   subscribers at all.
    /// - Matching no subscription on an existing topic is `Ok`, not an
    ///   error.
    /// - Removing the last subscription deletes the topic; a later
    ///   `publish` sees `TopicNotExists`.
    pub async fn unsubscribe(&self, topic: &str, callback: &Callback) -> Result<(), BusError> {
        self.registry.unsubscribe(topic, callback).await
    }

    /// Closes every subscription of `topic` and deletes the topic.
    ///
    /// Silently a no-op when the topic has no subscribers. This is
    /// deliberately asymmetric with [`publish`](Bus::publish) and
    /// [`unsubscribe`](Bus::unsubscribe): `close` is idempotent teardown,
    /// safe to call from shutdown paths without checking liveness first.
    ///
    /// Workers finish the tuples already enqueued before exiting; `close`
    /// does not wait for that drain.
    pub async fn close(&self, topic: &str) {
        self.registry.close(topic).await;
    }

    /// Number of current subscriptions on `topic` (0 if the topic does not
    /// exist).
    pub async fn topic_len(&self, topic: &str) -> usize {
        self.registry.topic_len(topic).await
    }

    /// Sorted names of topics that currently have at least one subscriber.
    pub async fn topics(&self) -> Vec<String> {
        self.registry.topics().await
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus").finish_non_exhaustive()
    }
}
