//! # Topic map: topic name → ordered subscription handles.
//!
//! A single readers-writer lock guards all topics:
//! - `publish` takes it **shared**: publishes to the same or different
//!   topics proceed concurrently at the registry level.
//! - `subscribe` / `unsubscribe` / `close` take it **exclusive**:
//!   structural mutation is serialized and excludes all publishes, which is
//!   what makes closing a queue race-free.
//!
//! ## Rules
//! - A topic key exists iff it has at least one live handle; removals that
//!   empty a list delete the key, never leave an empty entry.
//! - Dispatch order within a topic is subscription order.
//! - Unsubscription rebuilds the handle list (partition into kept/removed)
//!   rather than splicing while iterating.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{args::Args, error::BusError, handlers::Callback, registry::Handle};

/// Shared map from topic to its subscriptions.
pub(crate) struct Registry {
    topics: RwLock<HashMap<String, Vec<Handle>>>,
    queue_capacity: usize,
}

impl Registry {
    pub(crate) fn new(queue_capacity: usize) -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            queue_capacity,
        }
    }

    /// Fans one tuple out to every handle of `topic`, sequentially.
    ///
    /// Holds the read lock for the whole enqueue loop; a full queue on one
    /// handle delays delivery to the handles after it (and blocks
    /// structural changes until the loop finishes).
    pub(crate) async fn publish(&self, topic: &str, args: Args) -> Result<(), BusError> {
        let topics = self.topics.read().await;
        let handles = topics.get(topic).ok_or_else(|| BusError::TopicNotExists {
            topic: topic.to_string(),
        })?;

        for handle in handles {
            handle.push(args.clone()).await;
        }

        Ok(())
    }

    /// Registers a new subscription and starts its worker.
    ///
    /// Identical callback identities on one topic are independent
    /// subscriptions, each with its own queue and worker.
    pub(crate) async fn subscribe(&self, topic: &str, callback: Callback) {
        let handle = Handle::spawn(topic, callback, self.queue_capacity);

        let mut topics = self.topics.write().await;
        topics.entry(topic.to_string()).or_default().push(handle);
    }

    /// Removes and closes every handle of `topic` matching `callback`.
    ///
    /// Matching nothing on an existing topic is not an error. Removing the
    /// last handle deletes the topic key.
    pub(crate) async fn unsubscribe(&self, topic: &str, callback: &Callback) -> Result<(), BusError> {
        let mut topics = self.topics.write().await;
        let handles = topics.remove(topic).ok_or_else(|| BusError::TopicNotExists {
            topic: topic.to_string(),
        })?;

        // Partition instead of splicing mid-iteration; dropping a matching
        // handle closes its queue and lets its worker drain and exit.
        let kept: Vec<Handle> = handles
            .into_iter()
            .filter(|handle| !handle.matches(callback))
            .collect();

        if !kept.is_empty() {
            topics.insert(topic.to_string(), kept);
        }

        Ok(())
    }

    /// Closes every handle of `topic` and deletes the key. No-op on an
    /// unknown topic.
    pub(crate) async fn close(&self, topic: &str) {
        let mut topics = self.topics.write().await;
        // Dropping the handles closes their queues; workers drain and exit.
        topics.remove(topic);
    }

    /// Current number of subscriptions on `topic` (0 if absent).
    pub(crate) async fn topic_len(&self, topic: &str) -> usize {
        self.topics.read().await.get(topic).map_or(0, Vec::len)
    }

    /// Sorted list of topics with at least one subscription.
    pub(crate) async fn topics(&self) -> Vec<String> {
        let topics = self.topics.read().await;
        let mut names: Vec<String> = topics.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
