//! Error types used by the bus and by subscriber callbacks.
//!
//! This module defines two error enums:
//!
//! - [`BusError`] — synchronous errors returned directly by registry-level
//!   operations (`publish`, `subscribe`, `unsubscribe`).
//! - [`CallError`] — call-time argument mismatches produced inside a
//!   subscriber callback and reported by its worker, never by the publisher.
//!
//! Both types provide `as_label()` returning a short stable label for
//! logs/metrics.

use thiserror::Error;

/// # Errors returned by bus operations.
///
/// These are detected synchronously, under the registry lock, and returned
/// from the call that triggered them.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// The topic currently has zero subscribers.
    ///
    /// Returned by `publish` and `unsubscribe`. A topic exists exactly as
    /// long as it has at least one live subscriber, so a topic whose last
    /// subscriber was removed reports this error again.
    #[error("topic \"{topic}\" does not exist")]
    TopicNotExists {
        /// The topic name the caller asked for.
        topic: String,
    },

    /// The value handed to `subscribe` is not a callable.
    ///
    /// Only the dynamic registration path (`Arc<dyn Any + Send + Sync>`)
    /// can produce this; typed [`Callback`](crate::Callback) values are
    /// callable by construction.
    #[error("subscriber value is not callable")]
    NotCallable,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicbus::BusError;
    ///
    /// let err = BusError::TopicNotExists { topic: "orders".into() };
    /// assert_eq!(err.as_label(), "topic_not_exists");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::TopicNotExists { .. } => "topic_not_exists",
            BusError::NotCallable => "not_callable",
        }
    }
}

/// # Errors produced while invoking a subscriber callback.
///
/// These surface asynchronously, inside the subscriber's worker, after the
/// triggering `publish` has already returned. The worker logs them and keeps
/// the subscription alive; they are never correlated back to the publisher.
/// Callers that need delivery confirmation pass a reply channel as one of
/// the published arguments instead.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CallError {
    /// The published tuple has a different number of arguments than the
    /// callback expects.
    #[error("expected {expected} argument(s), got {actual}")]
    Arity {
        /// Number of arguments the callback expects.
        expected: usize,
        /// Number of arguments actually published.
        actual: usize,
    },

    /// An argument at `index` is not of the type the callback expects.
    #[error("argument {index} is not a {expected}")]
    Type {
        /// Position of the offending argument in the tuple.
        index: usize,
        /// Name of the expected type.
        expected: &'static str,
    },
}

impl CallError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use topicbus::CallError;
    ///
    /// let err = CallError::Arity { expected: 2, actual: 1 };
    /// assert_eq!(err.as_label(), "argument_arity_mismatch");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CallError::Arity { .. } => "argument_arity_mismatch",
            CallError::Type { .. } => "argument_type_mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_error_messages() {
        let err = BusError::TopicNotExists {
            topic: "metrics".into(),
        };
        assert_eq!(err.to_string(), "topic \"metrics\" does not exist");
        assert_eq!(BusError::NotCallable.as_label(), "not_callable");
    }

    #[test]
    fn test_call_error_messages() {
        let err = CallError::Type {
            index: 1,
            expected: "i64",
        };
        assert_eq!(err.to_string(), "argument 1 is not a i64");
        assert_eq!(err.as_label(), "argument_type_mismatch");
    }
}
