//! # Callback identity (`Callback`) and registration conversion.
//!
//! The registry stores subscribers as [`Callback`] values: a shared handle
//! to a [`Handler`] whose **pointer** is the subscription identity.
//! Unsubscription compares identities, so the same `Callback` (or a clone
//! of it) must be presented to remove a subscription.
//!
//! [`IntoCallback`] is the conversion accepted by
//! [`Bus::subscribe`](crate::Bus::subscribe). Besides the typed forms it
//! supports a dynamic one: an `Arc<dyn Any + Send + Sync>` is downcast to
//! `Callback` at registration time, and anything else (an integer, a
//! string, ...) is rejected with [`BusError::NotCallable`] before the
//! registry is touched.

use std::{any::Any, fmt, future::Future, sync::Arc};

use crate::{
    args::Args,
    error::{BusError, CallError},
    handlers::{Handler, HandlerFn},
};

/// A subscriber callback with identity.
///
/// Cheap to clone; clones share identity. Two `Callback`s wrapping the same
/// closure independently are **distinct** identities.
#[derive(Clone)]
pub struct Callback {
    inner: Arc<dyn Handler>,
}

impl Callback {
    /// Wraps an existing handler.
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { inner: handler }
    }

    /// Wraps a closure `Fn(Args) -> Fut` as a callback.
    ///
    /// ## Example
    /// ```
    /// use topicbus::{Args, Callback, CallError};
    ///
    /// let cb = Callback::from_fn(|args: Args| async move {
    ///     args.expect_len(1)?;
    ///     Ok::<_, CallError>(())
    /// });
    /// assert!(cb.same_identity(&cb.clone()));
    /// ```
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), CallError>> + Send + 'static,
    {
        Self::new(HandlerFn::arc(f))
    }

    /// True if both callbacks refer to the same underlying handler.
    ///
    /// This is the identity relation used by
    /// [`Bus::unsubscribe`](crate::Bus::unsubscribe).
    pub fn same_identity(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Handler name, for logs.
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub(crate) async fn call(&self, args: &Args) -> Result<(), CallError> {
        self.inner.call(args).await
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("handler", &self.name())
            .finish()
    }
}

/// Conversion accepted by [`Bus::subscribe`](crate::Bus::subscribe).
///
/// The typed forms cannot fail; the dynamic `Arc<dyn Any + Send + Sync>`
/// form fails with [`BusError::NotCallable`] when the value is not a
/// [`Callback`].
pub trait IntoCallback {
    /// Converts `self` into a subscribable [`Callback`].
    fn into_callback(self) -> Result<Callback, BusError>;
}

impl IntoCallback for Callback {
    fn into_callback(self) -> Result<Callback, BusError> {
        Ok(self)
    }
}

impl IntoCallback for &Callback {
    fn into_callback(self) -> Result<Callback, BusError> {
        Ok(self.clone())
    }
}

impl IntoCallback for Arc<dyn Handler> {
    fn into_callback(self) -> Result<Callback, BusError> {
        Ok(Callback::new(self))
    }
}

impl IntoCallback for Arc<dyn Any + Send + Sync> {
    fn into_callback(self) -> Result<Callback, BusError> {
        match self.downcast::<Callback>() {
            Ok(cb) => Ok(cb.as_ref().clone()),
            Err(_) => Err(BusError::NotCallable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Callback {
        Callback::from_fn(|_args: Args| async { Ok(()) })
    }

    #[test]
    fn test_clone_shares_identity() {
        let cb = noop();
        assert!(cb.same_identity(&cb.clone()));
    }

    #[test]
    fn test_separate_wraps_are_distinct() {
        assert!(!noop().same_identity(&noop()));
    }

    #[test]
    fn test_dynamic_callable_roundtrip() {
        let cb = noop();
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(cb.clone());
        let back = erased.into_callback().unwrap();
        assert!(back.same_identity(&cb));
    }

    #[test]
    fn test_dynamic_non_callable_rejected() {
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(5i32);
        let err = erased.into_callback().unwrap_err();
        assert!(matches!(err, BusError::NotCallable));
    }
}
