//! # Function-backed callback (`HandlerFn`).
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Args) -> Fut`, producing a fresh
//! future per invocation. This avoids shared mutable state between calls;
//! if the callback needs state across tuples, capture an `Arc<...>`
//! explicitly inside the closure.
//!
//! ## Example
//! ```
//! use topicbus::{Args, CallError, HandlerFn};
//!
//! let h = HandlerFn::new(|args: Args| async move {
//!     let n = args.get::<u32>(0)?;
//!     assert!(*n < 100);
//!     Ok::<_, CallError>(())
//! });
//! # let _ = h;
//! ```

use std::{future::Future, sync::Arc};

use async_trait::async_trait;

use crate::{args::Args, error::CallError, handlers::Handler};

/// Function-backed [`Handler`] implementation.
///
/// Wraps a closure that *creates* a new future per published tuple.
#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed callback.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the callback and returns it as a shared handle.
    ///
    /// Prefer [`Callback::from_fn`](crate::Callback::from_fn) when you
    /// immediately need a subscribable identity.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Args) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), CallError>> + Send + 'static,
{
    async fn call(&self, args: &Args) -> Result<(), CallError> {
        (self.f)(args.clone()).await
    }
}
