//! # Subscriber callbacks.
//!
//! This module provides the callback side of the bus: the [`Handler`] trait
//! every subscriber implements, the [`HandlerFn`] closure adapter, and the
//! [`Callback`] identity wrapper the registry stores and compares.
//!
//! ## Architecture
//! ```text
//! user closure ──HandlerFn──┐
//! user struct ──impl Handler┼──► Callback (Arc<dyn Handler> + identity)
//! dynamic value ─downcast───┘        │
//!                                    ▼
//!                        Bus::subscribe(topic, ...)
//! ```
//!
//! ## Identity
//! Unsubscription is by identity, not by code: a [`Callback`] and its
//! clones share one identity (`Arc::ptr_eq`), while wrapping the same
//! closure twice yields two distinct identities. Keep the `Callback` you
//! subscribed with if you intend to unsubscribe it later.

mod callback;
mod handler;
mod handler_fn;

pub use callback::{Callback, IntoCallback};
pub use handler::Handler;
pub use handler_fn::HandlerFn;
