//! # topicbus
//!
//! **topicbus** is an in-process publish/subscribe message bus: producers
//! publish named topics carrying an arbitrary argument tuple, and consumers
//! register callbacks that receive those arguments asynchronously. It is a
//! decoupling primitive for components inside one process — no network, no
//! persistence.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                       Subscribers (per topic, many):
//!
//!   task A ──┐                                 ┌► [queue S1] ─► worker ─► callback S1
//!   task B ──┼──► Bus ───► Registry ───────────┼► [queue S2] ─► worker ─► callback S2
//!   task C ──┘  (facade)  topic ─► [handles]   └► [queue SN] ─► worker ─► callback SN
//!
//!   publish:      shared (read) lock, enqueue per handle, may block (backpressure)
//!   subscribe /
//!   unsubscribe /
//!   close:        exclusive (write) lock, structural mutation
//! ```
//!
//! ## Guarantees
//! - **Fan-out**: every subscriber of a topic receives every published
//!   tuple independently; no tuple is "consumed" away from other
//!   subscribers.
//! - **FIFO per subscriber**: each subscription processes tuples in
//!   enqueue order. No ordering is guaranteed across subscribers or
//!   topics.
//! - **Backpressure, not drops**: a full subscriber queue blocks the
//!   publisher until the worker drains space. Nothing is dropped and
//!   nothing buffers unboundedly.
//! - **Live topics only**: a topic exists exactly while it has at least
//!   one subscriber. Publishing or unsubscribing on a dead topic returns
//!   [`BusError::TopicNotExists`]; [`Bus::close`] alone is a silent no-op.
//!
//! ## Failure model
//! Registry-level errors are synchronous return values. Callback failures
//! (argument mismatch, panic) surface asynchronously inside the
//! subscription's worker: they are logged via `tracing` and contained —
//! the subscription, its queue, other subscribers, and the publisher all
//! keep working. Publishers needing delivery confirmation pass a reply
//! channel inside the tuple (see
//! [`Args`](crate::Args) and the readback test idiom).
//!
//! ## Example
//! ```rust
//! use topicbus::{args, Bus, Callback};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), topicbus::BusError> {
//!     let bus = Bus::new(100);
//!
//!     let audit = Callback::from_fn(|args| async move {
//!         let user = args.get::<String>(0)?;
//!         let admitted = args.get::<bool>(1)?;
//!         println!("audit: {user} admitted={admitted}");
//!         Ok(())
//!     });
//!     bus.subscribe("logins", &audit).await?;
//!
//!     bus.publish("logins", args!["alice".to_string(), true]).await?;
//!
//!     // Later: remove this exact subscription by identity.
//!     bus.unsubscribe("logins", &audit).await?;
//!     Ok(())
//! }
//! ```

mod args;
mod bus;
mod config;
mod error;
mod handlers;
mod registry;

// ---- Public re-exports ----

pub use args::{ArgValue, Args};
pub use bus::Bus;
pub use config::{BusConfig, DEFAULT_QUEUE_CAPACITY};
pub use error::{BusError, CallError};
pub use handlers::{Callback, Handler, HandlerFn, IntoCallback};
