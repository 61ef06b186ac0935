//! # Topic registry and per-subscription dispatch.
//!
//! Internal machinery behind the [`Bus`](crate::Bus) facade:
//!
//! - [`Handle`]: one subscription — callback identity, bounded tuple queue,
//!   dedicated worker task.
//! - [`Registry`]: topic name → ordered handles, under a readers-writer
//!   lock so publishes run concurrently while structural changes are
//!   exclusive.
//!
//! ```text
//! publish(topic, args)        subscribe / unsubscribe / close
//!        │ read lock                  │ write lock
//!        ▼                            ▼
//! ┌─────────────────────────────────────────────┐
//! │ Registry: topic ─► [Handle, Handle, ...]    │
//! └──────┬──────────────────────────────────────┘
//!        │ send(args).await per handle (blocks when full)
//!        ▼
//!   [queue] ─► worker ─► callback.call(args)
//! ```

mod handle;
mod topic_map;

pub(crate) use handle::Handle;
pub(crate) use topic_map::Registry;
