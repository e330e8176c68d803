//! A closable, timeout-aware blocking FIFO queue which can be shared by any number of threads and async tasks.
//!
//! # Installation
//! Add to your source code
//!
//! ```sh
//! cargo add closable_queue
//! ```
//!
//! # Example
//!
//! ```rust
//! use closable_queue::ClosableQueue;
//! use std::thread;
//!
//! let queue = ClosableQueue::<u32>::new();
//!
//! let workers: Vec<_> = (0..4)
//!     .map(|_| {
//!         let queue = queue.clone();
//!         thread::spawn(move || {
//!             let mut total = 0;
//!             // blocks until an item arrives, ends once the queue is closed and drained
//!             while let Some(value) = queue.remove() {
//!                 total += value;
//!             }
//!             total
//!         })
//!     })
//!     .collect();
//!
//! for i in 1..=100 {
//!     queue.insert(i);
//! }
//! queue.close();
//!
//! let total: u32 = workers.into_iter().map(|worker| worker.join().unwrap()).sum();
//! assert_eq!(total, 5050);
//! ```
//!
//! # Usage
//!
//! To properly use this crate
//! * ``insert`` appends an item and wakes one waiting consumer. Inserting is allowed even after the queue was closed.
//!
//! * ``remove`` removes the head of the queue, waiting as long as needed. It returns `None` once the queue is closed and
//! has no items left. See [`ClosableQueue::remove`](self::ClosableQueue::remove)
//!
//! * ``try_remove`` never waits and fails with [`QueueError::Empty`](self::QueueError::Empty) if there is nothing to remove,
//! whether the queue is closed or not.
//!
//! * ``remove_timeout`` waits at most the given duration and returns `None` if it ran out. A zero duration never waits.
//!
//! * ``remove_with`` takes an explicit [`RemoveMode`](self::RemoveMode) and ``remove_args`` takes loosely typed
//! [`Arg`](self::Arg)s for callers that pass a truthy ``non_block`` flag and a timeout in seconds.
//!
//! * ``remove_async`` and ``stream`` do the same as ``remove`` without blocking the calling thread.
//!
//! # Closing
//!
//! Calling ``close`` is permanent and wakes every waiting consumer. Items already queued are not discarded,
//! consumers keep receiving them in order and only then see the queue as empty.
//!
//! # Waiting
//!
//! ``num_waiting`` reports how many consumers are currently blocked inside a removal, either a thread or a pending
//! async removal. A consumer is counted before it suspends, so polling ``num_waiting`` is a reliable way to know
//! that a consumer is parked.
//!
//! # Logging
//!
//! The queue emits `trace` level records through the [`log`](https://docs.rs/log) facade when consumers start waiting,
//! time out or get woken by ``close``.

mod args;
mod async_remove;
mod error;
mod queue;

pub use args::Arg;
pub use async_remove::{Remove, RemoveStream};
pub use error::{ConversionError, QueueError};
pub use queue::{ClosableQueue, Iter, RemoveMode};
