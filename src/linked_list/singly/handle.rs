//! Operations on an optional queue handle.
//!
//! These mirror the [`Queue`] methods for callers that carry a possibly absent
//! queue. A missing queue is a failure (`false` or `0`), never a panic, and
//! every failure leaves the queue untouched.

use alloc::boxed::Box;

use super::{queue::Queue, storage::try_box};

/// Creates an empty queue on the heap.
///
/// Returns `None` if the storage for the queue cannot be obtained.
pub fn create() -> Option<Box<Queue>> {
    try_box(Queue::new()).ok()
}

/// Frees the queue and every element in it. Does nothing for `None`.
pub fn destroy(queue: Option<Box<Queue>>) {
    if let Some(queue) = queue {
        tracing::debug!(len = queue.len(), "destroying queue");
        drop(queue);
    }
}

/// Inserts a copy of `text` at the head. Returns `false` if the queue is
/// absent or storage runs out.
pub fn insert_head(queue: Option<&mut Queue>, text: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_head(text).is_ok())
}

/// Inserts a copy of `text` at the tail. Returns `false` if the queue is
/// absent or storage runs out.
pub fn insert_tail(queue: Option<&mut Queue>, text: &str) -> bool {
    queue.is_some_and(|queue| queue.insert_tail(text).is_ok())
}

/// Removes the head, copying it into `buf` when given.
///
/// See [`Queue::remove_head`] for the buffer contract. Returns `false` if the
/// queue is absent or empty.
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> bool {
    queue.is_some_and(|queue| queue.remove_head(buf).is_ok())
}

/// Number of elements, `0` for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::len)
}

pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
