//! # Singly Linked Queue
//!
//! This module provides a queue of owned strings backed by a singly linked chain.
//!
//! ## Core Components
//!
//! - [`queue::Queue`]: The queue itself, tracking head, tail and length.
//! - [`node::ListNode`]: A heap node owning one string and the link to its successor.
//! - [`traits::Link`]: Access to the forward link of a node.
//! - [`sort`]: Stable top-down merge sort over a chain of nodes.
//! - [`handle`]: Free functions accepting an optional queue handle, where a
//!   missing queue is a reported failure rather than a panic.
//!
//! ## Safety
//!
//! Links are raw `NonNull` pointers. The queue upholds these invariants:
//!
//! - The length equals the number of nodes reachable from the head.
//! - An empty queue has neither head nor tail.
//! - A non-empty queue has a tail whose next link is `None`.
//! - Every node is reachable from exactly one queue and owned by it.

pub mod storage;
pub mod error;
pub mod handle;
pub mod iter;
pub mod node;
pub mod queue;
pub mod sort;
pub mod traits;

#[cfg(test)]
mod tests;
