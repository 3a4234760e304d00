use alloc::string::String;
use core::{fmt, ptr::NonNull};

use super::{
    error::QueueError,
    iter::Iter,
    node::ListNode,
    sort::merge_sort,
    traits::{Link, NodeWithData},
};

/// A queue of owned strings backed by a singly linked chain.
///
/// Insertion is O(1) at both ends, removal is O(1) at the head.
pub struct Queue {
    pub(super) head: Option<NonNull<ListNode>>,
    pub(super) tail: Option<NonNull<ListNode>>,
    count: usize,
}

impl Queue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Inserts a copy of `text` at the head of the queue.
    ///
    /// On failure the queue is left unchanged.
    pub fn insert_head(&mut self, text: &str) -> Result<(), QueueError> {
        let node = ListNode::try_new(text)?;
        unsafe { (*node.as_ptr()).set_next(self.head) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.count += 1;
        tracing::trace!(len = self.count, "inserted at head");
        Ok(())
    }

    /// Inserts a copy of `text` at the tail of the queue.
    ///
    /// On failure the queue is left unchanged.
    pub fn insert_tail(&mut self, text: &str) -> Result<(), QueueError> {
        let node = ListNode::try_new(text)?;
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.count += 1;
        tracing::trace!(len = self.count, "inserted at tail");
        Ok(())
    }

    /// Removes the head and returns its value.
    pub fn pop_head(&mut self) -> Option<String> {
        let head = self.head?;
        // SAFETY: the head is owned by this queue and unlinked right below.
        let (value, next) = unsafe { ListNode::release(head) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.count -= 1;
        tracing::trace!(len = self.count, "removed head");
        Some(value)
    }

    /// Removes the head, copying its value into `buf` if one is given.
    ///
    /// At most `buf.len() - 1` bytes are copied and followed by a zero byte,
    /// the rest of `buf` is zeroed. Longer values are truncated silently and
    /// an empty `buf` receives nothing. When the queue is empty `buf` is not
    /// touched.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<(), QueueError> {
        let value = self.pop_head().ok_or(QueueError::Empty)?;
        if let Some(buf) = buf {
            copy_terminated(&value, buf);
        }
        Ok(())
    }

    /// Reverses the queue in place by relinking its nodes.
    pub fn reverse(&mut self) {
        if self.count < 2 {
            return;
        }

        let mut prev: Option<NonNull<ListNode>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { &mut *node.as_ptr() };
            current = node_ref.next();
            node_ref.set_next(prev);
            prev = Some(node);
        }

        let old_head = self.head;
        self.head = self.tail;
        self.tail = old_head;
        if let Some(tail) = self.tail {
            unsafe { (*tail.as_ptr()).set_next(None) };
        }
        tracing::debug!(len = self.count, "reversed queue");
    }

    /// Sorts the queue ascending by byte-wise comparison of the values.
    ///
    /// The sort is stable and relinks the existing nodes without allocating.
    pub fn sort(&mut self) {
        if self.count < 2 {
            return;
        }
        let head = self.head.expect("Non-empty queue must have a head");
        // SAFETY: the queue owns a terminated chain of exactly `count` nodes.
        let chain = unsafe { merge_sort(head, self.count) };
        self.head = Some(chain.head);
        self.tail = Some(chain.tail);
        tracing::debug!(len = self.count, "sorted queue");
    }

    /// Removes and frees every element.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        while let Some(node) = current {
            // SAFETY: the chain was detached from the queue above.
            let (_, next) = unsafe { ListNode::release(node) };
            current = next;
        }
        self.count = 0;
    }

    /// Get the value at the head of the queue
    pub fn head(&self) -> Option<&str> {
        self.head.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Get the value at the tail of the queue
    pub fn tail(&self) -> Option<&str> {
        self.tail.map(|node| unsafe { node.as_ref() }.data())
    }

    /// Get the number of elements in the queue
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get an iterator over the values, from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

/// Copies `value` into `buf` as a zero-terminated byte string.
///
/// Returns the number of value bytes written.
pub fn copy_terminated(value: &str, buf: &mut [u8]) -> usize {
    let Some(capacity) = buf.len().checked_sub(1) else {
        return 0;
    };
    let len = value.len().min(capacity);
    buf[..len].copy_from_slice(&value.as_bytes()[..len]);
    buf[len..].fill(0);
    len
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        if self.count > 0 {
            tracing::debug!(len = self.count, "dropping queue");
        }
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}
