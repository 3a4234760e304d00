use alloc::{boxed::Box, string::String};
use core::ptr::NonNull;

use super::{
    error::QueueError,
    storage::{try_alloc, try_copy},
    traits::{Link, NodeWithData},
};

/// A node in a singly linked queue.
///
/// Each node owns its own copy of the text and is owned by exactly one queue.
#[derive(Debug)]
pub struct ListNode {
    next: Option<NonNull<ListNode>>,
    value: String,
}

impl ListNode {
    /// Allocates an unlinked node holding a copy of `text`.
    ///
    /// The text is copied first, so a failed node allocation only has to
    /// release the copy, which happens when it is dropped.
    pub fn try_new(text: &str) -> Result<NonNull<ListNode>, QueueError> {
        let value = try_copy(text)?;
        try_alloc(ListNode { next: None, value })
    }

    /// Frees a node and returns its value together with its former successor.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::try_new`], must not be reachable from
    /// any queue afterwards and must not be used again.
    pub unsafe fn release(node: NonNull<ListNode>) -> (String, Option<NonNull<ListNode>>) {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        let ListNode { next, value } = *node;
        (value, next)
    }
}

impl Link for ListNode {
    type Target = Self;

    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

impl NodeWithData for ListNode {
    type Data = str;

    fn data(&self) -> &str {
        &self.value
    }
}

unsafe impl Send for ListNode {}
unsafe impl Sync for ListNode {}
