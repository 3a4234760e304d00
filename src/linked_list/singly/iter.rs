use core::{marker::PhantomData, ptr::NonNull};

use super::{
    node::ListNode,
    queue::Queue,
    traits::{Link, NodeWithData},
};

/// An iterator over the values of a queue, from head to tail.
pub struct Iter<'a> {
    current: Option<NonNull<ListNode>>,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(queue: &'a Queue) -> Self {
        Self {
            current: queue.head,
            remaining: queue.len(),
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the queue is borrowed for `'a`, so no node is freed or relinked.
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl Send for Iter<'_> {}
unsafe impl Sync for Iter<'_> {}
