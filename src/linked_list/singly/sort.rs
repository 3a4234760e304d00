//! Stable top-down merge sort over a terminated chain of nodes.
//!
//! A chain is described by its first node, its last node and its length. The
//! functions here only relink existing nodes; nothing is allocated or freed.

use core::ptr::NonNull;

use super::{
    node::ListNode,
    traits::{Link, NodeWithData},
};

/// An owned run of linked nodes whose last node has no successor.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    pub head: NonNull<ListNode>,
    pub tail: NonNull<ListNode>,
}

/// Sorts the chain starting at `head` ascending by byte-wise comparison.
///
/// Equal values keep their relative order. The recursion depth is
/// logarithmic in `len`.
///
/// # Safety
///
/// `head` must start a chain of exactly `len` valid nodes, the last of which
/// has no successor, and the caller must own every node in it.
pub unsafe fn merge_sort(head: NonNull<ListNode>, len: usize) -> Chain {
    assert!(len > 0, "Cannot sort an empty chain");
    if len == 1 {
        return Chain { head, tail: head };
    }

    let left_len = len / 2;
    unsafe {
        let right = split(head, left_len);
        let left = merge_sort(head, left_len);
        let right = merge_sort(right, len - left_len);
        merge(left, right)
    }
}

/// Cuts the chain after its first `left_len` nodes and returns the head of
/// the remainder.
///
/// # Safety
///
/// The chain starting at `head` must hold more than `left_len` nodes, and
/// `left_len` must be at least one.
pub unsafe fn split(head: NonNull<ListNode>, left_len: usize) -> NonNull<ListNode> {
    let mut last = head;
    for _ in 1..left_len {
        last = unsafe { last.as_ref() }
            .next()
            .expect("Chain is shorter than its recorded length");
    }
    unsafe { &mut *last.as_ptr() }
        .take_next()
        .expect("Chain is shorter than its recorded length")
}

/// Merges two sorted chains into one, preferring `left` on ties.
///
/// # Safety
///
/// Both chains must be valid, sorted, disjoint and owned by the caller.
pub unsafe fn merge(left: Chain, right: Chain) -> Chain {
    let mut lhs = Some(left.head);
    let mut rhs = Some(right.head);
    let mut head: Option<NonNull<ListNode>> = None;
    let mut tail: Option<NonNull<ListNode>> = None;

    while let (Some(l), Some(r)) = (lhs, rhs) {
        let taken = unsafe {
            if l.as_ref().data() <= r.as_ref().data() {
                lhs = l.as_ref().next();
                l
            } else {
                rhs = r.as_ref().next();
                r
            }
        };

        match tail {
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(Some(taken)) },
            None => head = Some(taken),
        }
        tail = Some(taken);
    }

    // Exactly one side still holds nodes; its tail ends the merged chain.
    let (rest, rest_tail) = match (lhs, rhs) {
        (Some(rest), None) => (rest, left.tail),
        (None, Some(rest)) => (rest, right.tail),
        _ => unreachable!("merge loop ends with exactly one side exhausted"),
    };
    let tail = tail.expect("merge takes at least one node before a side runs out");
    unsafe { (*tail.as_ptr()).set_next(Some(rest)) };

    Chain {
        head: head.expect("merge takes at least one node before a side runs out"),
        tail: rest_tail,
    }
}
