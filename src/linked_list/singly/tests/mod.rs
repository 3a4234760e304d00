extern crate std;

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{
    node::ListNode,
    queue::Queue,
    traits::{Link, NodeWithData},
};


/// Installs a subscriber honouring `RUST_LOG`, once per test binary.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Walks the chain and checks the length, the tail and its terminating link.
fn assert_integrity(queue: &Queue) {
    let mut count = 0;
    let mut last: Option<core::ptr::NonNull<ListNode>> = None;
    let mut current = queue.head;
    while let Some(node) = current {
        count += 1;
        assert!(count <= queue.len(), "chain is longer than the recorded length");
        last = Some(node);
        current = unsafe { node.as_ref() }.next();
    }

    assert_eq!(count, queue.len());
    assert_eq!(last, queue.tail);
    assert_eq!(queue.head.is_none(), queue.is_empty());
    if let Some(tail) = queue.tail {
        assert!(unsafe { tail.as_ref() }.next().is_none());
    }
    if queue.len() == 1 {
        assert_eq!(queue.head, queue.tail);
    }
}

fn values(queue: &Queue) -> Vec<String> {
    queue.iter().map(|v| v.to_string()).collect()
}

/// Node addresses from head to tail, paired with their values.
fn nodes(queue: &Queue) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    let mut current = queue.head;
    while let Some(node) = current {
        let node_ref = unsafe { node.as_ref() };
        out.push((node_ref.data().to_string(), node.as_ptr() as usize));
        current = node_ref.next();
    }
    out
}

fn queue_of(items: &[&str]) -> Queue {
    let mut queue = Queue::new();
    for item in items {
        queue.insert_tail(item).unwrap();
    }
    queue
}
