//! A singly linked string queue.
//!
//! The queue owns every node in its chain. Values are copied in on insertion
//! and released when the node is removed or the queue is dropped.
//!
//! # Examples
//!
//! ```
//! use mola_queue::linked_list::singly::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("banana").unwrap();
//! queue.insert_tail("apple").unwrap();
//! queue.insert_head("cherry").unwrap();
//!
//! assert_eq!(queue.len(), 3);
//!
//! queue.sort();
//! let values: Vec<&str> = queue.iter().collect();
//! assert_eq!(values, vec!["apple", "banana", "cherry"]);
//!
//! queue.reverse();
//! let mut buf = [0u8; 4];
//! queue.remove_head(Some(&mut buf)).unwrap();
//! assert_eq!(&buf, b"che\0");
//! assert_eq!(queue.len(), 2);
//! ```
pub mod singly;
