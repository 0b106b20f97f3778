//! Linked sequence containers.
//!
//! [`queue::list::StringQueue`] is a singly linked list of owned text
//! payloads. It keeps a pointer to both ends so it can be used as a FIFO
//! (insert at the tail, remove from the head) or as a LIFO (insert and remove
//! at the head). Every payload is copied into storage owned by the queue at
//! insertion time, and the queue can be reversed or sorted in place without
//! allocating.
//!
//! # Examples
//!
//! ```
//! use mola_queue::linked_list::queue::{list::StringQueue, traits::Queue};
//!
//! let mut queue = StringQueue::new();
//! queue.insert_tail("banana").unwrap();
//! queue.insert_tail("apple").unwrap();
//! queue.insert_head("cherry").unwrap();
//! assert_eq!(queue.size(), 3);
//!
//! queue.sort();
//! let values: Vec<_> = queue.iter().map(|s| s.to_str().unwrap()).collect();
//! assert_eq!(values, vec!["apple", "banana", "cherry"]);
//!
//! queue.reverse();
//! let mut buf = [0u8; 16];
//! queue.remove_head(Some(&mut buf[..])).unwrap();
//! assert_eq!(&buf[..7], b"cherry\0");
//! assert_eq!(queue.size(), 2);
//! ```
pub mod queue;
