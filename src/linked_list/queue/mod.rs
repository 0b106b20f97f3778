//! # Text Queue
//!
//! A singly linked queue of owned, NUL-terminated text payloads.
//!
//! ## Core Components
//!
//! - [`traits`]: The [`Queue`](traits::Queue) operation set.
//! - [`list::StringQueue`]: The queue itself, with cached head and tail.
//! - [`config`]: [`QueueBuilder`](config::QueueBuilder) and the sort strategy.
//! - [`iter::Iter`]: Head to tail traversal.
//! - [`api`]: Free functions over an optional queue handle, for callers that
//!   may not hold a queue at all.
//!
//! ## Ownership
//!
//! Elements are heap nodes linked through raw pointers. They are owned
//! exclusively by the queue, never handed out, and released either when
//! removed or when the queue is dropped. Reversal and sorting only rewrite
//! links; no element is allocated or freed by them.

pub mod api;
pub mod config;
pub mod iter;
pub mod list;
pub mod traits;

mod node;
mod sort;
mod storage;

#[cfg(test)]
mod tests;
