//! Operations over an optional queue handle.
//!
//! Callers driving the queue from outside, such as a command interpreter, may
//! hold no queue at all. These functions accept `None` in place of a queue:
//! queries and in-place rearrangements then do nothing, and operations that
//! would have to change the queue fail with
//! [`QueueError::InvalidOperation`].

use alloc::boxed::Box;

use tracing::trace;

use super::{list::StringQueue, storage::try_box, traits::Queue};
use crate::error::{QueueError, Result};

/// Allocate a new, empty queue with default settings.
pub fn create() -> Result<Box<StringQueue>> {
    let queue = try_box(StringQueue::new())?;
    trace!("created queue");
    // SAFETY: `try_box` allocates with the layout `Box` uses for this type.
    Ok(unsafe { Box::from_raw(queue.as_ptr()) })
}

/// Release a queue and every element still in it. Does nothing for `None`.
pub fn destroy(queue: Option<Box<StringQueue>>) {
    if let Some(queue) = queue {
        trace!(size = queue.size(), "destroying queue");
        drop(queue);
    }
}

pub fn insert_head(queue: Option<&mut StringQueue>, text: impl AsRef<[u8]>) -> Result<()> {
    present(queue, "insert at head of an absent queue")?.insert_head(text)
}

pub fn insert_tail(queue: Option<&mut StringQueue>, text: impl AsRef<[u8]>) -> Result<()> {
    present(queue, "insert at tail of an absent queue")?.insert_tail(text)
}

/// See [`Queue::remove_head`].
pub fn remove_head(queue: Option<&mut StringQueue>, out: Option<&mut [u8]>) -> Result<()> {
    present(queue, "remove from an absent queue")?.remove_head(out)
}

/// Number of elements, or 0 for `None`.
pub fn size(queue: Option<&StringQueue>) -> usize {
    queue.map_or(0, |queue| queue.size())
}

pub fn reverse(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut StringQueue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

fn present<'a>(
    queue: Option<&'a mut StringQueue>,
    what: &'static str,
) -> Result<&'a mut StringQueue> {
    queue.ok_or(QueueError::InvalidOperation(what))
}
