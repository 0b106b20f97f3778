use alloc::boxed::Box;
use core::{ffi::CStr, ptr::NonNull};

use crate::error::Result;

/// The operations of a text queue.
pub trait Queue {
    /// Copy `text` into a new element placed in front of the head.
    ///
    /// The copy stops at the first NUL byte of `text`, if any.
    fn insert_head(&mut self, text: impl AsRef<[u8]>) -> Result<()>;

    /// Copy `text` into a new element placed after the tail.
    ///
    /// The copy stops at the first NUL byte of `text`, if any.
    fn insert_tail(&mut self, text: impl AsRef<[u8]>) -> Result<()>;

    /// Remove the head element and release it.
    ///
    /// If `out` is given, up to `out.len() - 1` bytes of the removed payload
    /// are copied into it, followed by a NUL. The rest of `out` is zeroed.
    /// An empty `out` receives nothing.
    fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<()>;

    /// Remove the head element and hand its payload to the caller.
    fn take_head(&mut self) -> Result<Box<CStr>>;

    /// Get the number of elements in the queue
    fn size(&self) -> usize;

    /// Check if the queue is empty
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Reverse the order of the elements by relinking them in place.
    fn reverse(&mut self);

    /// Sort the elements in ascending byte order. Equal payloads keep their
    /// relative order.
    fn sort(&mut self);
}

/// A forward link in a singly linked chain.
///
/// Elements implement it for their successor pointer. The queue implements it
/// for its head pointer, so the queue can stand in as the link that precedes
/// the first element.
pub(crate) trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}
