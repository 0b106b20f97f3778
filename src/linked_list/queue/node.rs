use alloc::boxed::Box;
use core::{ffi::CStr, ptr::NonNull};

use super::{
    storage::{copy_payload, try_box},
    traits::Link,
};
use crate::error::Result;

/// An element of a queue: an owned payload and the link to its successor.
pub(crate) struct Element {
    next: Option<NonNull<Element>>,
    value: Box<CStr>,
}

impl Element {
    /// Allocate a detached element holding a private copy of `text`.
    ///
    /// The payload is copied first. If the node itself cannot be allocated the
    /// payload copy is released again before returning the error.
    pub(crate) fn alloc(text: &[u8]) -> Result<NonNull<Element>> {
        let value = copy_payload(text)?;
        try_box(Element { next: None, value })
    }

    /// Release an element and return its payload.
    ///
    /// # Safety
    ///
    /// `element` must have been returned by [`Element::alloc`], must no longer
    /// be reachable from any chain, and must not be used afterwards.
    pub(crate) unsafe fn free(element: NonNull<Element>) -> Box<CStr> {
        let element = unsafe { Box::from_raw(element.as_ptr()) };
        element.value
    }

    pub(crate) fn value(&self) -> &CStr {
        &self.value
    }
}

impl Link for Element {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}
