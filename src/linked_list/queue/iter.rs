use core::{ffi::CStr, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::StringQueue, node::Element, traits::Link};

/// An iterator over the payloads of a [`StringQueue`], from head to tail.
pub struct Iter<'a> {
    current: Option<NonNull<Element>>,
    remaining: usize,
    _queue: PhantomData<&'a StringQueue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<NonNull<Element>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            // SAFETY: the queue is borrowed for 'a, so its elements stay alive
            // and unmodified while the iterator exists.
            let element = unsafe { &*current.as_ptr() };
            self.current = element.next();
            self.remaining -= 1;
            element.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
