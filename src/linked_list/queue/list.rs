use alloc::boxed::Box;
use core::{ffi::CStr, fmt, marker::PhantomData, ptr::NonNull};

use tracing::trace;

use super::{
    config::{QueueConfig, SortStrategy},
    iter::Iter,
    node::Element,
    sort,
    storage::copy_truncated,
    traits::{Link, Queue},
};
use crate::error::{QueueError, Result};

/// A singly linked queue of owned text payloads.
///
/// The queue keeps pointers to its first and last elements and a count, so
/// insertion at either end, removal at the head and `size` are all O(1).
pub struct StringQueue {
    head: Option<NonNull<Element>>,
    tail: Option<NonNull<Element>>,
    count: usize,
    config: QueueConfig,
    _owns: PhantomData<Box<Element>>,
}

impl StringQueue {
    /// Creates a new, empty queue with default settings.
    pub const fn new() -> Self {
        Self::with_config(QueueConfig::DEFAULT)
    }

    /// Creates a new, empty queue with the given settings.
    pub const fn with_config(config: QueueConfig) -> Self {
        StringQueue {
            head: None,
            tail: None,
            count: 0,
            config,
            _owns: PhantomData,
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Get the payload at the head of the queue.
    pub fn head(&self) -> Option<&CStr> {
        // SAFETY: elements linked into the queue live as long as `self`.
        self.head.map(|head| unsafe { &*head.as_ptr() }.value())
    }

    /// Get the payload at the tail of the queue.
    pub fn tail(&self) -> Option<&CStr> {
        // SAFETY: elements linked into the queue live as long as `self`.
        self.tail.map(|tail| unsafe { &*tail.as_ptr() }.value())
    }

    /// Get an iterator over the payloads, from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.count)
    }

    /// Release every element, leaving the queue empty.
    pub fn clear(&mut self) {
        while let Some(head) = self.unlink_head() {
            // SAFETY: `head` was just unlinked and is not reachable anymore.
            drop(unsafe { Element::free(head) });
        }
    }

    /// Detach the head element without releasing it.
    fn unlink_head(&mut self) -> Option<NonNull<Element>> {
        self.head.inspect(|head| {
            // SAFETY: the head is a live element owned by this queue.
            let next = unsafe { head.as_ref().next() };
            self.set_next(next);
            if next.is_none() {
                self.tail = None;
            }
            self.count -= 1;
        })
    }

    /// Walk the chain and assert the structural invariants of the queue.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.head.is_none(), self.count == 0);
        assert_eq!(self.tail.is_none(), self.count == 0);

        let mut reachable = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(node) = current {
            reachable += 1;
            last = Some(node);
            current = unsafe { node.as_ref().next() };
        }
        assert_eq!(reachable, self.count);
        assert_eq!(last, self.tail);
        if let Some(tail) = self.tail {
            assert!(unsafe { tail.as_ref().next() }.is_none());
        }
    }
}

/// The queue acts as the link in front of its first element.
impl Link for StringQueue {
    type Target = Element;

    fn next(&self) -> Option<NonNull<Element>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<Element>>) {
        self.head = next;
    }
}

impl Queue for StringQueue {
    fn insert_head(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let mut element = Element::alloc(text.as_ref())?;
        // SAFETY: the element is freshly allocated and not yet shared.
        unsafe { element.as_mut().set_next(self.next()) };
        self.set_next(Some(element));
        if self.tail.is_none() {
            self.tail = Some(element);
        }
        self.count += 1;
        trace!(size = self.count, "inserted at head");
        Ok(())
    }

    fn insert_tail(&mut self, text: impl AsRef<[u8]>) -> Result<()> {
        let element = Element::alloc(text.as_ref())?;
        match self.tail {
            // SAFETY: the tail is a live element owned by this queue.
            Some(mut tail) => unsafe { tail.as_mut().set_next(Some(element)) },
            None => self.set_next(Some(element)),
        }
        self.tail = Some(element);
        self.count += 1;
        trace!(size = self.count, "inserted at tail");
        Ok(())
    }

    fn remove_head(&mut self, out: Option<&mut [u8]>) -> Result<()> {
        let value = self.take_head()?;
        if let Some(out) = out {
            copy_truncated(&value, out);
        }
        Ok(())
    }

    fn take_head(&mut self) -> Result<Box<CStr>> {
        let head = self
            .unlink_head()
            .ok_or(QueueError::InvalidOperation("remove from an empty queue"))?;
        trace!(size = self.count, "removed head");
        // SAFETY: `head` was just unlinked and is not reachable anymore.
        Ok(unsafe { Element::free(head) })
    }

    fn size(&self) -> usize {
        self.count
    }

    fn reverse(&mut self) {
        let Some(first) = self.head else {
            return;
        };

        let mut prev = None;
        let mut current = Some(first);
        while let Some(mut node) = current {
            // SAFETY: every node on the chain is a live element owned by this
            // queue, and each is visited exactly once.
            unsafe {
                current = node.as_ref().next();
                node.as_mut().set_next(prev);
            }
            prev = Some(node);
        }

        self.head = prev;
        self.tail = Some(first);
        trace!(size = self.count, "reversed");
    }

    fn sort(&mut self) {
        if self.count < 2 {
            return;
        }

        // SAFETY: the chain from `head` holds exactly `count` live elements
        // owned by this queue, and `&mut self` rules out other access.
        unsafe {
            let sorted = match self.config.sort_strategy {
                SortStrategy::Recursive => sort::merge_sort(self.head),
                SortStrategy::BottomUp => sort::merge_sort_bottom_up(self.head, self.count),
            };
            self.head = sorted;
            self.tail = sort::last(sorted);
        }
        trace!(size = self.count, strategy = ?self.config.sort_strategy, "sorted");
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a CStr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The queue exclusively owns its elements, and shared access never mutates.
unsafe impl Send for StringQueue {}
unsafe impl Sync for StringQueue {}
