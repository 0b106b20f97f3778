mod queue;

use alloc::vec::Vec;

use super::list::StringQueue;

/// Collect the payloads of a queue as UTF-8 strings.
fn contents(queue: &StringQueue) -> Vec<&str> {
    queue.iter().map(|s| s.to_str().unwrap()).collect()
}

/// Collect the payload addresses of a queue, which identify its elements.
fn identities(queue: &StringQueue) -> Vec<*const core::ffi::c_char> {
    queue.iter().map(|s| s.as_ptr()).collect()
}
