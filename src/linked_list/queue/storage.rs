use alloc::{boxed::Box, ffi::CString, vec::Vec};
use core::{alloc::Layout, ffi::CStr, ptr::NonNull};

use tracing::warn;

use crate::error::{QueueError, Result};

/// Move `value` into a fresh heap allocation, reporting exhaustion instead of
/// aborting.
///
/// The returned pointer can be turned back into a `Box<T>` with
/// [`Box::from_raw`]. If the allocation fails `value` is dropped.
pub(crate) fn try_box<T>(value: T) -> Result<NonNull<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(NonNull::from(Box::leak(Box::new(value))));
    }

    // SAFETY: the layout has a non-zero size.
    let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(ptr) else {
        return Err(exhausted(layout.size()));
    };
    // SAFETY: `ptr` is freshly allocated for a `T` and not yet initialized.
    unsafe { ptr.as_ptr().write(value) };
    Ok(ptr)
}

/// Copy `text` up to its first NUL into an exact-length, NUL-terminated
/// buffer owned by the caller.
pub(crate) fn copy_payload(text: &[u8]) -> Result<Box<CStr>> {
    let len = text.iter().position(|&b| b == 0).unwrap_or(text.len());
    let size = len + 1;

    let mut buf = Vec::new();
    buf.try_reserve_exact(size).map_err(|_| exhausted(size))?;
    buf.extend_from_slice(&text[..len]);
    buf.push(0);

    // SAFETY: the copy stops before the first NUL and ends with exactly one.
    Ok(unsafe { CString::from_vec_with_nul_unchecked(buf) }.into_boxed_c_str())
}

/// Copy as much of `value` as fits into `out` while leaving room for the
/// terminator, then zero the remainder.
pub(crate) fn copy_truncated(value: &CStr, out: &mut [u8]) {
    let Some(limit) = out.len().checked_sub(1) else {
        return;
    };
    let bytes = value.to_bytes();
    let n = bytes.len().min(limit);
    out[..n].copy_from_slice(&bytes[..n]);
    out[n..].fill(0);
}

fn exhausted(size: usize) -> QueueError {
    warn!(size, "queue allocation failed");
    QueueError::Allocation { size }
}
