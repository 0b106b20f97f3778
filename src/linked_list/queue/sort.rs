//! Merge sort over raw element chains.
//!
//! A chain is the head pointer of a `None`-terminated run of elements. Every
//! function here takes ownership of the chains it is given and returns the
//! relinked result; no element is allocated or freed.

use core::ptr::NonNull;

use super::{node::Element, traits::Link};

type Chain = Option<NonNull<Element>>;

/// Sort a chain by splitting it at the midpoint and merging the sorted halves.
///
/// # Safety
///
/// `head` must be a valid, `None`-terminated chain that nothing else accesses
/// for the duration of the call.
pub(crate) unsafe fn merge_sort(head: Chain) -> Chain {
    let Some(first) = head else {
        return None;
    };
    if unsafe { first.as_ref().next() }.is_none() {
        return head;
    }

    let second = unsafe { split(first) };
    let left = unsafe { merge_sort(head) };
    let right = unsafe { merge_sort(second) };
    unsafe { merge(left, right) }
}

/// Sort a chain of `len` elements with iterative merge passes.
///
/// # Safety
///
/// Same as [`merge_sort`]; `len` must be the length of the chain.
pub(crate) unsafe fn merge_sort_bottom_up(head: Chain, len: usize) -> Chain {
    let mut head = head;
    let mut width = 1usize;
    while width < len {
        let mut rest = head;
        let mut merged: Chain = None;
        let mut merged_tail: Chain = None;
        while rest.is_some() {
            let left = rest;
            let right = unsafe { cut(left, width) };
            rest = unsafe { cut(right, width) };

            let run = unsafe { merge(left, right) };
            unsafe { append(&mut merged, merged_tail, run) };
            merged_tail = unsafe { last(run) };
        }
        head = merged;
        width = width.saturating_mul(2);
    }
    head
}

/// Merge two sorted chains into one.
///
/// If either chain is empty the other is returned as is. On equal payloads
/// the element from `left` goes first, which keeps the sort stable.
///
/// # Safety
///
/// `left` and `right` must be valid, disjoint, `None`-terminated chains.
pub(crate) unsafe fn merge(mut left: Chain, mut right: Chain) -> Chain {
    if left.is_none() {
        return right;
    }
    if right.is_none() {
        return left;
    }

    let mut head: Chain = None;
    let mut tail: Chain = None;
    loop {
        let picked = match (left, right) {
            (Some(l), Some(r)) => unsafe {
                if l.as_ref().value() <= r.as_ref().value() {
                    left = l.as_ref().next();
                    l
                } else {
                    right = r.as_ref().next();
                    r
                }
            },
            (rest, None) | (None, rest) => {
                unsafe { append(&mut head, tail, rest) };
                return head;
            }
        };
        unsafe { append(&mut head, tail, Some(picked)) };
        tail = Some(picked);
    }
}

/// Find the last element of a chain.
///
/// # Safety
///
/// `chain` must be a valid, `None`-terminated chain.
pub(crate) unsafe fn last(chain: Chain) -> Chain {
    let mut node = chain?;
    while let Some(next) = unsafe { node.as_ref().next() } {
        node = next;
    }
    Some(node)
}

/// Split a chain of at least two elements after its midpoint and return the
/// second half. For odd lengths the first half is the longer one.
unsafe fn split(head: NonNull<Element>) -> Chain {
    let mut slow = head;
    let mut fast = unsafe { head.as_ref().next() };
    while let Some(ahead) = fast.and_then(|f| unsafe { f.as_ref().next() }) {
        // slow trails fast, so it always has a successor here
        let Some(step) = (unsafe { slow.as_ref().next() }) else {
            break;
        };
        slow = step;
        fast = unsafe { ahead.as_ref().next() };
    }

    let second = unsafe { slow.as_ref().next() };
    unsafe { slow.as_mut().set_next(None) };
    second
}

/// Detach the first `n` elements of `chain` and return what follows them.
unsafe fn cut(chain: Chain, n: usize) -> Chain {
    let mut node = chain?;
    for _ in 1..n {
        match unsafe { node.as_ref().next() } {
            Some(next) => node = next,
            None => return None,
        }
    }
    let rest = unsafe { node.as_ref().next() };
    unsafe { node.as_mut().set_next(None) };
    rest
}

/// Link `chain` after `tail`, or make it the head when there is no tail yet.
unsafe fn append(head: &mut Chain, tail: Chain, chain: Chain) {
    match tail {
        Some(mut tail) => unsafe { tail.as_mut().set_next(chain) },
        None => *head = chain,
    }
}
