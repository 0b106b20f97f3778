#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{QueueError, Result};
