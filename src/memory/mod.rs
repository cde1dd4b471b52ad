//! Runtime memory acquisition for `allot` requests
//!
//! The AST describes *what* to allocate — a [`AllocationRequest`] size
//! descriptor carried by the `Memory` node. This module performs the
//! acquisition itself: a capacity-limited [`Allocator`] turns a request
//! into an owned [`RawAllocation`] block, or fails fast with
//! [`MemoryError::OutOfMemory`].
//!
//! Blocks are always valid handles (zero-size included), give
//! bounds-checked byte access, and are released exactly once — either by
//! returning them to the allocator or by dropping them.

pub mod alloc;

pub use alloc::{AllocationRequest, Allocator, MemoryError, RawAllocation};
