//! Allocator and allocation blocks

use thiserror::Error;

/// Failures of the runtime memory layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The request does not fit the allocator's remaining capacity.
    #[error("out of memory: requested {requested} bytes, {available} available")]
    OutOfMemory { requested: usize, available: usize },

    /// A byte access past the end of a block.
    #[error("out of bounds: {len} bytes at offset {offset} in a block of {size}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
}

/// The compile-time side of an `allot`: how many bytes were asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest {
    pub size: usize,
}

impl AllocationRequest {
    pub fn new(size: usize) -> Self {
        AllocationRequest { size }
    }
}

/// An owned block of allocated bytes.
///
/// Always a valid handle, even for zero bytes. The block is released when
/// it is dropped or handed back through [`Allocator::release`]; there is no
/// second release path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAllocation {
    data: Vec<u8>,
}

impl RawAllocation {
    fn new(size: usize) -> Self {
        RawAllocation {
            data: vec![0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Read `len` bytes starting at `offset`.
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&[u8], MemoryError> {
        self.check_bounds(offset, len)?;
        Ok(&self.data[offset..offset + len])
    }

    /// Write `bytes` starting at `offset`.
    pub fn write_bytes(&mut self, offset: usize, bytes: &[u8]) -> Result<(), MemoryError> {
        self.check_bounds(offset, bytes.len())?;
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn check_bounds(&self, offset: usize, len: usize) -> Result<(), MemoryError> {
        if offset + len > self.data.len() {
            return Err(MemoryError::OutOfBounds {
                offset,
                len,
                size: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Capacity-limited allocator fulfilling [`AllocationRequest`]s.
#[derive(Debug)]
pub struct Allocator {
    capacity: usize,
    live_bytes: usize,
}

impl Allocator {
    pub const DEFAULT_CAPACITY: usize = 64 * 1024 * 1024;

    pub fn new(capacity: usize) -> Self {
        Allocator {
            capacity,
            live_bytes: 0,
        }
    }

    /// Fulfill a request, or fail fast when it does not fit.
    pub fn allocate(&mut self, request: &AllocationRequest) -> Result<RawAllocation, MemoryError> {
        let available = self.capacity - self.live_bytes;
        if request.size > available {
            return Err(MemoryError::OutOfMemory {
                requested: request.size,
                available,
            });
        }

        self.live_bytes += request.size;
        Ok(RawAllocation::new(request.size))
    }

    /// Return a block's bytes to the pool.
    pub fn release(&mut self, allocation: RawAllocation) {
        // saturating: a foreign block must not drive the count negative
        self.live_bytes = self.live_bytes.saturating_sub(allocation.size());
    }

    pub fn live_bytes(&self) -> usize {
        self.live_bytes
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Allocator::new(Self::DEFAULT_CAPACITY)
    }
}
