// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Allocation policy for new atoms of an `AtomSequence`.

use crate::errors::SequenceError;

/// Decides whether new atoms may be allocated for an `AtomSequence`.
///
/// Every allocation performed by the list operations asks the allocator first.
/// The allocator never sees the atoms themselves: the storage is reserved
/// by the `AtomSequence` after the allocator permits it.
pub trait NodeAllocator {
    /// Request storage for `additional` more atoms.
    ///
    /// ## Returns
    /// - `Ok` if the atoms may be allocated.
    /// - `SequenceError::AllocationFailure` otherwise.
    fn allocate(&mut self, additional: usize) -> Result<(), SequenceError>;
}

/// Allocator permitting every request.
/// The allocation can then only fail if the global allocator is exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl NodeAllocator for SystemAllocator {
    #[inline]
    fn allocate(&mut self, _additional: usize) -> Result<(), SequenceError> {
        Ok(())
    }
}

impl<A: NodeAllocator + ?Sized> NodeAllocator for &mut A {
    #[inline]
    fn allocate(&mut self, additional: usize) -> Result<(), SequenceError> {
        (**self).allocate(additional)
    }
}
