// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of the `AtomSequence` structure and methods for constructing it and accessing its atoms.

use tracing::trace;

use crate::errors::SequenceError;
use crate::structures::{
    allocator::{NodeAllocator, SystemAllocator},
    atom::Atom,
    range::AtomRange,
};

/// Ordered sequence of atoms in the order in which they appear in the structure file.
///
/// ## Notes
/// - `AtomSequence` exclusively owns its atoms.
///   Sequences produced by the selection methods are deep copies independent of their source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomSequence {
    atoms: Vec<Atom>,
}

impl From<Vec<Atom>> for AtomSequence {
    fn from(atoms: Vec<Atom>) -> Self {
        AtomSequence { atoms }
    }
}

impl FromIterator<Atom> for AtomSequence {
    fn from_iter<T: IntoIterator<Item = Atom>>(iter: T) -> Self {
        AtomSequence {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AtomSequence {
    type Item = Atom;
    type IntoIter = std::vec::IntoIter<Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'a> IntoIterator for &'a AtomSequence {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl<'a> IntoIterator for &'a mut AtomSequence {
    type Item = &'a mut Atom;
    type IntoIter = std::slice::IterMut<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter_mut()
    }
}

/// ## Methods for creating `AtomSequence` structures and accessing their atoms.
impl AtomSequence {
    /// Create a new empty `AtomSequence`.
    pub fn new() -> Self {
        AtomSequence { atoms: Vec::new() }
    }

    /// Create a new empty `AtomSequence` with space for at least `capacity` atoms.
    pub fn with_capacity(capacity: usize) -> Self {
        AtomSequence {
            atoms: Vec::with_capacity(capacity),
        }
    }

    /// Append a new blank atom to the end of the sequence and return a mutable reference to it.
    /// The atom has all its properties cleared (see `Atom::default`).
    ///
    /// ## Returns
    /// - Mutable reference to the new atom.
    /// - `SequenceError::AllocationFailure` if memory for the atom could not be allocated.
    ///   The sequence is not modified in that case.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let mut sequence = AtomSequence::new();
    /// let atom = sequence.allocate_atom().unwrap();
    /// atom.set_atom_name(AtomName::padded("CA").unwrap());
    ///
    /// assert_eq!(sequence.len(), 1);
    /// assert_eq!(sequence.get(0).unwrap().get_atom_name().as_str(), "CA  ");
    /// ```
    pub fn allocate_atom(&mut self) -> Result<&mut Atom, SequenceError> {
        self.allocate_atom_with(&mut SystemAllocator)
    }

    /// Append a new blank atom to the end of the sequence using the provided allocator.
    /// See `AtomSequence::allocate_atom` for more information.
    pub fn allocate_atom_with(
        &mut self,
        allocator: &mut impl NodeAllocator,
    ) -> Result<&mut Atom, SequenceError> {
        allocator.allocate(1)?;
        self.atoms
            .try_reserve(1)
            .map_err(|_| SequenceError::AllocationFailure(1))?;

        let index = self.atoms.len();
        self.atoms.push(Atom::default());
        Ok(&mut self.atoms[index])
    }

    /// Append an atom to the end of the sequence.
    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    /// Release the sequence and all the atoms it owns.
    ///
    /// ## Notes
    /// - Releasing an empty sequence does nothing.
    /// - The sequence is consumed so it can not be used afterwards.
    pub fn release(self) {
        trace!(atoms = self.atoms.len(), "Releasing atom sequence.");
        drop(self);
    }

    /// Get the number of atoms in the sequence.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the sequence contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Get the atom at the target position. Positions are indexed starting from 0.
    pub fn get(&self, position: usize) -> Option<&Atom> {
        self.atoms.get(position)
    }

    /// Get mutable reference to the atom at the target position.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(position)
    }

    /// Get immutable reference to the atoms of the sequence.
    pub fn get_atoms_as_ref(&self) -> &[Atom] {
        &self.atoms
    }

    /// Iterate over the atoms of the sequence in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    /// Iterate mutably over the atoms of the sequence in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Atom> {
        self.atoms.iter_mut()
    }

    /// Get the terminal position of the sequence, i.e. the position following the last atom.
    /// Can be used as the `stop` of a range spanning to the end of the sequence.
    pub fn end(&self) -> usize {
        self.atoms.len()
    }

    /// Get a range of atoms starting at `start` (inclusive) and ending at `stop` (exclusive).
    ///
    /// ## Returns
    /// - `AtomRange` if successful.
    /// - `SequenceError::InvalidRange` if `start` is larger than `stop` or `stop`
    ///   is larger than the length of the sequence.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let sequence: AtomSequence = (0..5).map(|_| Atom::default()).collect();
    ///
    /// assert_eq!(sequence.range(1, 3).unwrap().len(), 2);
    /// assert_eq!(sequence.range(2, sequence.end()).unwrap().len(), 3);
    /// assert!(sequence.range(3, 2).is_err());
    /// ```
    pub fn range(&self, start: usize, stop: usize) -> Result<AtomRange<'_>, SequenceError> {
        if start > stop || stop > self.atoms.len() {
            return Err(SequenceError::InvalidRange(start, stop, self.atoms.len()));
        }

        Ok(AtomRange::new(&self.atoms[start..stop], start, stop))
    }

    /// Get a range spanning the entire sequence.
    pub fn full_range(&self) -> AtomRange<'_> {
        AtomRange::new(&self.atoms, 0, self.atoms.len())
    }

    /// Find the position of the first atom following `start` which belongs to a different residue
    /// than the atom at `start` (residue number, insertion code, or chain differ).
    ///
    /// ## Notes
    /// - Returns the terminal position (`AtomSequence::end`) if there is no such atom
    ///   or if `start` is not a valid position.
    pub fn find_next_residue(&self, start: usize) -> usize {
        let Some(first) = self.atoms.get(start) else {
            return self.atoms.len();
        };

        self.atoms[start..]
            .iter()
            .position(|atom| !atom.same_residue(first))
            .map_or(self.atoms.len(), |offset| start + offset)
    }

    /// Iterate over ranges of atoms corresponding to individual residues.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let sequence: AtomSequence = [1, 1, 2, 2, 2, 3]
    ///     .into_iter()
    ///     .map(|resnum| Atom::new(resnum, "ALA", 1, AtomName::padded("CA").unwrap()))
    ///     .collect();
    ///
    /// let lengths: Vec<usize> = sequence.residue_ranges().map(|r| r.len()).collect();
    /// assert_eq!(lengths, vec![2, 3, 1]);
    /// ```
    pub fn residue_ranges(&self) -> ResidueRangeIterator<'_> {
        ResidueRangeIterator {
            sequence: self,
            position: 0,
        }
    }
}

/// Iterator over per-residue ranges of an `AtomSequence`.
/// Constructed using `AtomSequence::residue_ranges`.
pub struct ResidueRangeIterator<'a> {
    sequence: &'a AtomSequence,
    position: usize,
}

impl<'a> Iterator for ResidueRangeIterator<'a> {
    type Item = AtomRange<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.sequence.len() {
            return None;
        }

        let start = self.position;
        let stop = self.sequence.find_next_residue(start);
        self.position = stop;

        Some(AtomRange::new(
            &self.sequence.atoms[start..stop],
            start,
            stop,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::atom_name::AtomName;
    use crate::test_utilities::utilities::{make_peptide, FailingAllocator};

    #[test]
    fn new_is_empty() {
        let sequence = AtomSequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.len(), 0);
        assert_eq!(sequence.end(), 0);
        assert!(sequence.get(0).is_none());
    }

    #[test]
    fn allocate_atom() {
        let mut sequence = AtomSequence::with_capacity(2);

        for i in 1..=3 {
            let atom = sequence.allocate_atom().unwrap();
            assert_eq!(*atom, Atom::default());
            atom.set_atom_number(i);
        }

        assert_eq!(sequence.len(), 3);
        for (i, atom) in sequence.iter().enumerate() {
            assert_eq!(atom.get_atom_number(), i + 1);
        }
    }

    #[test]
    fn allocate_atom_fail() {
        let mut sequence = make_peptide();
        let original = sequence.clone();
        let mut allocator = FailingAllocator::new(0);

        match sequence.allocate_atom_with(&mut allocator) {
            Err(SequenceError::AllocationFailure(1)) => (),
            _ => panic!("Allocation should have failed."),
        }

        assert_eq!(sequence, original);
    }

    #[test]
    fn push_and_get() {
        let mut sequence = AtomSequence::new();
        sequence.push(Atom::new(1, "ALA", 1, AtomName::padded("N").unwrap()));
        sequence.push(Atom::new(1, "ALA", 2, AtomName::padded("CA").unwrap()));

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.get(1).unwrap().get_atom_name().trimmed(), "CA");

        sequence.get_mut(0).unwrap().set_atom_number(10);
        assert_eq!(sequence.get_atoms_as_ref()[0].get_atom_number(), 10);
    }

    #[test]
    fn iterators() {
        let mut sequence = make_peptide();

        for atom in &mut sequence {
            atom.set_occupancy(0.5);
        }
        assert!((&sequence).into_iter().all(|atom| atom.get_occupancy() == 0.5));

        let n_atoms = sequence.len();
        let owned: Vec<Atom> = sequence.into_iter().collect();
        assert_eq!(owned.len(), n_atoms);
    }

    #[test]
    fn release() {
        make_peptide().release();
        AtomSequence::new().release();
    }

    #[test]
    fn range() {
        let sequence = make_peptide();

        let range = sequence.range(2, 6).unwrap();
        assert_eq!(range.start(), 2);
        assert_eq!(range.stop(), 6);
        assert_eq!(range.len(), 4);
        for (atom, expected) in range.iter().zip(sequence.iter().skip(2)) {
            assert_eq!(atom, expected);
        }

        assert!(sequence.range(3, 3).unwrap().is_empty());
        assert_eq!(
            sequence.range(0, sequence.end()).unwrap().len(),
            sequence.len()
        );
        assert_eq!(sequence.full_range().len(), sequence.len());
    }

    #[test]
    fn range_fail() {
        let sequence = make_peptide();
        let n_atoms = sequence.len();

        assert_eq!(
            sequence.range(4, 2).unwrap_err(),
            SequenceError::InvalidRange(4, 2, n_atoms)
        );
        assert_eq!(
            sequence.range(0, n_atoms + 1).unwrap_err(),
            SequenceError::InvalidRange(0, n_atoms + 1, n_atoms)
        );
    }

    #[test]
    fn find_next_residue() {
        let sequence = make_peptide();

        // residue 1 (ALA) has 5 atoms, residue 2 (GLY) has 4 atoms, residue 3 (SER) has 6 atoms
        assert_eq!(sequence.find_next_residue(0), 5);
        assert_eq!(sequence.find_next_residue(3), 5);
        assert_eq!(sequence.find_next_residue(5), 9);
        assert_eq!(sequence.find_next_residue(9), sequence.end());
        assert_eq!(sequence.find_next_residue(100), sequence.end());
    }

    #[test]
    fn residue_ranges() {
        let sequence = make_peptide();

        let ranges: Vec<(usize, usize)> = sequence
            .residue_ranges()
            .map(|range| (range.start(), range.stop()))
            .collect();

        assert_eq!(ranges, vec![(0, 5), (5, 9), (9, 15)]);

        for range in sequence.residue_ranges() {
            let first = range.first().unwrap();
            assert!(range.iter().all(|atom| atom.same_residue(first)));
        }
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AtomSequence>();
        assert_send_sync::<AtomRange<'static>>();
    }

    #[test]
    fn residue_ranges_empty() {
        assert_eq!(AtomSequence::new().residue_ranges().count(), 0);
    }

    #[test]
    fn residue_ranges_chain_break() {
        let sequence: AtomSequence = [('A', 1), ('A', 1), ('B', 1), ('B', 2)]
            .into_iter()
            .map(|(chain, resnum)| {
                Atom::new(resnum, "ALA", 1, AtomName::padded("CA").unwrap()).with_chain(chain)
            })
            .collect();

        let lengths: Vec<usize> = sequence.residue_ranges().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![2, 1, 1]);
    }
}
