// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of methods for creating filtered copies of `AtomSequence`.

use tracing::{debug, warn};

use crate::errors::SequenceError;
use crate::selections::selector_sets::SelectorSets;
use crate::structures::{
    allocator::{NodeAllocator, SystemAllocator},
    atom::Atom,
    atom_name::AtomName,
    sequence::AtomSequence,
};

/// ## Methods for selecting atoms from `AtomSequence`.
///
/// All these methods are non-destructive: the original sequence is never modified
/// and the returned sequence is a deep copy sharing no data with the original.
impl AtomSequence {
    /// Create a new sequence containing copies of atoms whose names match any of the `selectors`.
    ///
    /// ## Returns
    /// - The new sequence and the number of atoms it contains.
    /// - `SequenceError::AllocationFailure` if memory could not be allocated.
    ///   No partially constructed sequence is returned in that case.
    ///
    /// ## Notes
    /// - Names are compared exactly, including padding spaces (`"CA  "` does not match `" CA "`).
    /// - The order of the atoms is preserved.
    /// - Each atom is copied at most once, even if it matches multiple selectors.
    ///
    /// ## Example
    /// Select backbone atoms.
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let sequence: AtomSequence = ["N", "CA", "CB", "C", "O"]
    ///     .into_iter()
    ///     .enumerate()
    ///     .map(|(i, name)| Atom::new(1, "ALA", i + 1, AtomName::padded(name).unwrap()))
    ///     .collect();
    ///
    /// let selectors: Vec<AtomName> = ["N", "CA", "C", "O"]
    ///     .iter()
    ///     .map(|name| AtomName::padded(name).unwrap())
    ///     .collect();
    ///
    /// let (backbone, n_atoms) = sequence.select_atoms_as_copy(&selectors).unwrap();
    ///
    /// assert_eq!(n_atoms, 4);
    /// assert_eq!(backbone.len(), 4);
    /// assert_eq!(sequence.len(), 5);
    /// ```
    pub fn select_atoms_as_copy(
        &self,
        selectors: &[AtomName],
    ) -> Result<(AtomSequence, usize), SequenceError> {
        self.select_atoms_as_copy_with(selectors, &mut SystemAllocator)
    }

    /// Create a new sequence containing copies of atoms whose names match any of the `selectors`
    /// using the provided allocator. See `AtomSequence::select_atoms_as_copy` for more information.
    pub fn select_atoms_as_copy_with(
        &self,
        selectors: &[AtomName],
        allocator: &mut impl NodeAllocator,
    ) -> Result<(AtomSequence, usize), SequenceError> {
        self.select_as_copy_with(
            |atom| {
                selectors
                    .iter()
                    .any(|selector| selector == atom.get_atom_name())
            },
            allocator,
        )
    }

    /// Create a new sequence containing copies of all `CA` atoms.
    pub fn select_ca_as_copy(&self) -> Result<(AtomSequence, usize), SequenceError> {
        self.select_ca_as_copy_with(&mut SystemAllocator)
    }

    /// Create a new sequence containing copies of all `CA` atoms using the provided allocator.
    pub fn select_ca_as_copy_with(
        &self,
        allocator: &mut impl NodeAllocator,
    ) -> Result<(AtomSequence, usize), SequenceError> {
        let ca = AtomName(*b"CA  ");
        self.select_atoms_as_copy_with(&[ca], allocator)
    }

    /// Create a new sequence containing copies of all atoms that are not hydrogens.
    /// See `Atom::is_hydrogen` for how hydrogens are identified.
    pub fn strip_hydrogens_as_copy(&self) -> Result<(AtomSequence, usize), SequenceError> {
        self.strip_hydrogens_as_copy_with(&mut SystemAllocator)
    }

    /// Create a new sequence containing copies of all atoms that are not hydrogens
    /// using the provided allocator.
    pub fn strip_hydrogens_as_copy_with(
        &self,
        allocator: &mut impl NodeAllocator,
    ) -> Result<(AtomSequence, usize), SequenceError> {
        self.select_as_copy_with(|atom| !atom.is_hydrogen(), allocator)
    }

    /// Create a new sequence containing copies of atoms matching the selector set `name` of `sets`.
    ///
    /// ## Returns
    /// - The new sequence and the number of atoms it contains.
    /// - `SequenceError::InvalidSelectorSet` if the selector set does not exist.
    /// - `SequenceError::AllocationFailure` if memory could not be allocated.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let sequence: AtomSequence = ["N", "CA", "CB", "C", "O"]
    ///     .into_iter()
    ///     .map(|name| Atom::new(1, "ALA", 1, AtomName::padded(name).unwrap()))
    ///     .collect();
    ///
    /// let sets = SelectorSets::default();
    /// let (backbone, _) = sequence.select_set_as_copy(&sets, "backbone").unwrap();
    /// assert_eq!(backbone.len(), 4);
    /// ```
    pub fn select_set_as_copy(
        &self,
        sets: &SelectorSets,
        name: &str,
    ) -> Result<(AtomSequence, usize), SequenceError> {
        let selectors = sets.get(name).map_err(SequenceError::InvalidSelectorSet)?;
        self.select_atoms_as_copy(selectors)
    }

    /// Create a new sequence containing copies of atoms for which `predicate` returns `true`
    /// using the provided allocator.
    ///
    /// ## Returns
    /// - The new sequence and the number of atoms it contains.
    /// - `SequenceError::AllocationFailure` if memory could not be allocated.
    ///   All atoms allocated for the new sequence are released before returning.
    pub fn select_as_copy_with(
        &self,
        mut predicate: impl FnMut(&Atom) -> bool,
        allocator: &mut impl NodeAllocator,
    ) -> Result<(AtomSequence, usize), SequenceError> {
        let mut output = AtomSequence::new();
        let mut n_atoms = 0usize;

        for atom in self.iter() {
            if !predicate(atom) {
                continue;
            }

            match output.allocate_atom_with(allocator) {
                Ok(copy) => copy.copy_fields_from(atom),
                Err(e) => {
                    warn!(
                        allocated = output.len(),
                        "Allocation failed while copying atoms. Releasing the partial copy."
                    );
                    output.release();
                    return Err(e);
                }
            }

            n_atoms += 1;
        }

        debug!(
            input = self.len(),
            selected = n_atoms,
            "Created a filtered copy of an atom sequence."
        );
        Ok((output, n_atoms))
    }
}
