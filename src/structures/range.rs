// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of the `AtomRange` structure and geometric calculations over it.

use getset::CopyGetters;

use crate::errors::AggregateError;
use crate::structures::{atom::Atom, vector3d::Vector3D};

/// Names of the backbone atoms which are not part of a side chain.
const BACKBONE_NAMES: [&[u8; 4]; 4] = [b"N   ", b"CA  ", b"C   ", b"O   "];

/// Contiguous range of atoms of a single `AtomSequence`.
/// Constructed using `AtomSequence::range`, `AtomSequence::full_range`,
/// or `AtomSequence::residue_ranges`.
///
/// ## Notes
/// - `start` is inclusive, `stop` is exclusive.
/// - The range only borrows the atoms: it never owns nor modifies them.
#[derive(Debug, Clone, Copy, CopyGetters)]
pub struct AtomRange<'a> {
    atoms: &'a [Atom],
    /// Position of the first atom of the range in the parent sequence.
    #[getset(get_copy = "pub")]
    start: usize,
    /// Position following the last atom of the range in the parent sequence.
    #[getset(get_copy = "pub")]
    stop: usize,
}

impl<'a> AtomRange<'a> {
    /// Create a new `AtomRange`. `atoms` must be the slice `start..stop` of the parent sequence.
    pub(crate) fn new(atoms: &'a [Atom], start: usize, stop: usize) -> Self {
        AtomRange { atoms, start, stop }
    }

    /// Get the number of atoms in the range.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the range contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Get the first atom of the range.
    pub fn first(&self) -> Option<&'a Atom> {
        self.atoms.first()
    }

    /// Iterate over the atoms of the range in order.
    pub fn iter(&self) -> std::slice::Iter<'a, Atom> {
        self.atoms.iter()
    }

    /// Get the atoms of the range as a slice.
    pub fn as_slice(&self) -> &'a [Atom] {
        self.atoms
    }

    /// Calculate the center of geometry of the atoms in the range.
    /// Atoms with no position are ignored.
    ///
    /// ## Returns
    /// - `Vector3D` corresponding to the geometric center of the atoms.
    /// - `AggregateError::EmptyAggregate` if no atom in the range has a position.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// # use float_cmp::assert_approx_eq;
    /// #
    /// let sequence: AtomSequence = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [9999.0, 9999.0, 9999.0]]
    ///     .into_iter()
    ///     .map(|raw| Atom::default().with_raw_position(raw))
    ///     .collect();
    ///
    /// let center = sequence.range(0, sequence.end()).unwrap().center_of_geometry().unwrap();
    ///
    /// assert_approx_eq!(f32, center.x, 1.0);
    /// assert_approx_eq!(f32, center.y, 0.0);
    /// assert_approx_eq!(f32, center.z, 0.0);
    /// ```
    pub fn center_of_geometry(&self) -> Result<Vector3D, AggregateError> {
        self.center_of(self.atoms.iter())
    }

    /// Calculate the center of geometry of the side-chain atoms in the range.
    /// Side-chain atoms are all atoms except for `N`, `CA`, `C`, and `O`.
    /// Atoms with no position are ignored.
    ///
    /// ## Returns
    /// - `Vector3D` corresponding to the geometric center of the side chain.
    ///   If the range contains no side-chain atom with a position (e.g., glycine),
    ///   returns the position of the `CA` atom instead.
    /// - `AggregateError::EmptyAggregate` if there is neither side-chain atom nor `CA` atom with a position.
    pub fn sidechain_center_of_geometry(&self) -> Result<Vector3D, AggregateError> {
        let sidechain = self
            .atoms
            .iter()
            .filter(|atom| !BACKBONE_NAMES.contains(&atom.get_atom_name().as_bytes()));

        match self.center_of(sidechain) {
            Ok(center) => Ok(center),
            Err(e) => self
                .atoms
                .iter()
                .filter(|atom| atom.get_atom_name().as_bytes() == b"CA  ")
                .find_map(|atom| atom.get_position().copied())
                .ok_or(e),
        }
    }

    /// Calculate the center of geometry of the atoms provided by `atoms` skipping atoms with no position.
    fn center_of<'b>(
        &self,
        atoms: impl Iterator<Item = &'b Atom>,
    ) -> Result<Vector3D, AggregateError> {
        let mut sum = Vector3D::default();
        let mut n_atoms = 0usize;

        for position in atoms.filter_map(|atom| atom.get_position()) {
            sum += position;
            n_atoms += 1;
        }

        if n_atoms == 0 {
            return Err(AggregateError::EmptyAggregate(self.start, self.stop));
        }

        Ok(sum / n_atoms as f32)
    }
}

impl<'a> IntoIterator for AtomRange<'a> {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
