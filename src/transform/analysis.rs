// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of geometric calculations over an entire `AtomSequence`.

use crate::errors::AggregateError;
use crate::structures::{sequence::AtomSequence, vector3d::Vector3D};

/// ## Methods for analyzing the geometry of `AtomSequence`.
impl AtomSequence {
    /// Calculate center of geometry of all atoms in the sequence.
    /// Atoms with no position are ignored.
    ///
    /// ## Returns
    /// - `Vector3D` corresponding to the geometric center of the sequence.
    /// - `AggregateError::EmptyAggregate` if no atom of the sequence has a position.
    ///
    /// ## Notes
    /// - To calculate the center of geometry of a part of the sequence,
    ///   use `AtomSequence::range` and `AtomRange::center_of_geometry`.
    pub fn center_of_geometry(&self) -> Result<Vector3D, AggregateError> {
        self.full_range().center_of_geometry()
    }

    /// Calculate center of geometry of each residue of the sequence.
    ///
    /// ## Returns
    /// Vector of results, one for each residue in the order of the residues in the sequence.
    pub fn residue_centers(&self) -> Vec<Result<Vector3D, AggregateError>> {
        self.residue_ranges()
            .map(|range| range.center_of_geometry())
            .collect()
    }
}
