// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! # atomlist_rs: Atom List Manipulation Library for Rust
//!
//! Rust library for manipulating lists of atoms of macromolecular structures.
//! Provides the primitives other structural algorithms build upon:
//! non-destructive selection of atoms, and geometric calculations
//! over contiguous ranges of atoms.
//!
//! `atomlist_rs` does not read or write structure files.
//! The atoms are expected to be provided by a structure file parser.
//!
//! ## Usage
//!
//! Run
//!
//! ```bash
//! $ cargo add atomlist_rs
//! ```
//!
//! Import the crate in your Rust code:
//! ```
//! use atomlist_rs::prelude::*;
//! ```
//!
//! ## Examples
//!
//! #### Selecting atoms
//!
//! Create a copy of a sequence of atoms containing only the backbone atoms.
//! The original sequence is not modified.
//!
//! ```
//! use atomlist_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     // atoms are normally provided by a parser of structure files
//!     let sequence: AtomSequence = ["N", "CA", "C", "O", "CB"]
//!         .into_iter()
//!         .enumerate()
//!         .map(|(i, name)| {
//!             Ok(Atom::new(1, "ALA", i + 1, AtomName::padded(name)?)
//!                 .with_position(Vector3D::new(i as f32, 0.0, 0.0)))
//!         })
//!         .collect::<Result<AtomSequence, AtomError>>()?;
//!
//!     // atom names are compared exactly: use 4-character names or pad them
//!     let selectors = [
//!         AtomName::new("N   ")?,
//!         AtomName::padded("CA")?,
//!         AtomName::padded("C")?,
//!         AtomName::padded("O")?,
//!     ];
//!
//!     let (backbone, n_atoms) = sequence.select_atoms_as_copy(&selectors)?;
//!     assert_eq!(n_atoms, 4);
//!     assert_eq!(backbone.len(), 4);
//!
//!     // the same selection using a predefined selector set
//!     let sets = SelectorSets::default();
//!     let (backbone2, _) = sequence.select_set_as_copy(&sets, "backbone")?;
//!     assert_eq!(backbone, backbone2);
//!
//!     Ok(())
//! }
//! ```
//!
//! #### Calculating the center of geometry of residues
//!
//! Atoms with undetermined coordinates (marked by `9999.0` in structure files)
//! are ignored by geometric calculations.
//!
//! ```
//! use atomlist_rs::prelude::*;
//! use std::error::Error;
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     let raw = [
//!         (1, "N", [0.0, 0.0, 0.0]),
//!         (1, "CA", [2.0, 0.0, 0.0]),
//!         (1, "C", [9999.0, 9999.0, 9999.0]),
//!         (2, "N", [4.0, 4.0, 4.0]),
//!     ];
//!
//!     let sequence: AtomSequence = raw
//!         .into_iter()
//!         .map(|(resnum, name, coordinates)| {
//!             Ok(Atom::new(resnum, "GLY", 1, AtomName::padded(name)?)
//!                 .with_raw_position(coordinates))
//!         })
//!         .collect::<Result<AtomSequence, AtomError>>()?;
//!
//!     // range of the first residue
//!     let stop = sequence.find_next_residue(0);
//!     let center = sequence.range(0, stop)?.center_of_geometry()?;
//!     assert_eq!(center, Vector3D::new(1.0, 0.0, 0.0));
//!
//!     // or iterate over all residues
//!     for range in sequence.residue_ranges() {
//!         println!("{:?}", range.center_of_geometry()?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! `atomlist_rs` emits diagnostic events using the `tracing` crate.
//! No subscriber is installed by the library.
//!
//! ## License
//! This library is released under the MIT License.

/// Current version of the `atomlist_rs` library.
pub const ATOMLIST_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod errors;
pub mod selections {
    pub mod selector_sets;
}
pub mod structures {
    pub mod allocator;
    pub mod atom;
    pub mod atom_name;
    pub mod range;
    pub mod sequence;
    pub mod vector3d;
}
mod transform {
    mod analysis;
    mod select;
}

mod test_utilities;

/// Reexported basic `atomlist_rs` structures and traits.
pub mod prelude {
    pub use crate::errors::{AggregateError, AtomError, SelectorSetError, SequenceError};
    pub use crate::selections::selector_sets::SelectorSets;
    pub use crate::structures::allocator::{NodeAllocator, SystemAllocator};
    pub use crate::structures::atom::Atom;
    pub use crate::structures::atom_name::AtomName;
    pub use crate::structures::range::AtomRange;
    pub use crate::structures::sequence::AtomSequence;
    pub use crate::structures::vector3d::Vector3D;
}
