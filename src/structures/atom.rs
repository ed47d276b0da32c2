// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of the Atom structure and its methods.

use crate::structures::{atom_name::AtomName, vector3d::Vector3D};

/// A single atom record of a macromolecular structure.
///
/// ## Notes
/// - The position of an atom is optional. Atoms with no position
///   are still selected and copied like any other atom but they are ignored
///   by all geometric calculations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    atom_number: usize,
    atom_name: AtomName,
    alt_location: Option<char>,
    residue_name: String,
    residue_number: i32,
    insertion_code: Option<char>,
    chain: Option<char>,
    element: Option<String>,
    occupancy: f32,
    bfactor: f32,
    position: Option<Vector3D>,
}

impl Atom {
    /// Create new Atom structure with the specified properties.
    ///
    /// ## Notes
    /// - By default, `Atom` structure is constructed with `chain`, `element`,
    ///   `alt_location`, `insertion_code`, and `position` set to `None`
    ///   and with zero `occupancy` and `bfactor`.
    ///   Use the `with_*` functions to provide them.
    pub fn new(
        residue_number: i32,
        residue_name: &str,
        atom_number: usize,
        atom_name: AtomName,
    ) -> Self {
        Atom {
            atom_number,
            atom_name,
            residue_name: residue_name.to_string(),
            residue_number,
            ..Default::default()
        }
    }

    /// Add chain information to target atom.
    ///
    /// ## Example
    /// ```
    /// use atomlist_rs::prelude::*;
    /// let atom = Atom::new(1, "LYS", 1, AtomName::padded("CA").unwrap()).with_chain('A');
    ///
    /// assert_eq!(atom.get_chain().unwrap(), 'A');
    /// ```
    pub fn with_chain(mut self, chain: char) -> Self {
        self.set_chain(chain);
        self
    }

    /// Add position to target atom.
    pub fn with_position(mut self, position: Vector3D) -> Self {
        self.set_position(position);
        self
    }

    /// Add position to target atom from raw coordinates.
    /// See `Atom::set_raw_position` for the handling of the null sentinel.
    pub fn with_raw_position(mut self, raw: [f32; 3]) -> Self {
        self.set_raw_position(raw);
        self
    }

    /// Add element symbol to target atom.
    pub fn with_element(mut self, element: &str) -> Self {
        self.set_element(element);
        self
    }

    /// Add occupancy to target atom.
    pub fn with_occupancy(mut self, occupancy: f32) -> Self {
        self.set_occupancy(occupancy);
        self
    }

    /// Add temperature factor to target atom.
    pub fn with_bfactor(mut self, bfactor: f32) -> Self {
        self.set_bfactor(bfactor);
        self
    }

    /// Add alternate location indicator to target atom.
    pub fn with_alt_location(mut self, alt: char) -> Self {
        self.set_alt_location(alt);
        self
    }

    /// Add residue insertion code to target atom.
    pub fn with_insertion_code(mut self, code: char) -> Self {
        self.set_insertion_code(code);
        self
    }

    /// Get the serial number of the atom.
    pub fn get_atom_number(&self) -> usize {
        self.atom_number
    }

    /// Set the serial number of the atom.
    pub fn set_atom_number(&mut self, atomnum: usize) {
        self.atom_number = atomnum;
    }

    /// Get the name of the atom.
    pub fn get_atom_name(&self) -> &AtomName {
        &self.atom_name
    }

    /// Set the name of the atom.
    pub fn set_atom_name(&mut self, atomname: AtomName) {
        self.atom_name = atomname;
    }

    /// Get the alternate location indicator of the atom.
    pub fn get_alt_location(&self) -> Option<char> {
        self.alt_location
    }

    /// Set the alternate location indicator of the atom.
    pub fn set_alt_location(&mut self, alt: char) {
        self.alt_location = Some(alt);
    }

    /// Get the name of the residue to which the atom belongs.
    pub fn get_residue_name(&self) -> &str {
        &self.residue_name
    }

    /// Set the name of the residue to which the atom belongs.
    pub fn set_residue_name(&mut self, resname: &str) {
        self.residue_name = resname.to_string();
    }

    /// Get the number of the residue to which the atom belongs.
    pub fn get_residue_number(&self) -> i32 {
        self.residue_number
    }

    /// Set the number of the residue to which the atom belongs.
    pub fn set_residue_number(&mut self, resnum: i32) {
        self.residue_number = resnum;
    }

    /// Get the insertion code of the residue to which the atom belongs.
    pub fn get_insertion_code(&self) -> Option<char> {
        self.insertion_code
    }

    /// Set the residue insertion code of the atom.
    pub fn set_insertion_code(&mut self, code: char) {
        self.insertion_code = Some(code);
    }

    /// Get the chain this atom is part of.
    pub fn get_chain(&self) -> Option<char> {
        self.chain
    }

    /// Set the chain of the atom.
    pub fn set_chain(&mut self, chain: char) {
        self.chain = Some(chain);
    }

    /// Get the element symbol of the atom.
    pub fn get_element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Set the element symbol of the atom.
    pub fn set_element(&mut self, element: &str) {
        self.element = Some(element.to_string());
    }

    /// Get the occupancy of the atom.
    pub fn get_occupancy(&self) -> f32 {
        self.occupancy
    }

    /// Set the occupancy of the atom.
    pub fn set_occupancy(&mut self, occupancy: f32) {
        self.occupancy = occupancy;
    }

    /// Get the temperature factor of the atom.
    pub fn get_bfactor(&self) -> f32 {
        self.bfactor
    }

    /// Set the temperature factor of the atom.
    pub fn set_bfactor(&mut self, bfactor: f32) {
        self.bfactor = bfactor;
    }

    /// Get the coordinates of the atom.
    pub fn get_position(&self) -> Option<&Vector3D> {
        self.position.as_ref()
    }

    /// Set the coordinates of the atom.
    pub fn set_position(&mut self, pos: Vector3D) {
        self.position = Some(pos);
    }

    /// Remove the coordinates of the atom.
    pub fn reset_position(&mut self) {
        self.position = None;
    }

    /// Set the coordinates of the atom from raw coordinates.
    ///
    /// ## Notes
    /// - If none of the coordinates is below `NULL_COORDINATE` (9999.0),
    ///   the position is considered undetermined and is set to `None`.
    ///   This includes coordinates which are `NaN`.
    /// - If at least one of the coordinates is below the threshold,
    ///   the position is set exactly to the provided values.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let mut atom = Atom::default();
    ///
    /// atom.set_raw_position([9999.0, 9999.0, 9999.0]);
    /// assert!(!atom.has_position());
    ///
    /// atom.set_raw_position([1.0, 9999.0, 9999.0]);
    /// assert!(atom.has_position());
    /// ```
    pub fn set_raw_position(&mut self, raw: [f32; 3]) {
        let position = Vector3D::from(raw);
        if position.is_null_sentinel() {
            self.position = None;
        } else {
            self.position = Some(position);
        }
    }

    /// Get the coordinates of the atom as raw coordinates.
    /// Undetermined position is returned as `[9999.0, 9999.0, 9999.0]`.
    pub fn get_raw_position(&self) -> [f32; 3] {
        self.position
            .unwrap_or_else(Vector3D::null_sentinel)
            .into()
    }

    /// Check whether the atom has a known position.
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Copy all properties of `src` into `self`.
    ///
    /// ## Notes
    /// - All owned data are cloned: `self` and `src` share no memory afterwards.
    pub fn copy_fields_from(&mut self, src: &Atom) {
        self.atom_number = src.atom_number;
        self.atom_name = src.atom_name;
        self.alt_location = src.alt_location;
        self.residue_name.clone_from(&src.residue_name);
        self.residue_number = src.residue_number;
        self.insertion_code = src.insertion_code;
        self.chain = src.chain;
        self.element.clone_from(&src.element);
        self.occupancy = src.occupancy;
        self.bfactor = src.bfactor;
        self.position = src.position;
    }

    /// Check whether the atom is a hydrogen (or deuterium).
    ///
    /// ## Notes
    /// - If the atom has an element assigned, the element symbol decides.
    /// - Otherwise, the atom is a hydrogen if the first non-digit character
    ///   of its name is `H` (this covers names such as `1HB `).
    pub fn is_hydrogen(&self) -> bool {
        match self.get_element() {
            Some(element) => matches!(element.trim(), "H" | "D"),
            None => self
                .atom_name
                .trimmed()
                .chars()
                .find(|c| !c.is_ascii_digit())
                == Some('H'),
        }
    }

    /// Check whether `self` and `other` belong to the same residue,
    /// i.e. whether they share residue number, insertion code, and chain.
    pub fn same_residue(&self, other: &Atom) -> bool {
        self.residue_number == other.residue_number
            && self.insertion_code == other.insertion_code
            && self.chain == other.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn make_default_atom() -> Atom {
        Atom::new(45, "GLY", 123, AtomName::padded("CA").unwrap())
            .with_chain('B')
            .with_element("C")
            .with_occupancy(0.75)
            .with_bfactor(23.5)
            .with_alt_location('A')
            .with_insertion_code('C')
            .with_position([15.123, 14.321, 9.834].into())
    }

    #[test]
    fn new() {
        let atom = Atom::new(45, "GLY", 123, AtomName::padded("CA").unwrap());

        assert_eq!(atom.get_residue_number(), 45);
        assert_eq!(atom.get_residue_name(), "GLY");
        assert_eq!(atom.get_atom_number(), 123);
        assert_eq!(atom.get_atom_name().as_str(), "CA  ");
        assert_eq!(atom.get_chain(), None);
        assert_eq!(atom.get_element(), None);
        assert_eq!(atom.get_alt_location(), None);
        assert_eq!(atom.get_insertion_code(), None);
        assert_approx_eq!(f32, atom.get_occupancy(), 0.0);
        assert_approx_eq!(f32, atom.get_bfactor(), 0.0);
        assert!(!atom.has_position());
    }

    #[test]
    fn default_is_cleared() {
        let atom = Atom::default();

        assert_eq!(atom.get_atom_number(), 0);
        assert!(atom.get_atom_name().is_blank());
        assert_eq!(atom.get_residue_name(), "");
        assert_eq!(atom.get_residue_number(), 0);
        assert!(atom.get_position().is_none());
    }

    #[test]
    fn builders() {
        let atom = make_default_atom();

        assert_eq!(atom.get_chain(), Some('B'));
        assert_eq!(atom.get_element(), Some("C"));
        assert_eq!(atom.get_alt_location(), Some('A'));
        assert_eq!(atom.get_insertion_code(), Some('C'));
        assert_approx_eq!(f32, atom.get_occupancy(), 0.75);
        assert_approx_eq!(f32, atom.get_bfactor(), 23.5);

        let pos = atom.get_position().unwrap();
        assert_approx_eq!(f32, pos.x, 15.123);
        assert_approx_eq!(f32, pos.y, 14.321);
        assert_approx_eq!(f32, pos.z, 9.834);
    }

    #[test]
    fn setters() {
        let mut atom = make_default_atom();

        atom.set_atom_number(7);
        atom.set_atom_name(AtomName::padded("CB").unwrap());
        atom.set_residue_name("ALA");
        atom.set_residue_number(-3);
        atom.set_chain('C');
        atom.set_alt_location('B');
        atom.set_insertion_code('D');
        atom.set_element("N");
        atom.set_occupancy(1.0);
        atom.set_bfactor(10.0);
        atom.set_position(Vector3D::new(1.0, 2.0, 3.0));

        assert_eq!(atom.get_atom_number(), 7);
        assert_eq!(atom.get_atom_name().trimmed(), "CB");
        assert_eq!(atom.get_residue_name(), "ALA");
        assert_eq!(atom.get_residue_number(), -3);
        assert_eq!(atom.get_chain(), Some('C'));
        assert_eq!(atom.get_alt_location(), Some('B'));
        assert_eq!(atom.get_insertion_code(), Some('D'));
        assert_eq!(atom.get_element(), Some("N"));
        assert_approx_eq!(f32, atom.get_occupancy(), 1.0);
        assert_approx_eq!(f32, atom.get_bfactor(), 10.0);
        assert_approx_eq!(f32, atom.get_position().unwrap().y, 2.0);

        atom.reset_position();
        assert!(!atom.has_position());
    }

    #[test]
    fn raw_position_all_null() {
        let atom = Atom::default().with_raw_position([9999.0, 9999.0, 9999.0]);
        assert!(!atom.has_position());
        assert_eq!(atom.get_raw_position(), [9999.0, 9999.0, 9999.0]);
    }

    #[test]
    fn raw_position_nan() {
        let atom = Atom::default().with_raw_position([f32::NAN, f32::NAN, f32::NAN]);
        assert!(!atom.has_position());
    }

    #[test]
    fn raw_position_partially_null() {
        let atom = Atom::default().with_raw_position([9999.0, 4.5, 9999.0]);
        assert!(atom.has_position());

        let pos = atom.get_position().unwrap();
        assert_approx_eq!(f32, pos.x, 9999.0);
        assert_approx_eq!(f32, pos.y, 4.5);
        assert_approx_eq!(f32, pos.z, 9999.0);
        assert_eq!(atom.get_raw_position(), [9999.0, 4.5, 9999.0]);
    }

    #[test]
    fn raw_position_known() {
        let atom = Atom::default().with_raw_position([1.0, -2.0, 3.0]);
        assert_eq!(atom.get_raw_position(), [1.0, -2.0, 3.0]);
    }

    #[test]
    fn copy_fields_from() {
        let src = make_default_atom();
        let mut dest = Atom::default();

        dest.copy_fields_from(&src);
        assert_eq!(dest, src);

        // modifying the copy does not modify the source
        dest.set_residue_name("ALA");
        dest.set_element("O");
        dest.set_position(Vector3D::new(0.0, 0.0, 0.0));
        assert_eq!(src.get_residue_name(), "GLY");
        assert_eq!(src.get_element(), Some("C"));
        assert_approx_eq!(f32, src.get_position().unwrap().x, 15.123);
    }

    #[test]
    fn copy_fields_from_unknown_position() {
        let src = Atom::new(1, "ALA", 1, AtomName::padded("N").unwrap());
        let mut dest = make_default_atom();

        dest.copy_fields_from(&src);
        assert_eq!(dest, src);
        assert!(!dest.has_position());
        assert_eq!(dest.get_chain(), None);
    }

    #[test]
    fn is_hydrogen() {
        let by_name = |name: &str| Atom::new(1, "ALA", 1, AtomName::padded(name).unwrap());

        assert!(by_name("H").is_hydrogen());
        assert!(by_name("HA").is_hydrogen());
        assert!(by_name("1HB").is_hydrogen());
        assert!(by_name("2HD1").is_hydrogen());
        assert!(!by_name("CA").is_hydrogen());
        assert!(!by_name("N").is_hydrogen());
        assert!(!by_name("").is_hydrogen());

        // element takes precedence over name
        assert!(!by_name("HG").with_element("Hg").is_hydrogen());
        assert!(by_name("XX").with_element("D").is_hydrogen());
        assert!(by_name("CA").with_element(" H").is_hydrogen());
    }

    #[test]
    fn same_residue() {
        let atom1 = Atom::new(5, "ALA", 1, AtomName::padded("N").unwrap()).with_chain('A');
        let atom2 = Atom::new(5, "ALA", 2, AtomName::padded("CA").unwrap()).with_chain('A');
        let atom3 = Atom::new(5, "ALA", 3, AtomName::padded("N").unwrap())
            .with_chain('A')
            .with_insertion_code('A');
        let atom4 = Atom::new(5, "ALA", 4, AtomName::padded("N").unwrap()).with_chain('B');
        let atom5 = Atom::new(6, "ALA", 5, AtomName::padded("N").unwrap()).with_chain('A');

        assert!(atom1.same_residue(&atom2));
        assert!(!atom1.same_residue(&atom3));
        assert!(!atom1.same_residue(&atom4));
        assert!(!atom1.same_residue(&atom5));
    }
}
