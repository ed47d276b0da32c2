// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of the fixed-width atom name tag.

use std::fmt;
use std::str::FromStr;

use crate::errors::AtomError;

/// Width of an atom name tag in characters.
pub const ATOM_NAME_WIDTH: usize = 4;

/// Four-character atom name tag as used in PDB records, e.g. `" CA "` or `"CA  "`.
/// Names are compared byte-for-byte, including the padding spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomName(pub(crate) [u8; ATOM_NAME_WIDTH]);

impl AtomName {
    /// Create a new atom name tag from a string which must be exactly 4 ASCII characters long.
    ///
    /// ## Returns
    /// - `AtomName` if successful.
    /// - `AtomError::InvalidNameLength` if the name is not 4 characters long.
    /// - `AtomError::NonAsciiName` if the name contains non-ASCII characters.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let name = AtomName::new("CA  ").unwrap();
    /// assert_eq!(name.as_str(), "CA  ");
    ///
    /// // shorter names must be padded
    /// assert!(AtomName::new("CA").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self, AtomError> {
        if !name.is_ascii() {
            return Err(AtomError::NonAsciiName(name.to_owned()));
        }

        let bytes: [u8; ATOM_NAME_WIDTH] = name
            .as_bytes()
            .try_into()
            .map_err(|_| AtomError::InvalidNameLength(name.to_owned()))?;

        Ok(AtomName(bytes))
    }

    /// Create a new atom name tag padding the provided name with spaces from the right.
    ///
    /// ## Returns
    /// - `AtomName` if successful.
    /// - `AtomError::NameTooLong` if the name is longer than 4 characters.
    /// - `AtomError::NonAsciiName` if the name contains non-ASCII characters.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let name = AtomName::padded("CA").unwrap();
    /// assert_eq!(name, AtomName::new("CA  ").unwrap());
    /// ```
    pub fn padded(name: &str) -> Result<Self, AtomError> {
        if !name.is_ascii() {
            return Err(AtomError::NonAsciiName(name.to_owned()));
        }

        if name.len() > ATOM_NAME_WIDTH {
            return Err(AtomError::NameTooLong(name.to_owned()));
        }

        let mut bytes = [b' '; ATOM_NAME_WIDTH];
        bytes[..name.len()].copy_from_slice(name.as_bytes());

        Ok(AtomName(bytes))
    }

    /// Get the atom name tag as a string slice (including padding).
    pub fn as_str(&self) -> &str {
        // only ASCII bytes are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the atom name without leading and trailing spaces.
    pub fn trimmed(&self) -> &str {
        self.as_str().trim()
    }

    /// Get the raw bytes of the atom name tag.
    pub fn as_bytes(&self) -> &[u8; ATOM_NAME_WIDTH] {
        &self.0
    }

    /// Returns `true` if the atom name tag is blank (consists only of spaces).
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ')
    }
}

impl Default for AtomName {
    /// Create a blank atom name tag.
    fn default() -> Self {
        AtomName([b' '; ATOM_NAME_WIDTH])
    }
}

impl FromStr for AtomName {
    type Err = AtomError;

    /// Parse atom name padding it with spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AtomName::padded(s)
    }
}

impl fmt::Display for AtomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
