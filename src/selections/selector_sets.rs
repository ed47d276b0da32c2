// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of the `SelectorSets` structure: named sets of atom names used for selecting atoms.

use indexmap::IndexMap;

use crate::errors::SelectorSetError;
use crate::structures::atom_name::AtomName;

/// Named sets of atom names which can be used for selecting atoms,
/// e.g. `backbone` consisting of `N`, `CA`, `C`, and `O`.
/// The sets are kept in the order in which they were defined.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorSets {
    sets: IndexMap<String, Vec<AtomName>>,
}

impl Default for SelectorSets {
    /// Construct a default `SelectorSets` structure.
    ///
    /// ## Notes
    /// - This function parses YAML content from `src/config/selectors.yaml`
    ///   which is included in the `atomlist_rs` library at compile time.
    fn default() -> Self {
        let yaml = include_str!("../config/selectors.yaml");

        SelectorSets::new_from_string(yaml)
            .expect("FATAL ATOMLIST ERROR | SelectorSets::default | Default `selectors.yaml` file could not be parsed.")
    }
}

impl SelectorSets {
    /// Construct a new `SelectorSets` structure from a YAML string.
    ///
    /// ## Returns
    /// `SelectorSets` structure if parsing was successful.
    /// `SelectorSetError` otherwise.
    ///
    /// ## Notes
    /// - The YAML input must be a map of set names to lists of atom names.
    ///   Atom names shorter than 4 characters are padded with spaces from the right.
    ///   Quote names with leading spaces (e.g., `" CA "`).
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// let yaml = "sidechain_ser: [CB, OG]\ncbeta: [CB]\n";
    /// let sets = SelectorSets::new_from_string(yaml).unwrap();
    ///
    /// assert_eq!(sets.get("sidechain_ser").unwrap().len(), 2);
    /// assert_eq!(sets.names().collect::<Vec<_>>(), vec!["sidechain_ser", "cbeta"]);
    /// ```
    pub fn new_from_string(yaml: &str) -> Result<Self, SelectorSetError> {
        let raw: IndexMap<String, Vec<String>> =
            serde_yaml::from_str(yaml).map_err(SelectorSetError::CouldNotParseYaml)?;

        let mut sets = IndexMap::with_capacity(raw.len());
        for (name, atom_names) in raw.into_iter() {
            let selectors = atom_names
                .iter()
                .map(|atom_name| AtomName::padded(atom_name))
                .collect::<Result<Vec<AtomName>, _>>()
                .map_err(|e| SelectorSetError::InvalidName(name.clone(), e))?;

            sets.insert(name, selectors);
        }

        Ok(SelectorSets { sets })
    }

    /// Update `SelectorSets` using sets from the provided YAML string.
    /// Sets with already existing names are replaced, other sets are added.
    ///
    /// ## Returns
    /// `Ok` if the parsing was successful.
    /// `SelectorSetError` otherwise. If an error occurs, the `SelectorSets` structure is not changed.
    pub fn update_from_string(&mut self, yaml: &str) -> Result<(), SelectorSetError> {
        let parsed = SelectorSets::new_from_string(yaml)?;

        for (name, selectors) in parsed.sets.into_iter() {
            self.sets.insert(name, selectors);
        }

        Ok(())
    }

    /// Get the atom names of the set `name`.
    ///
    /// ## Returns
    /// - Slice of atom names.
    /// - `SelectorSetError::NotFound` if no such set exists.
    pub fn get(&self, name: &str) -> Result<&[AtomName], SelectorSetError> {
        self.sets
            .get(name)
            .map(|selectors| selectors.as_slice())
            .ok_or_else(|| SelectorSetError::NotFound(name.to_owned()))
    }

    /// Check whether the set `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Iterate over the names of all sets in the order in which they were defined.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(|name| name.as_str())
    }

    /// Get the number of sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if there are no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
