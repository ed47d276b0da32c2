// Released under MIT License.
// Copyright (c) 2023 Ladislav Bartos

//! Implementation of errors returned by the `atomlist_rs` library.

use thiserror::Error;

/// Errors that can occur when constructing or modifying an `Atom`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AtomError {
    #[error("Atom name `{0}` is not exactly 4 characters long. (Pad it with spaces.)")]
    InvalidNameLength(String),
    #[error("Atom name `{0}` is longer than 4 characters.")]
    NameTooLong(String),
    #[error("Atom name `{0}` contains non-ASCII characters.")]
    NonAsciiName(String),
}

/// Errors that can occur when working with `AtomSequence`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Could not allocate memory for `{0}` atom(s).")]
    AllocationFailure(usize),
    #[error("Range `{0}..{1}` is not valid for a sequence of `{2}` atoms.")]
    InvalidRange(usize, usize, usize),
    #[error("{0}")]
    InvalidSelectorSet(SelectorSetError),
}

/// Errors that can occur when calculating an aggregate property of a range of atoms.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Range `{0}..{1}` contains no atom with a known position.")]
    EmptyAggregate(usize, usize),
}

/// Errors that can occur when reading or using selector sets.
#[derive(Error, Debug)]
pub enum SelectorSetError {
    #[error("Could not parse yaml input as selector sets: `{0}`.")]
    CouldNotParseYaml(serde_yaml::Error),
    #[error("Selector set `{0}` contains an invalid atom name: {1}")]
    InvalidName(String, AtomError),
    #[error("Selector set `{0}` does not exist.")]
    NotFound(String),
}

impl PartialEq for SelectorSetError {
    /// YAML parsing errors are considered equal to each other.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::CouldNotParseYaml(_), Self::CouldNotParseYaml(_)) => true,
            (Self::InvalidName(a, e1), Self::InvalidName(b, e2)) => a == b && e1 == e2,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SelectorSetError {}
