//! Error types for catalog loading and field validation.

use std::fmt;

use thiserror::Error;

/// Result type for operations that can fail at configuration load.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Fatal configuration failure: the type catalog or option tables are
/// missing or malformed. Callers should fail fast rather than degrade —
/// every other guarantee depends on a complete catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog contains no paths.
    #[error("type catalog is empty")]
    EmptyCatalog,

    /// A path is empty or contains an empty segment.
    #[error("malformed type path: '{path}'")]
    MalformedPath { path: String },

    /// The same path is registered twice.
    #[error("duplicate type path: '{path}'")]
    DuplicatePath { path: String },

    /// A built-in table failed to parse.
    #[error("malformed configuration table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single structural problem with an input field list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("input must be an array of field objects")]
    NotAnArray,

    #[error("field {index}: expected an object")]
    NotAnObject { index: usize },

    #[error("field {index}: missing required key '{key}'")]
    MissingKey { index: usize, key: &'static str },

    #[error("field {index}: unknown key '{key}'")]
    UnknownKey { index: usize, key: String },

    #[error("field {index}: 'name' must be a string")]
    NameNotString { index: usize },

    #[error("field {index}: 'type' must be a string or null")]
    TypeNotString { index: usize },

    #[error("field {index}: unknown type '{path}'")]
    UnknownType { index: usize, path: String },

    /// The path is a strict prefix of registered leaves; only maximally
    /// specific types are assignable.
    #[error("field {index}: type '{path}' is not fully specified")]
    BranchType { index: usize, path: String },

    #[error("field {index}: 'options' must be an object")]
    OptionsNotObject { index: usize },

    #[error("field {index}: 'resource' must be a string")]
    ResourceNotString { index: usize },
}

/// Every structural problem found in one validation pass.
///
/// Validation is all-or-nothing: the presence of this value means no schema
/// or model was produced. Never empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralErrors(Vec<StructuralError>);

impl StructuralErrors {
    pub(crate) fn new(errors: Vec<StructuralError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StructuralError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StructuralError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StructuralErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for StructuralErrors {}

impl IntoIterator for StructuralErrors {
    type Item = StructuralError;
    type IntoIter = std::vec::IntoIter<StructuralError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
