//! The catalog of registered type paths: exact-leaf lookup and prefix
//! completion for interactive editors.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{LoadError, Result};
use crate::types::{TypePath, PATH_SEPARATOR};

/// Ordered, immutable collection of every registered type path.
///
/// A path registered verbatim is a *leaf* and may be assigned to a field.
/// A strict segment-prefix of a leaf is a *branch*: it shows up during
/// completion but is never assignable.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    paths: Vec<TypePath>,
    leaves: HashSet<String>,
}

impl TypeCatalog {
    /// Build a catalog from an ordered list of path strings.
    ///
    /// The list must be non-empty, free of duplicates, and every segment of
    /// every path non-empty. The catalog is immutable once built.
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut leaves = HashSet::new();

        for path in paths {
            let path = path.into();
            if path.is_empty() || path.split(PATH_SEPARATOR).any(str::is_empty) {
                return Err(LoadError::MalformedPath { path });
            }
            if !leaves.insert(path.clone()) {
                return Err(LoadError::DuplicatePath { path });
            }
            ordered.push(TypePath::new(path));
        }

        if ordered.is_empty() {
            return Err(LoadError::EmptyCatalog);
        }

        debug!(paths = ordered.len(), "type catalog loaded");
        Ok(Self {
            paths: ordered,
            leaves,
        })
    }

    /// Every registered path, in catalog order.
    pub fn all(&self) -> &[TypePath] {
        &self.paths
    }

    /// Whether `path` is registered verbatim and therefore assignable.
    pub fn is_leaf(&self, path: &str) -> bool {
        self.leaves.contains(path)
    }

    /// Whether `path` is a strict segment-prefix of some registered leaf.
    pub fn is_branch(&self, path: &str) -> bool {
        let mut prefix = String::with_capacity(path.len() + 1);
        prefix.push_str(path);
        prefix.push(PATH_SEPARATOR);
        self.paths.iter().any(|p| p.as_str().starts_with(&prefix))
    }

    /// Candidate continuations of `prefix`, deduplicated in first-seen
    /// order.
    ///
    /// A matching entry with further structure past the prefix contributes
    /// the entry truncated just after the next separator; an entry that
    /// ends inside its final segment contributes the whole leaf string.
    /// The empty prefix yields the first-level segment set.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut candidates: IndexSet<String> = IndexSet::new();

        for path in &self.paths {
            let Some(rest) = path.as_str().strip_prefix(prefix) else {
                continue;
            };
            match rest.find(PATH_SEPARATOR) {
                Some(sep) => {
                    let end = prefix.len() + sep + 1;
                    candidates.insert(path.as_str()[..end].to_string());
                }
                None => {
                    candidates.insert(path.as_str().to_string());
                }
            }
        }

        candidates.into_iter().collect()
    }
}
