//! Core value types: hierarchical type paths and field descriptors.
//!
//! A type path is a colon-separated string such as
//! `economic-classification:dimension:level2:code`. The first segment names
//! the concept family; later segments carry an optional `levelN` marker and
//! a `code`/`label` role used for hierarchy inference.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between segments of a type path.
pub const PATH_SEPARATOR: char = ':';

/// Concept family assigned to plain measures (empty or null type).
pub const MEASURE_FAMILY: &str = "amount";

/// A colon-separated hierarchical type path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypePath(String);

impl TypePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path's segments, in order. An empty path yields one empty segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// The concept family: the first segment.
    pub fn family(&self) -> &str {
        self.segments().next().unwrap_or("")
    }

    /// Structural reading of the path for hierarchy inference.
    pub fn info(&self) -> TypeInfo {
        let mut segments = self.segments();
        let family = segments.next().unwrap_or("").to_string();

        let mut level = None;
        let mut role = PathRole::Other;
        for segment in segments {
            if let Some(digits) = segment.strip_prefix("level") {
                if let Ok(n) = digits.parse::<u32>() {
                    level = Some(n);
                }
            } else if segment == "code" {
                role = PathRole::Code;
            } else if segment == "label" {
                role = PathRole::Label;
            }
        }

        TypeInfo { family, level, role }
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Role a path plays inside a dimension hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// A coded attribute, candidate for `parent` links.
    Code,
    /// A descriptive label, candidate for `labelfor` links.
    Label,
    /// Neither; placed as a plain attribute with no links.
    Other,
}

/// Structural reading of a type path: concept family, optional hierarchy
/// level, and code/label role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub family: String,
    pub level: Option<u32>,
    pub role: PathRole,
}

/// A validated input field: human title plus an optional catalog type.
///
/// Produced by [`crate::validation::parse_fields`]; `type_path` is `None`
/// when the raw type was empty or null, which marks the field as a plain
/// measure.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub type_path: Option<TypePath>,
    pub options: IndexMap<String, Value>,
    pub resource: Option<String>,
}

impl FieldDescriptor {
    /// Whether this field is a plain measure rather than a dimension
    /// attribute.
    pub fn is_measure(&self) -> bool {
        match &self.type_path {
            None => true,
            Some(path) => path.family() == MEASURE_FAMILY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_first_segment() {
        let path = TypePath::new("economic-classification:dimension:level2:code");
        assert_eq!(path.family(), "economic-classification");
    }

    #[test]
    fn family_of_single_segment_path() {
        assert_eq!(TypePath::new("amount").family(), "amount");
    }

    #[test]
    fn info_reads_level_and_code_role() {
        let info = TypePath::new("economic-classification:dimension:level2:code").info();
        assert_eq!(info.family, "economic-classification");
        assert_eq!(info.level, Some(2));
        assert_eq!(info.role, PathRole::Code);
    }

    #[test]
    fn info_reads_label_role() {
        let info = TypePath::new("administrative-classification:dimension:level1:label").info();
        assert_eq!(info.level, Some(1));
        assert_eq!(info.role, PathRole::Label);
    }

    #[test]
    fn info_without_level_segment() {
        let info = TypePath::new("functional-classification:dimension:code:full").info();
        assert_eq!(info.level, None);
        assert_eq!(info.role, PathRole::Code);
    }

    #[test]
    fn info_without_role_segment() {
        let info = TypePath::new("fiscalYear:dimension").info();
        assert_eq!(info.family, "fiscalYear");
        assert_eq!(info.level, None);
        assert_eq!(info.role, PathRole::Other);
    }

    #[test]
    fn level_segment_must_be_numeric() {
        // "levelled" is not a level marker
        let info = TypePath::new("x:dimension:levelled:code").info();
        assert_eq!(info.level, None);
    }

    #[test]
    fn measure_detection() {
        let measure = FieldDescriptor {
            name: "spend".into(),
            type_path: None,
            options: IndexMap::new(),
            resource: None,
        };
        assert!(measure.is_measure());

        let typed = FieldDescriptor {
            name: "spend".into(),
            type_path: Some(TypePath::new("amount")),
            options: IndexMap::new(),
            resource: None,
        };
        assert!(typed.is_measure());

        let dimension = FieldDescriptor {
            name: "code".into(),
            type_path: Some(TypePath::new("geo:dimension:code")),
            options: IndexMap::new(),
            resource: None,
        };
        assert!(!dimension.is_measure());
    }
}
