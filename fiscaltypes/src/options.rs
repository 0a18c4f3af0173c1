//! Per-family option schemas: which configurable options a measure or a
//! primitive data kind accepts, with default values and value transforms.
//!
//! The table is plain data — transforms are a closed tagged set rather than
//! embedded functions, so the whole table serializes to JSON and every
//! transform kind is enumerable in tests.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One enumerated choice for an option with a fixed value set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: Value,
}

/// Marker for options whose raw value must be numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Number,
}

/// Transform applied when a raw option value is embedded into output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Transform {
    /// Pass the value through unchanged.
    #[default]
    Identity,
    /// Prefix string values with a fixed marker, e.g. `fmt:` for format
    /// strings. Non-string values pass through.
    PrefixWrap { prefix: String },
}

impl Transform {
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            Self::Identity => value.clone(),
            Self::PrefixWrap { prefix } => match value {
                Value::String(s) => Value::String(format!("{prefix}{s}")),
                other => other.clone(),
            },
        }
    }

    fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

/// Descriptor for a single configurable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSpec {
    pub name: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Enumerated legal values; empty means free-form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<OptionChoice>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<OptionKind>,

    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
}

/// Option schemas keyed by family name: the `amount` measure family plus
/// the primitive data kinds (`datetime`, `date`, `time`, `number`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsTable {
    families: IndexMap<String, Vec<OptionSpec>>,
}

impl OptionsTable {
    pub fn new(families: IndexMap<String, Vec<OptionSpec>>) -> Self {
        Self { families }
    }

    /// Option descriptors for a family, in table order. Unknown families
    /// have no options.
    pub fn get(&self, family: &str) -> &[OptionSpec] {
        self.families.get(family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every family name with a registered option schema.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }
}
