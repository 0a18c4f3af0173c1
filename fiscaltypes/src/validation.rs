//! Structural validation of raw field descriptors.
//!
//! Parses untrusted JSON into typed [`FieldDescriptor`]s, collecting every
//! structural problem instead of stopping at the first. The whole input is
//! accepted or rejected as a unit; downstream code never re-checks shape.

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::TypeCatalog;
use crate::error::{StructuralError, StructuralErrors};
use crate::types::{FieldDescriptor, TypePath};

const ALLOWED_KEYS: &[&str] = &["type", "name", "options", "resource"];

/// Parse and validate a raw field list against the catalog.
pub fn parse_fields(
    catalog: &TypeCatalog,
    input: &Value,
) -> Result<Vec<FieldDescriptor>, StructuralErrors> {
    let Some(entries) = input.as_array() else {
        return Err(StructuralErrors::new(vec![StructuralError::NotAnArray]));
    };

    let mut errors = Vec::new();
    let mut fields = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if let Some(field) = parse_field(catalog, index, entry, &mut errors) {
            fields.push(field);
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(StructuralErrors::new(errors))
    }
}

fn parse_field(
    catalog: &TypeCatalog,
    index: usize,
    entry: &Value,
    errors: &mut Vec<StructuralError>,
) -> Option<FieldDescriptor> {
    let Some(record) = entry.as_object() else {
        errors.push(StructuralError::NotAnObject { index });
        return None;
    };

    let before = errors.len();

    for key in record.keys() {
        if !ALLOWED_KEYS.contains(&key.as_str()) {
            errors.push(StructuralError::UnknownKey {
                index,
                key: key.clone(),
            });
        }
    }

    let name = match record.get("name") {
        Some(Value::String(name)) => Some(name.clone()),
        Some(_) => {
            errors.push(StructuralError::NameNotString { index });
            None
        }
        None => {
            errors.push(StructuralError::MissingKey { index, key: "name" });
            None
        }
    };

    // '' and null both mean "plain measure"; anything else must be a
    // registered leaf, with branches called out separately.
    let type_path = match record.get("type") {
        Some(Value::Null) => None,
        Some(Value::String(path)) if path.is_empty() => None,
        Some(Value::String(path)) => {
            if catalog.is_leaf(path) {
                Some(TypePath::new(path.clone()))
            } else {
                if catalog.is_branch(path) {
                    errors.push(StructuralError::BranchType {
                        index,
                        path: path.clone(),
                    });
                } else {
                    errors.push(StructuralError::UnknownType {
                        index,
                        path: path.clone(),
                    });
                }
                None
            }
        }
        Some(_) => {
            errors.push(StructuralError::TypeNotString { index });
            None
        }
        None => {
            errors.push(StructuralError::MissingKey { index, key: "type" });
            None
        }
    };

    let options: IndexMap<String, Value> = match record.get("options") {
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Some(_) => {
            errors.push(StructuralError::OptionsNotObject { index });
            IndexMap::new()
        }
        None => IndexMap::new(),
    };

    let resource = match record.get("resource") {
        Some(Value::String(resource)) => Some(resource.clone()),
        Some(_) => {
            errors.push(StructuralError::ResourceNotString { index });
            None
        }
        None => None,
    };

    if errors.len() > before {
        return None;
    }

    Some(FieldDescriptor {
        name: name?,
        type_path,
        options,
        resource,
    })
}
