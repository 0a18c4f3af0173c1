//! Schema and model construction from validated fields.
//!
//! Fields are partitioned into measures and dimension attributes. A second
//! pass per concept family infers `labelfor` (label → code at the same
//! level) and `parent` (code at level N → code at level N−1) links from the
//! type paths alone. The pass only looks at the finished attribute set, so
//! it does not depend on insertion order.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::options::OptionsTable;
use crate::slug::slugify;
use crate::types::{FieldDescriptor, PathRole, TypeInfo, TypePath, MEASURE_FAMILY};

/// Data kind whose option schema applies to every measure.
const MEASURE_DATA_KIND: &str = "number";

/// Per-field schema record, keyed by slug in the parent [`Schema`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaField {
    pub slug: String,
    /// Original field name in the source data.
    pub source: String,
    pub title: String,
    /// Concept family the field belongs to (`amount` for measures).
    #[serde(rename = "type")]
    pub concept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Merged option values, embedded alongside the fixed keys.
    #[serde(flatten)]
    pub options: IndexMap<String, Value>,
}

/// Schema half of the output: one record per field, keyed by slug, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub fields: IndexMap<String, SchemaField>,
}

/// One dimension attribute with inferred hierarchy links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub source: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Slug of the code attribute this label annotates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labelfor: Option<String>,
    /// Slug of the code attribute one level up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dimension {
    pub attributes: IndexMap<String, Attribute>,
}

/// A measure: just its merged option values (currency, factor, direction,
/// phase) when any were supplied or defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Measure {
    #[serde(flatten)]
    pub options: IndexMap<String, Value>,
}

/// Model half of the output: dimensions grouped by concept family plus
/// measures keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub dimensions: IndexMap<String, Dimension>,
    pub measures: IndexMap<String, Measure>,
}

/// Combined output of a successful transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldsModel {
    pub schema: Schema,
    pub model: Model,
}

/// Build schema and model from validated fields, in input order.
pub fn build(options: &OptionsTable, fields: &[FieldDescriptor]) -> FieldsModel {
    let mut used = HashSet::new();
    let mut schema = Schema::default();
    let mut model = Model::default();
    // structural info per placed dimension attribute, for link inference
    let mut placed: Vec<(TypeInfo, String)> = Vec::new();

    for field in fields {
        let fallback = field
            .type_path
            .as_ref()
            .map(TypePath::as_str)
            .unwrap_or_default();
        let slug = slugify(&field.name, fallback, &mut used);

        if field.is_measure() {
            let (schema_options, measure_options) = merge_measure_options(options, &field.options);
            model.measures.insert(
                field.name.clone(),
                Measure {
                    options: measure_options,
                },
            );
            schema.fields.insert(
                slug.clone(),
                SchemaField {
                    slug: slug.clone(),
                    source: field.name.clone(),
                    title: field.name.clone(),
                    concept: MEASURE_FAMILY.to_string(),
                    resource: field.resource.clone(),
                    options: schema_options,
                },
            );
            continue;
        }

        // dimension attribute; is_measure() guarantees a type path here
        let Some(path) = &field.type_path else {
            continue;
        };
        let info = path.info();

        let dimension = model.dimensions.entry(info.family.clone()).or_default();
        dimension.attributes.insert(
            slug.clone(),
            Attribute {
                source: field.name.clone(),
                title: field.name.clone(),
                resource: field.resource.clone(),
                labelfor: None,
                parent: None,
            },
        );
        schema.fields.insert(
            slug.clone(),
            SchemaField {
                slug: slug.clone(),
                source: field.name.clone(),
                title: field.name.clone(),
                concept: info.family.clone(),
                resource: field.resource.clone(),
                options: field.options.clone(),
            },
        );
        placed.push((info, slug));
    }

    link_hierarchy(&mut model, &placed);
    FieldsModel { schema, model }
}

/// Merge supplied options with the external defaults for a measure.
///
/// `number`-kind results (decimal/group separators) land on the schema
/// record; `amount`-family results (currency, factor, direction, phase)
/// land on the measure itself. Supplied values win over defaults, and each
/// spec's transform is applied to the value that is embedded.
fn merge_measure_options(
    table: &OptionsTable,
    supplied: &IndexMap<String, Value>,
) -> (IndexMap<String, Value>, IndexMap<String, Value>) {
    let mut schema_options = IndexMap::new();
    let mut measure_options = IndexMap::new();

    for spec in table.get(MEASURE_DATA_KIND) {
        if let Some(value) = supplied.get(&spec.name).or(spec.default_value.as_ref()) {
            schema_options.insert(spec.name.clone(), spec.transform.apply(value));
        }
    }
    for spec in table.get(MEASURE_FAMILY) {
        if let Some(value) = supplied.get(&spec.name).or(spec.default_value.as_ref()) {
            measure_options.insert(spec.name.clone(), spec.transform.apply(value));
        }
    }

    (schema_options, measure_options)
}

/// Second pass over the finished attribute set: pair labels with the code
/// attribute at their level, and parent each code attribute to the code one
/// level above, within one concept family.
fn link_hierarchy(model: &mut Model, placed: &[(TypeInfo, String)]) {
    // first code slug per (family, level) in input order
    let mut codes: HashMap<(&str, Option<u32>), &str> = HashMap::new();
    for (info, slug) in placed {
        if info.role == PathRole::Code {
            codes
                .entry((info.family.as_str(), info.level))
                .or_insert(slug.as_str());
        }
    }

    for (info, slug) in placed {
        let target = match info.role {
            PathRole::Label => codes.get(&(info.family.as_str(), info.level)).copied(),
            PathRole::Code => info.level.filter(|n| *n > 1).and_then(|n| {
                codes.get(&(info.family.as_str(), Some(n - 1))).copied()
            }),
            PathRole::Other => None,
        };
        let Some(target) = target else {
            continue;
        };

        let Some(attribute) = model
            .dimensions
            .get_mut(info.family.as_str())
            .and_then(|dimension| dimension.attributes.get_mut(slug.as_str()))
        else {
            continue;
        };
        match info.role {
            PathRole::Label => attribute.labelfor = Some(target.to_string()),
            PathRole::Code => attribute.parent = Some(target.to_string()),
            PathRole::Other => {}
        }
    }
}
