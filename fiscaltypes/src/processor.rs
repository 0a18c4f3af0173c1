//! The public facade: catalog enumeration, prefix completion, and the
//! field-list transform, composed behind one type.

use serde_json::Value;
use tracing::debug;

use crate::builtin;
use crate::catalog::TypeCatalog;
use crate::error::{LoadError, StructuralErrors};
use crate::model::{self, FieldsModel};
use crate::options::OptionsTable;
use crate::types::TypePath;
use crate::validation;

/// Maps field descriptor lists into schema and model artifacts.
///
/// Holds the immutable catalog and option tables supplied at construction;
/// every operation is a pure function over its inputs plus that
/// configuration, so a processor can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TypeProcessor {
    catalog: TypeCatalog,
    options: OptionsTable,
}

impl TypeProcessor {
    /// Build a processor around explicit configuration.
    pub fn new(catalog: TypeCatalog, options: OptionsTable) -> Self {
        Self { catalog, options }
    }

    /// Build a processor around the built-in catalog and option tables.
    ///
    /// Fails fast when a built-in table is malformed; there is no partial
    /// fallback.
    pub fn with_defaults() -> Result<Self, LoadError> {
        Ok(Self::new(
            builtin::default_catalog()?,
            builtin::default_options()?,
        ))
    }

    /// Every registered type path, in catalog order.
    pub fn all_types(&self) -> Vec<&str> {
        self.catalog.all().iter().map(TypePath::as_str).collect()
    }

    /// Candidate continuations of `prefix`, for incremental editors.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.catalog.complete(prefix)
    }

    /// The catalog this processor was built with.
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// The option schemas this processor was built with.
    pub fn options(&self) -> &OptionsTable {
        &self.options
    }

    /// Validate a raw field list and derive schema and model from it.
    ///
    /// On rejection every structural error is returned at once; on success
    /// both halves of the output are always present.
    pub fn fields_to_model(&self, input: &Value) -> Result<FieldsModel, StructuralErrors> {
        let fields = validation::parse_fields(&self.catalog, input)?;
        debug!(fields = fields.len(), "field list validated");
        Ok(model::build(&self.options, &fields))
    }
}
