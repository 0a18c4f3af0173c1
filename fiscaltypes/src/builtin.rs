//! Built-in type catalog and option tables shipped with the crate.
//!
//! Both tables are plain JSON documents parsed once at start-up; a parse
//! failure is a fatal [`LoadError`], never a silent degradation.

use crate::catalog::TypeCatalog;
use crate::error::Result;
use crate::options::OptionsTable;

const TYPES_JSON: &str = include_str!("data/types.json");
const OPTIONS_JSON: &str = include_str!("data/options.json");

/// The default registered type paths.
pub fn default_catalog() -> Result<TypeCatalog> {
    let paths: Vec<String> = serde_json::from_str(TYPES_JSON)?;
    TypeCatalog::from_paths(paths)
}

/// The default per-family option schemas.
pub fn default_options() -> Result<OptionsTable> {
    Ok(serde_json::from_str(OPTIONS_JSON)?)
}
