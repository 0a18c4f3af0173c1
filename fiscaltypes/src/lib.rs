//! Field type catalog, validation, and model inference for fiscal data
//! packages.
//!
//! Maps a flat list of field descriptors — each tagged with a hierarchical
//! type path such as `economic-classification:dimension:level2:code` — into
//! two derived artifacts:
//!
//! - a **schema**: per-field metadata keyed by a generated slug, in input
//!   order;
//! - a **model**: the same fields regrouped into dimension hierarchies and
//!   measures, with parent and label links inferred from the type paths.
//!
//! It also answers prefix-completion queries over the catalog of registered
//! type paths, for editors that build field lists incrementally.
//!
//! # Architecture
//!
//! - **Configuration-injected**: [`TypeProcessor`] takes the catalog and
//!   option tables at construction; `with_defaults()` loads the built-in
//!   JSON tables. No global state.
//! - **Validate-then-trust**: raw JSON input is parsed into typed
//!   [`FieldDescriptor`]s up front, with every structural problem collected
//!   into one [`StructuralErrors`] value; nothing re-checks shape later.
//! - **Pure operations**: every call is a function of its inputs plus the
//!   immutable configuration; the slug set is scoped to a single transform.

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod model;
pub mod options;
pub mod processor;
pub mod slug;
pub mod types;
pub mod validation;

pub use catalog::TypeCatalog;
pub use error::{LoadError, Result, StructuralError, StructuralErrors};
pub use model::{Attribute, Dimension, FieldsModel, Measure, Model, Schema, SchemaField};
pub use options::{OptionChoice, OptionKind, OptionSpec, OptionsTable, Transform};
pub use processor::TypeProcessor;
pub use types::{FieldDescriptor, PathRole, TypeInfo, TypePath, MEASURE_FAMILY, PATH_SEPARATOR};
