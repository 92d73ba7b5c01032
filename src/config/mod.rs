//! Catalog configuration registry.
//!
//! `load_registry` reads a declarative configuration tree (a root document
//! plus recursive includes) and materializes the typed lookup tables the
//! request handlers consult: queryable field mappings and classifications,
//! range fields, output formats, constraint languages, typenames, and
//! declared namespaces. The result is immutable; services hold it behind a
//! `RegistryHandle` so a reload swaps in a fresh instance without touching
//! snapshots in-flight readers already hold.

pub mod error;
pub mod identity;
pub mod loader;
mod operations;
pub mod registry;

pub use error::ConfigError;
pub use identity::{ISO_QUERYABLES_TYPE, Namespace, QueryableClass, qualified_name};
pub use loader::{CONFIG_DIR, load_registry};
pub use registry::{CatalogRegistry, DEFAULT_NUMBER_OF_KEYWORDS, RegistryHandle};
