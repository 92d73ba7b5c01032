//! Configuration registry for a CSW catalog search service.
//!
//! The crate owns the load phase of the service: it reads the declarative
//! operation configuration (capability discovery, record search, schema
//! description), recursively expands includes, and builds the typed lookup
//! tables the request-handling layer consults on every query. Request
//! execution itself lives elsewhere; handlers only read the registry
//! accessors exposed here.
//!
//! `xml` is the markup collaborator boundary, `config` the loader and
//! registry, `metadata` a thin single-document visitor for packaged
//! records.

pub mod config;
pub mod metadata;
pub mod xml;

pub use config::{
    CONFIG_DIR, CatalogRegistry, ConfigError, DEFAULT_NUMBER_OF_KEYWORDS, ISO_QUERYABLES_TYPE,
    Namespace, QueryableClass, RegistryHandle, load_registry, qualified_name,
};
pub use metadata::{MetadataHandler, visit_metadata_file};
pub use xml::{XmlElement, XmlError};
