//! Typed lookup tables built from the catalog configuration.
//!
//! A `CatalogRegistry` is produced by one load call and never mutated
//! afterwards; request handlers read it through the accessors below. Each
//! field carries an explicit merge policy for when several configuration
//! files (via includes) touch it: *override* fields keep the value from the
//! last file applied, *union* fields accumulate across every file.

use crate::config::identity::{Namespace, QueryableClass};
use arc_swap::ArcSwap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Keyword count advertised by capability discovery when no configuration
/// file overrides it.
pub const DEFAULT_NUMBER_OF_KEYWORDS: u32 = 10;

/// Lookup tables the request handlers consult.
///
/// Merge policies: `number_of_keywords`, `field_mapping` entries, and
/// `describe_typenames` entries are override (last file wins); every set is
/// union. Queryable classification is override per file but never removes,
/// so conflicting files can leave one name in both queryable sets.
/// `records_output_schemas` is a flat set of namespace URIs: the association
/// with the typename that declared each URI is not kept.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogRegistry {
    pub(crate) number_of_keywords: u32,
    pub(crate) field_mapping: BTreeMap<String, String>,
    pub(crate) iso_queryables: BTreeSet<String>,
    pub(crate) additional_queryables: BTreeSet<String>,
    pub(crate) range_fields: BTreeSet<String>,
    pub(crate) records_constraint_languages: BTreeSet<String>,
    pub(crate) records_output_formats: BTreeSet<String>,
    pub(crate) records_output_schemas: BTreeSet<String>,
    pub(crate) records_typenames: BTreeSet<String>,
    pub(crate) describe_typenames: BTreeMap<String, String>,
    pub(crate) describe_namespaces: BTreeSet<Namespace>,
    pub(crate) describe_output_formats: BTreeSet<String>,
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self {
            number_of_keywords: DEFAULT_NUMBER_OF_KEYWORDS,
            field_mapping: BTreeMap::new(),
            iso_queryables: BTreeSet::new(),
            additional_queryables: BTreeSet::new(),
            range_fields: BTreeSet::new(),
            records_constraint_languages: BTreeSet::new(),
            records_output_formats: BTreeSet::new(),
            records_output_schemas: BTreeSet::new(),
            records_typenames: BTreeSet::new(),
            describe_typenames: BTreeMap::new(),
            describe_namespaces: BTreeSet::new(),
            describe_output_formats: BTreeSet::new(),
        }
    }
}

impl CatalogRegistry {
    /// Keyword count for capability discovery.
    pub fn number_of_keywords(&self) -> u32 {
        self.number_of_keywords
    }

    /// Lower-cased queryable name to backing field name.
    pub fn field_mapping(&self) -> &BTreeMap<String, String> {
        &self.field_mapping
    }

    /// Queryable names in the requested classification set.
    pub fn queryables(&self, class: QueryableClass) -> &BTreeSet<String> {
        match class {
            QueryableClass::Iso => &self.iso_queryables,
            QueryableClass::Additional => &self.additional_queryables,
        }
    }

    /// Field names accepted in range queries.
    pub fn range_fields(&self) -> &BTreeSet<String> {
        &self.range_fields
    }

    /// Accepted constraint language identifiers for record search.
    pub fn records_constraint_languages(&self) -> &BTreeSet<String> {
        &self.records_constraint_languages
    }

    /// Output formats record search can render.
    pub fn records_output_formats(&self) -> &BTreeSet<String> {
        &self.records_output_formats
    }

    /// Namespace URIs record search can emit records under. Catalog-global:
    /// not tied back to the typename whose declaration contributed them.
    pub fn records_output_schemas(&self) -> &BTreeSet<String> {
        &self.records_output_schemas
    }

    /// Qualified `prefix:name` typenames record search accepts.
    pub fn records_typenames(&self) -> &BTreeSet<String> {
        &self.records_typenames
    }

    /// Qualified `prefix:name` typename to schema identifier for schema
    /// description.
    pub fn describe_typenames(&self) -> &BTreeMap<String, String> {
        &self.describe_typenames
    }

    /// Declared (prefix, URI) pairs for schema description.
    pub fn describe_namespaces(&self) -> &BTreeSet<Namespace> {
        &self.describe_namespaces
    }

    /// Output formats schema description can render.
    pub fn describe_output_formats(&self) -> &BTreeSet<String> {
        &self.describe_output_formats
    }
}

/// Atomically swappable holder for the registry serving requests.
///
/// Readers take an `Arc` snapshot and keep it for as long as they need;
/// a reload builds a fresh `CatalogRegistry` off to the side and `replace`s
/// it here, so in-flight readers never observe a half-built registry.
#[derive(Debug)]
pub struct RegistryHandle {
    snap: ArcSwap<CatalogRegistry>,
}

impl RegistryHandle {
    pub fn new(registry: CatalogRegistry) -> Self {
        Self {
            snap: ArcSwap::from_pointee(registry),
        }
    }

    /// The registry snapshot current at this instant.
    pub fn current(&self) -> Arc<CatalogRegistry> {
        self.snap.load_full()
    }

    /// Publish a freshly built registry to subsequent `current` calls.
    pub fn replace(&self, registry: CatalogRegistry) {
        self.snap.store(Arc::new(registry));
    }
}
