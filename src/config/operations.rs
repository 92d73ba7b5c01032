//! Parsers for the three recognized operation blocks.
//!
//! Each parser reads one `Operation` subtree and folds it into the registry
//! under construction. Required blocks and attributes are hard errors; the
//! whole load aborts rather than serving a partially described operation.

use crate::config::error::ConfigError;
use crate::config::identity::{Namespace, QueryableClass, qualified_name};
use crate::config::registry::CatalogRegistry;
use crate::xml::XmlElement;
use std::path::Path;

pub(crate) const OP_GET_CAPABILITIES: &str = "GetCapabilities";
pub(crate) const OP_GET_RECORDS: &str = "GetRecords";
pub(crate) const OP_DESCRIBE_RECORD: &str = "DescribeRecord";

const NUMBER_OF_KEYWORDS: &str = "NumberOfKeywords";
const PARAMETERS: &str = "Parameters";
const PARAMETER: &str = "Parameter";
const OUTPUT_FORMAT: &str = "OutputFormat";
const FORMAT: &str = "Format";
const CONSTRAINT_LANGUAGE: &str = "ConstraintLanguage";
const VALUE: &str = "Value";
const TYPENAMES: &str = "Typenames";
const TYPENAME: &str = "Typename";

/// Overwrite the advertised keyword count when the optional leaf is present.
pub(crate) fn apply_get_capabilities(
    registry: &mut CatalogRegistry,
    operation: &XmlElement,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(leaf) = operation.child(NUMBER_OF_KEYWORDS) {
        let value = leaf.text();
        registry.number_of_keywords =
            value.parse().map_err(|source| ConfigError::InvalidNumber {
                path: path.to_path_buf(),
                element: NUMBER_OF_KEYWORDS,
                value: value.to_string(),
                source,
            })?;
    }
    Ok(())
}

/// Fold a record-search block into the registry: parameter field mapping and
/// classification, range fields, output formats, constraint languages, and
/// typenames with their (flattened) schema URIs.
pub(crate) fn apply_get_records(
    registry: &mut CatalogRegistry,
    operation: &XmlElement,
    path: &Path,
) -> Result<(), ConfigError> {
    let parameters = require_child(operation, PARAMETERS, OP_GET_RECORDS, path)?;
    for parameter in parameters.children(PARAMETER) {
        let name = require_attr(parameter, PARAMETER, "name", path)?;
        let field = require_attr(parameter, PARAMETER, "field", path)?;
        let class = QueryableClass::from_type_attr(require_attr(parameter, PARAMETER, "type", path)?);
        let range = parameter.attr("range").unwrap_or("false");

        registry
            .field_mapping
            .insert(name.to_lowercase(), field.to_string());
        if range == "true" {
            registry.range_fields.insert(field.to_string());
        }
        // Classification never removes: a name retyped by a later file can
        // legitimately end up in both sets.
        match class {
            QueryableClass::Iso => registry.iso_queryables.insert(name.to_string()),
            QueryableClass::Additional => registry.additional_queryables.insert(name.to_string()),
        };
    }

    let formats = require_child(operation, OUTPUT_FORMAT, OP_GET_RECORDS, path)?;
    for format in formats.children(FORMAT) {
        registry
            .records_output_formats
            .insert(format.text().to_string());
    }

    let languages = require_child(operation, CONSTRAINT_LANGUAGE, OP_GET_RECORDS, path)?;
    for language in languages.children(VALUE) {
        registry
            .records_constraint_languages
            .insert(language.text().to_string());
    }

    let typenames = require_child(operation, TYPENAMES, OP_GET_RECORDS, path)?;
    for typename in typenames.children(TYPENAME) {
        let name = require_attr(typename, TYPENAME, "name", path)?;
        let prefix = require_attr(typename, TYPENAME, "prefix", path)?;
        let uri = require_attr(typename, TYPENAME, "namespace", path)?;
        registry
            .records_typenames
            .insert(qualified_name(prefix, name));
        registry.records_output_schemas.insert(uri.to_string());
    }

    Ok(())
}

/// Fold a schema-description block into the registry: typename-to-schema
/// mapping, declared namespaces, and output formats.
pub(crate) fn apply_describe_record(
    registry: &mut CatalogRegistry,
    operation: &XmlElement,
    path: &Path,
) -> Result<(), ConfigError> {
    let typenames = require_child(operation, TYPENAMES, OP_DESCRIBE_RECORD, path)?;
    for typename in typenames.children(TYPENAME) {
        let name = require_attr(typename, TYPENAME, "name", path)?;
        let prefix = require_attr(typename, TYPENAME, "prefix", path)?;
        let uri = require_attr(typename, TYPENAME, "namespace", path)?;
        let schema = require_attr(typename, TYPENAME, "schema", path)?;
        registry
            .describe_namespaces
            .insert(Namespace::new(prefix, uri));
        registry
            .describe_typenames
            .insert(qualified_name(prefix, name), schema.to_string());
    }

    let formats = require_child(operation, OUTPUT_FORMAT, OP_DESCRIBE_RECORD, path)?;
    for format in formats.children(FORMAT) {
        registry
            .describe_output_formats
            .insert(format.text().to_string());
    }

    Ok(())
}

fn require_child<'a>(
    operation: &'a XmlElement,
    element: &'static str,
    operation_name: &str,
    path: &Path,
) -> Result<&'a XmlElement, ConfigError> {
    operation
        .child(element)
        .ok_or_else(|| ConfigError::MissingElement {
            path: path.to_path_buf(),
            operation: operation_name.to_string(),
            element,
        })
}

fn require_attr<'a>(
    element: &'a XmlElement,
    element_name: &'static str,
    attribute: &'static str,
    path: &Path,
) -> Result<&'a str, ConfigError> {
    element
        .attr(attribute)
        .ok_or_else(|| ConfigError::MissingAttribute {
            path: path.to_path_buf(),
            element: element_name,
            attribute,
        })
}
