//! Recursive configuration loader.
//!
//! One load call walks a root document and every file it includes,
//! depth-first, folding each recognized operation block into a single
//! registry. Local operations of a file are fully applied before its
//! includes are traversed, which is what makes the override/union merge
//! policies of `CatalogRegistry` deterministic.

use crate::config::error::ConfigError;
use crate::config::operations::{
    self, OP_DESCRIBE_RECORD, OP_GET_CAPABILITIES, OP_GET_RECORDS,
};
use crate::config::registry::CatalogRegistry;
use crate::xml::{self, XmlElement, XmlError};
use std::path::Path;
use tracing::{debug, info};

/// Configuration files are resolved against this subdirectory of the base
/// path handed to `load_registry`.
pub const CONFIG_DIR: &str = "config";

/// Include chains deeper than this fail the load; a configuration cycle
/// would otherwise recurse forever.
const MAX_INCLUDE_DEPTH: usize = 32;

const OPERATIONS: &str = "Operations";
const OPERATION: &str = "Operation";
const INCLUDE: &str = "Include";

/// Build a registry from `<base>/config/<file>` and everything it includes.
///
/// Returns the finished registry or the first fatal error; no partially
/// populated registry escapes a failed load. Callers that serve requests
/// typically hand the result to a `RegistryHandle`.
pub fn load_registry(base: &Path, file: &str) -> Result<CatalogRegistry, ConfigError> {
    let mut registry = CatalogRegistry::default();
    load_file(&mut registry, base, file, 0)?;
    Ok(registry)
}

fn load_file(
    registry: &mut CatalogRegistry,
    base: &Path,
    file: &str,
    depth: usize,
) -> Result<(), ConfigError> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(ConfigError::IncludeDepth {
            file: file.to_string(),
            limit: MAX_INCLUDE_DEPTH,
        });
    }

    let path = base.join(CONFIG_DIR).join(file);
    info!("loading catalog configuration {}", path.display());

    let root = xml::parse_file(&path).map_err(|err| match err {
        XmlError::Io { path, source } => ConfigError::Read { path, source },
        other => ConfigError::Malformed {
            path: path.clone(),
            source: other,
        },
    })?;

    for section in root.children(OPERATIONS) {
        apply_operations(registry, section, &path)?;
    }

    // Includes recurse only after this file's own operations are applied.
    for include in root.children(INCLUDE) {
        load_file(registry, base, include.text(), depth + 1)?;
    }

    Ok(())
}

fn apply_operations(
    registry: &mut CatalogRegistry,
    section: &XmlElement,
    path: &Path,
) -> Result<(), ConfigError> {
    for operation in section.children(OPERATION) {
        let name = operation
            .attr("name")
            .ok_or_else(|| ConfigError::MissingAttribute {
                path: path.to_path_buf(),
                element: OPERATION,
                attribute: "name",
            })?;
        match name {
            OP_GET_CAPABILITIES => operations::apply_get_capabilities(registry, operation, path)?,
            OP_GET_RECORDS => operations::apply_get_records(registry, operation, path)?,
            OP_DESCRIBE_RECORD => operations::apply_describe_record(registry, operation, path)?,
            other => {
                // Forward compatibility: configuration may describe
                // operations this build does not understand yet.
                debug!("skipping unrecognized operation '{other}' in {}", path.display());
            }
        }
    }
    Ok(())
}
