//! Single-document metadata loader.
//!
//! Packaged records ship one metadata XML file; this module parses it and
//! hands the tree to a caller-supplied handler, along with an empty `info`
//! stub the caller fills in from other package sources. No indexing happens
//! here.

use crate::xml::{self, XmlElement};
use anyhow::{Context, Result};
use std::path::Path;

/// Callbacks invoked once per visited metadata file.
pub trait MetadataHandler {
    /// Receives the parsed metadata document.
    fn handle_metadata(&mut self, metadata: &XmlElement) -> Result<()>;

    /// Receives the (initially empty) info element for the package.
    fn handle_info(&mut self, info: &XmlElement) -> Result<()>;
}

/// Parse one metadata file and run it through the handler.
pub fn visit_metadata_file(path: &Path, handler: &mut dyn MetadataHandler) -> Result<()> {
    let metadata = xml::parse_file(path)
        .with_context(|| format!("loading metadata file {}", path.display()))?;
    let info = XmlElement::named("info");

    handler.handle_metadata(&metadata)?;
    handler.handle_info(&info)?;
    Ok(())
}
