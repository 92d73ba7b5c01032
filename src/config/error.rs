//! Fatal load errors for the configuration registry.
//!
//! Every variant aborts the whole load call: a single malformed subtree
//! invalidates the attempt, including sibling operations and any includes
//! not yet processed. Unrecognized operation names are deliberately absent
//! here; the loader skips them without entering the error channel so new
//! operations can ship in configuration before the service understands them.

use crate::xml::XmlError;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read from disk.
    #[error("unable to read configuration {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file did not parse as well-formed markup.
    #[error("malformed configuration {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    /// An operation subtree lacks a block its parser requires.
    #[error("{}: operation '{operation}' is missing required <{element}> block", .path.display())]
    MissingElement {
        path: PathBuf,
        operation: String,
        element: &'static str,
    },

    /// An element lacks a required attribute.
    #[error("{}: <{element}> is missing required attribute '{attribute}'", .path.display())]
    MissingAttribute {
        path: PathBuf,
        element: &'static str,
        attribute: &'static str,
    },

    /// An integer leaf holds text that does not parse as a number.
    #[error("{}: <{element}> value '{value}' is not a valid count", .path.display())]
    InvalidNumber {
        path: PathBuf,
        element: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Include recursion ran past the fixed cap, most likely a cycle.
    #[error("include chain exceeds {limit} levels at '{file}'")]
    IncludeDepth { file: String, limit: usize },
}
