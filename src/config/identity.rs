use serde::{Deserialize, Serialize};

/// Parameter `type` value that marks a queryable as one of the standard ISO
/// queryables; any other value classifies it as additional.
pub const ISO_QUERYABLES_TYPE: &str = "SupportedISOQueryables";

/// Declared (prefix, URI) pair for a record typename.
///
/// Two namespaces are the same entry only when both fields match, so the
/// same URI bound under two prefixes stays as two entries.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Namespace {
    pub prefix: String,
    pub uri: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

/// Which queryable set a search parameter lands in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryableClass {
    Iso,
    Additional,
}

impl QueryableClass {
    /// Classify a parameter by its declared `type` attribute.
    pub fn from_type_attr(value: &str) -> Self {
        if value == ISO_QUERYABLES_TYPE {
            QueryableClass::Iso
        } else {
            QueryableClass::Additional
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryableClass::Iso => ISO_QUERYABLES_TYPE,
            QueryableClass::Additional => "AdditionalQueryables",
        }
    }
}

/// Composite `prefix:name` key used for typename lookups.
pub fn qualified_name(prefix: &str, name: &str) -> String {
    format!("{prefix}:{name}")
}
