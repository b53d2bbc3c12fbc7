//! Error types for the builder.
//!
//! `BuildError` is what library consumers see. Conversion helpers produce the
//! smaller `ConvertError`, which the handlers tag with the element it came from.

use thiserror::Error;

use crate::convert::ConvertError;

/// Main error type for the tcx2kmz library.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A leaf handler could not convert the text it collected.
    #[error("Cannot convert <{element}>: {source}")]
    Conversion {
        element: String,
        #[source]
        source: ConvertError,
    },

    /// A handler needed an object on the construction stack but found none.
    #[error("Construction stack is empty while handling <{element}>")]
    EmptyStack { element: String },

    /// The object on the construction stack is not the type the handler was configured for.
    #[error("Handler for <{element}> expected a {expected} on the construction stack, found a {found}")]
    UnexpectedNode {
        element: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A close event arrived with no element open.
    #[error("Close event for <{element}> without a matching open event")]
    UnmatchedClose { element: String },

    /// The event stream ended while elements were still open.
    #[error("Event stream ended with {depth} element(s) still open")]
    UnclosedElements { depth: usize },

    /// The event stream ended without producing a result object.
    #[error("Document produced no result object (is its root element configured?)")]
    MissingResult,

    /// More than one object was left on the construction stack.
    #[error("Document left {count} objects on the construction stack, expected exactly one")]
    LeftoverObjects { count: usize },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl BuildError {
    /// Tag a conversion failure with the element whose content was rejected.
    #[must_use]
    pub fn conversion(element: impl Into<String>, source: ConvertError) -> Self {
        Self::Conversion {
            element: element.into(),
            source,
        }
    }

    /// Return the element name this error is attributed to, if any.
    #[must_use]
    pub fn element(&self) -> Option<&str> {
        match self {
            Self::Conversion { element, .. }
            | Self::EmptyStack { element }
            | Self::UnexpectedNode { element, .. }
            | Self::UnmatchedClose { element } => Some(element),
            _ => None,
        }
    }
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuildError>;
