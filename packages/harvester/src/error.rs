//! Error types for the harvester.
//!
//! Uses the dual-error pattern: `HarvesterError` for library consumers
//! with detailed error context, and `EnvelopeError` for the document-level
//! checks that run before any record is decoded.

use std::path::PathBuf;

use thiserror::Error;

/// Violations of the message envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The root does not declare a supported `xzufiVersion`.
    #[error("Unsupported XZuFi version: {}", .found.as_deref().map(|v| format!("'{v}'")).unwrap_or_else(|| "attribute missing".to_string()))]
    UnsupportedVersion { found: Option<String> },

    /// The message does not contain exactly one `nachrichtenkopf`.
    #[error("Expected exactly one <nachrichtenkopf> element, found {found}")]
    HeaderCardinalityViolation { found: usize },
}

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Envelope validation failed.
    #[error("Invalid message envelope: {0}")]
    Envelope(#[from] EnvelopeError),

    /// A child element that must occur exactly once occurred a different number of times.
    #[error("Expected exactly one <{element}> in {context}, found {found}")]
    Cardinality {
        element: String,
        context: String,
        found: usize,
    },

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Missing required XML attribute.
    #[error("Missing required attribute '{attribute}' on {element}")]
    MissingAttribute { attribute: String, element: String },

    /// Online service link with a type other than the accepted code list value.
    #[error("Unexpected online service link type: '{0}'")]
    UnexpectedLinkType(String),

    /// Unknown XML element encountered.
    #[error("Unknown element {tag_name}{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownElement {
        tag_name: String,
        context: Option<String>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// Any of the above, attributed to the document it occurred in.
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<HarvesterError>,
    },

    /// A batch run skipped failing documents.
    #[error("{failed} of {total} documents could not be harvested")]
    BatchFailed { failed: usize, total: usize },
}

impl HarvesterError {
    /// Attach the identity of the offending document.
    #[must_use]
    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Document { .. } => self,
            other => Self::Document {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
