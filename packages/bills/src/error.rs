//! Error types for the bill converter.
//!
//! A single `ConvertError` covers the library and the command line. Malformed
//! XML and customization failures are propagated unmodified; nothing in the
//! transform retries or produces partial output.

use thiserror::Error;

/// Boxed error returned by caller-supplied customization callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The customization callback returned an error.
    #[error("Customization callback failed: {0}")]
    Customize(#[source] BoxError),

    /// Writing the HTML output failed.
    #[error("HTML serialization failed: {0}")]
    Serialize(String),

    /// No root element is left to serialize.
    #[error("Document has no root element to serialize")]
    EmptyDocument,

    /// Block id template lacks the `{n}` placeholder.
    #[error("Invalid block id template: '{0}'. Expected a template containing {{n}} (e.g., sec-{{n}})")]
    InvalidBlockIdTemplate(String),

    /// Options file could not be parsed.
    #[error("Options file is not valid YAML: {0}")]
    OptionsFile(#[from] serde_yaml_ng::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
