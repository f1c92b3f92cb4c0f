//! Error type for the XML wire layer.

use std::io;

/// Errors that can occur while writing request XML or parsing response XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing from the response.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The response XML ended or nested in a way the schema does not allow.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
