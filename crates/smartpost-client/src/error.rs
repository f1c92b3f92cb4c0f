//! Error taxonomy for SmartPOST API calls.

use smartpost_xml::XmlError;

/// Errors returned by [`SmartpostClient`](crate::SmartpostClient) operations.
///
/// The four variants map to four recovery strategies: fix the input
/// (`InvalidInput`), inspect the provider's payload (`Provider`), retry or
/// reconfigure the network path (`Transport`), and treat the response as
/// unusable (`Xml`). Nothing is retried or translated inside the client.
#[derive(Debug, thiserror::Error)]
pub enum SmartpostError {
    /// Input rejected before any network I/O; correct the input and retry.
    #[error("invalid request input: {0}")]
    InvalidInput(String),

    /// The provider answered with a non-success HTTP status. Carries the
    /// raw response body for caller inspection.
    #[error("provider rejected request with status {status}: {body}")]
    Provider {
        /// HTTP status code of the rejection.
        status: u16,
        /// Raw response body as the provider sent it.
        body: String,
    },

    /// Network-level failure: timeout, connection refused, proxy failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the XML the operation expected.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Convenience result type for SmartPOST operations.
pub type SmartpostResult<T> = Result<T, SmartpostError>;
