//! The SmartPOST API client.

use std::time::Duration;

use bytes::Bytes;

use smartpost_model::{Credentials, Item, SentItem};
use smartpost_xml::{labels_request, orders_request, parse_shipment_response};

use crate::error::{SmartpostError, SmartpostResult};

/// The provider's self-service API endpoint.
pub const BASE_URL: &str = "https://iseteenindus.smartpost.ee/api/";

/// Label formats the provider accepts.
pub const LABEL_FORMATS: [&str; 5] = ["A5", "A6", "A6-4", "A7", "A7-8"];

/// The provider caps shipment report recipients at five addresses.
const MAX_REPORT_EMAILS: usize = 5;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the SmartPOST shipping API.
///
/// Holds the account credentials and a pooled HTTP transport; each
/// operation performs exactly one blocking round trip and returns before
/// control comes back to the caller. The client keeps no mutable per-request
/// state, so sequential reuse is safe, and dropping the client releases the
/// connection pool.
#[derive(Debug)]
pub struct SmartpostClient {
    base_url: String,
    credentials: Credentials,
    http: reqwest::blocking::Client,
}

impl SmartpostClient {
    /// Create a client with the default endpoint, timeout, and transport.
    ///
    /// # Errors
    ///
    /// Returns [`SmartpostError::Transport`] if the HTTP transport cannot
    /// be constructed.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SmartpostResult<Self> {
        Self::builder(username, password).build()
    }

    /// Start building a client with custom timeout, proxy, or transport.
    pub fn builder(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SmartpostClientBuilder {
        SmartpostClientBuilder::new(username, password)
    }

    /// Fetch printable labels for previously registered barcodes.
    ///
    /// `format` must be one of [`LABEL_FORMATS`]; barcodes are sent in the
    /// caller's order, duplicates included. Returns the raw label file
    /// bytes (a PDF for the formats the provider currently offers).
    ///
    /// # Errors
    ///
    /// Returns [`SmartpostError::InvalidInput`] for an unknown format
    /// before any network I/O, plus the transport and provider failures of
    /// any API call.
    pub fn labels(&self, format: &str, barcodes: &[&str]) -> SmartpostResult<Bytes> {
        if !LABEL_FORMATS.contains(&format) {
            return Err(SmartpostError::InvalidInput(format!(
                "label format must be one of {}, got {format:?}",
                LABEL_FORMATS.join(", ")
            )));
        }

        let document = labels_request(&self.credentials, format, barcodes)?;
        self.post("labels", document)
    }

    /// Register a shipment order for the given items.
    ///
    /// The provider emails a delivery report to each address in
    /// `report_emails` (at most five). Items are sent and confirmed in the
    /// caller's order; each confirmation carries the provider-assigned
    /// barcode, the echoed reference, and a locker door code when the
    /// drop-off requires one.
    ///
    /// # Errors
    ///
    /// Returns [`SmartpostError::InvalidInput`] for more than five report
    /// emails before any network I/O, [`SmartpostError::Xml`] if the
    /// response is not parseable, plus the transport and provider failures
    /// of any API call.
    pub fn shipment(
        &self,
        items: &[Item],
        report_emails: &[&str],
    ) -> SmartpostResult<Vec<SentItem>> {
        if report_emails.len() > MAX_REPORT_EMAILS {
            return Err(SmartpostError::InvalidInput(format!(
                "at most {MAX_REPORT_EMAILS} report emails are allowed, got {}",
                report_emails.len()
            )));
        }

        let document = orders_request(&self.credentials, report_emails, items)?;
        let body = self.post("shipment", document)?;
        Ok(parse_shipment_response(&body)?)
    }

    /// Shared request primitive: one POST to the endpoint with the
    /// operation name as the `request` query parameter.
    ///
    /// Returns the raw response bytes on success; a non-success status
    /// becomes [`SmartpostError::Provider`] carrying the response text.
    fn post(&self, request_kind: &str, document: Vec<u8>) -> SmartpostResult<Bytes> {
        tracing::debug!(
            request = request_kind,
            bytes = document.len(),
            "sending request"
        );

        let response = self
            .http
            .post(&self.base_url)
            .query(&[("request", request_kind)])
            .body(document)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            tracing::error!(
                request = request_kind,
                status = status.as_u16(),
                "provider rejected request"
            );
            return Err(SmartpostError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes()?;
        tracing::debug!(
            request = request_kind,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );
        Ok(body)
    }
}

/// Builder for [`SmartpostClient`].
#[derive(Debug)]
pub struct SmartpostClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    proxy: Option<String>,
    http: Option<reqwest::blocking::Client>,
}

impl SmartpostClientBuilder {
    fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            base_url: BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            http: None,
        }
    }

    /// Set the request timeout (default 30 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Route requests through the given proxy URL.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the API endpoint, e.g. to point tests at a local server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Inject a pre-built transport. Timeout and proxy configuration are
    /// then the injector's responsibility; the builder's own settings are
    /// not applied on top.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client, constructing the transport unless one was
    /// injected.
    ///
    /// # Errors
    ///
    /// Returns [`SmartpostError::Transport`] if the proxy URL is invalid or
    /// the HTTP transport cannot be constructed.
    pub fn build(self) -> SmartpostResult<SmartpostClient> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::blocking::Client::builder().timeout(self.timeout);
                if let Some(ref proxy) = self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy)?);
                }
                builder.build()?
            }
        };

        Ok(SmartpostClient {
            base_url: self.base_url,
            credentials: self.credentials,
            http,
        })
    }
}
