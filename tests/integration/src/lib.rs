//! Integration tests for the SmartPOST client.
//!
//! Each test spins up an in-process mock HTTP server, points a real
//! [`SmartpostClient`] at it, and drives a full request/response round trip
//! through the public API.

use std::sync::Once;

use httpmock::MockServer;

use smartpost_client::{Destination, Item, ItemSize, Recipient, SmartpostClient};

mod test_labels;
mod test_shipment;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a client pointed at the mock server's API endpoint.
#[must_use]
pub fn test_client(server: &MockServer) -> SmartpostClient {
    init_tracing();

    SmartpostClient::builder("apiuser", "apipass")
        .base_url(server.url("/api/"))
        .build()
        .expect("client should build")
}

/// A parcel-locker item with the given reference.
#[must_use]
pub fn locker_item(reference: &str) -> Item {
    Item::new(
        reference,
        "Books",
        1.2,
        ItemSize::M,
        Destination::Ee { place_id: 102 },
        Recipient::new("Heli Kopter", "+37255555555", "heli.kopter@example.com"),
    )
}
