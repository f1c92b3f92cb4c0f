//! Blocking HTTP client for the SmartPOST shipping API.
//!
//! SmartPOST exposes an XML-over-HTTP self-service API for registering
//! shipment orders to parcel lockers and courier addresses and for fetching
//! printable labels. This crate glues the domain model
//! ([`smartpost_model`]) and the wire format ([`smartpost_xml`]) to a
//! pooled blocking HTTP transport: it builds the authenticated request
//! document, performs one POST per operation, and decodes the reply.
//!
//! ```rust,no_run
//! use smartpost_client::{Destination, Item, ItemSize, Recipient, SmartpostClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SmartpostClient::new("username", "password")?;
//!
//!     let item = Item::new(
//!         "ORDER-1",
//!         "Books",
//!         1.2,
//!         ItemSize::M,
//!         Destination::Ee { place_id: 102 },
//!         Recipient::new("Heli Kopter", "+37255555555", "heli.kopter@example.com"),
//!     );
//!
//!     let sent = client.shipment(&[item], &["reports@example.com"])?;
//!     let pdf = client.labels("A5", &[sent[0].barcode.as_str()])?;
//!     std::fs::write("labels.pdf", &pdf)?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

pub use client::{BASE_URL, LABEL_FORMATS, SmartpostClient, SmartpostClientBuilder};
pub use error::{SmartpostError, SmartpostResult};

// Re-export the domain model so callers need only one crate.
pub use smartpost_model::{
    AdditionalServices, CourierAddress, Credentials, Destination, Item, ItemSize, Recipient,
    Sender, SentItem, TimeWindow,
};
