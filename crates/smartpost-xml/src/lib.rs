//! XML wire format for the SmartPOST shipping API.
//!
//! This crate owns every byte that crosses the wire: serialization of the
//! domain model into the provider's request schema, the authenticated
//! request-document envelope, and parsing of shipment confirmations out of
//! the provider's response XML.
//!
//! # Wire conventions
//!
//! - Child elements appear in a fixed, schema-mandated order
//! - Optional fields are omitted entirely when absent, never sent empty
//! - Booleans are lowercase `true`/`false`
//! - Numeric and enum fields are sent in decimal string form
//! - No XML declaration; the provider accepts the bare document
//!
//! # Key components
//!
//! - [`SmartpostSerialize`] trait with an impl per domain type
//! - [`to_request_xml`], [`labels_request`], [`orders_request`] for building
//!   complete authenticated request documents
//! - [`parse_shipment_response`] for decoding the provider's reply
//! - [`XmlError`] for everything that can go wrong in between

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::parse_shipment_response;
pub use error::XmlError;
pub use serialize::{SmartpostSerialize, labels_request, orders_request, to_request_xml};
