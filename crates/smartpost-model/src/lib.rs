//! Domain model for the SmartPOST shipping API.
//!
//! Value objects for everything the provider's XML schema talks about:
//! shippable items, recipients, senders, the three destination kinds, and
//! the per-item confirmation records the provider returns. All types are
//! plain data holders constructed by the caller and never mutated by the
//! client; the wire representation lives in the `smartpost-xml` crate.

pub mod credentials;
pub mod types;

pub use credentials::Credentials;
pub use types::{
    AdditionalServices, CourierAddress, Destination, Item, ItemSize, Recipient, Sender, SentItem,
    TimeWindow,
};
