//! Shipment domain types.
//!
//! Field order in these structs mirrors the provider's schema-mandated
//! element order; the serializer in `smartpost-xml` relies on the documented
//! order, not on struct layout.

use serde::{Deserialize, Serialize};

/// Parcel size class, carrying the provider's fixed numeric code.
///
/// The codes are provider-assigned and not sequential: `XS` is 11 while the
/// rest run 5..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemSize {
    /// Extra small (code 11).
    Xs,
    /// Small (code 5).
    S,
    /// Medium (code 6).
    M,
    /// Large (code 7).
    L,
    /// Extra large (code 8).
    Xl,
}

impl ItemSize {
    /// Returns the provider's size code as its decimal wire form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "11",
            Self::S => "5",
            Self::M => "6",
            Self::L => "7",
            Self::Xl => "8",
        }
    }
}

impl std::fmt::Display for ItemSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred delivery window for courier destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Any time of day (code 1).
    #[default]
    Any,
    /// Working hours (code 2).
    Workday,
    /// Evening delivery (code 3).
    Evening,
}

impl TimeWindow {
    /// Returns the provider's time-window code as its decimal wire form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "1",
            Self::Workday => "2",
            Self::Evening => "3",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The party receiving a parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Cash to collect on delivery, if any.
    pub cash: Option<f64>,
    /// National personal identification code, if the provider requires one.
    pub personal_id: Option<String>,
}

impl Recipient {
    /// Create a recipient. Name, phone, and email are always required.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            cash: None,
            personal_id: None,
        }
    }

    /// Set the cash-on-delivery amount.
    #[must_use]
    pub fn with_cash(mut self, cash: f64) -> Self {
        self.cash = Some(cash);
        self
    }

    /// Set the personal identification code.
    #[must_use]
    pub fn with_personal_id(mut self, personal_id: impl Into<String>) -> Self {
        self.personal_id = Some(personal_id.into());
        self
    }
}

/// The party sending a parcel, when it differs from the account holder.
///
/// Same shape as [`Recipient`] but a distinct type: the wire schema tags the
/// two differently and gives the sender a bank account instead of a
/// personal-id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Cash to collect, if any.
    pub cash: Option<f64>,
    /// Bank account for cash-on-delivery payout.
    pub account: Option<String>,
}

impl Sender {
    /// Create a sender. Name, phone, and email are always required.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            cash: None,
            account: None,
        }
    }

    /// Set the cash amount.
    #[must_use]
    pub fn with_cash(mut self, cash: f64) -> Self {
        self.cash = Some(cash);
        self
    }

    /// Set the payout bank account.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}

/// A street address for courier delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierAddress {
    /// Street name.
    pub street: String,
    /// House number.
    pub house: Option<String>,
    /// Apartment number.
    pub apartment: Option<String>,
    /// City or town.
    pub city: String,
    /// Country code.
    pub country: String,
    /// Postal code.
    pub postal_code: String,
    /// Free-text delivery instructions.
    pub details: Option<String>,
    /// Preferred delivery window.
    pub time_window: TimeWindow,
}

impl CourierAddress {
    /// Create a courier address from the required fields.
    #[must_use]
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            house: None,
            apartment: None,
            city: city.into(),
            country: country.into(),
            postal_code: postal_code.into(),
            details: None,
            time_window: TimeWindow::default(),
        }
    }

    /// Set the house number.
    #[must_use]
    pub fn with_house(mut self, house: impl Into<String>) -> Self {
        self.house = Some(house.into());
        self
    }

    /// Set the apartment number.
    #[must_use]
    pub fn with_apartment(mut self, apartment: impl Into<String>) -> Self {
        self.apartment = Some(apartment.into());
        self
    }

    /// Set free-text delivery instructions.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the preferred delivery window.
    #[must_use]
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = time_window;
        self
    }
}

/// Where a parcel is delivered.
///
/// All three variants serialize under the same `<destination>` tag with
/// mutually exclusive child sets, so the wire layer dispatches on the
/// variant rather than on field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Destination {
    /// Estonian parcel locker, identified by its numeric place id.
    Ee {
        /// The locker's place id from the provider's destination list.
        place_id: u32,
    },
    /// Finnish parcel point, identified by postal code plus routing code.
    Fi {
        /// Postal code of the pickup point.
        postal_code: String,
        /// Provider routing code for the pickup point.
        routing_code: String,
    },
    /// Courier delivery to a street address.
    Courier(CourierAddress),
}

/// Optional per-item delivery add-ons.
///
/// The notify fields distinguish "absent" from present-but-empty: an absent
/// field is left off the wire entirely, while the boolean flags are always
/// transmitted, `false` included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // the wire schema is a flag set
pub struct AdditionalServices {
    /// Express handling.
    pub express: bool,
    /// Identity verification at handover.
    pub id_check: bool,
    /// Age verification at handover.
    pub age_check: bool,
    /// Email address to notify on delivery.
    pub notify_email: Option<String>,
    /// Phone number to notify on delivery.
    pub notify_phone: Option<String>,
    /// Cash-on-delivery is paid by the recipient.
    pub paid_by_recipient: bool,
}

/// A single shippable unit in a shipment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-chosen reference string, echoed back in the confirmation.
    pub reference: String,
    /// Description of the parcel contents.
    pub content: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Parcel size class.
    pub size: ItemSize,
    /// Delivery destination.
    pub destination: Destination,
    /// The receiving party.
    pub recipient: Recipient,
    /// The sending party, when it differs from the account holder.
    pub sender: Option<Sender>,
    /// Provider-assigned barcode; present only after the item has been
    /// registered, or when re-submitting a known item.
    pub barcode: Option<String>,
    /// Barcode of the parent shipment for sub-shipments. A relation by
    /// barcode only, never ownership of the parent item.
    pub parent_barcode: Option<String>,
    /// Low-quantity dangerous-goods sub-items. Carried on the model but not
    /// part of the order document.
    pub lq_items: Vec<Item>,
    /// Optional delivery add-ons.
    pub additional_services: AdditionalServices,
}

impl Item {
    /// Create an item from the required fields.
    #[must_use]
    pub fn new(
        reference: impl Into<String>,
        content: impl Into<String>,
        weight: f64,
        size: ItemSize,
        destination: Destination,
        recipient: Recipient,
    ) -> Self {
        Self {
            reference: reference.into(),
            content: content.into(),
            weight,
            size,
            destination,
            recipient,
            sender: None,
            barcode: None,
            parent_barcode: None,
            lq_items: Vec::new(),
            additional_services: AdditionalServices::default(),
        }
    }

    /// Set the sending party.
    #[must_use]
    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the provider-assigned barcode.
    #[must_use]
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Link this item to a parent shipment by barcode.
    #[must_use]
    pub fn with_parent_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.parent_barcode = Some(barcode.into());
        self
    }

    /// Attach low-quantity sub-items.
    #[must_use]
    pub fn with_lq_items(mut self, lq_items: Vec<Item>) -> Self {
        self.lq_items = lq_items;
        self
    }

    /// Set the delivery add-ons.
    #[must_use]
    pub fn with_additional_services(mut self, services: AdditionalServices) -> Self {
        self.additional_services = services;
        self
    }
}

/// Confirmation record for one item of a successfully created shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentItem {
    /// Provider-assigned barcode.
    pub barcode: String,
    /// The caller's reference string, echoed back.
    pub reference: String,
    /// Locker door code for sender-side drop-off, when applicable.
    pub door_code: Option<String>,
}
