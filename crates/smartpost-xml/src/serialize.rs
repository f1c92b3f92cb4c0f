//! Serialization of domain types into the provider's request XML.
//!
//! This module provides the [`SmartpostSerialize`] trait with an
//! implementation per domain type, plus the builders for complete request
//! documents. Every request document starts with the `<authentication>`
//! block; the provider's parser is order-sensitive, so authentication must
//! come before any other child and each element's children are written in
//! the schema-mandated order.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::BytesText;

use smartpost_model::{
    AdditionalServices, CourierAddress, Credentials, Destination, Item, Recipient, Sender,
};

use crate::error::XmlError;

/// Trait for serializing domain types to the provider's XML schema.
///
/// Implementors write their own root element (`<recipient>`, `<sender>`,
/// `<destination>`, `<item>`) and its children into the current writer
/// position.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait SmartpostSerialize {
    /// Serialize this value as an XML element into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Build a complete authenticated request document.
///
/// Writes `<root_element>` with the `<authentication>` block as its first
/// child, then whatever children the `body` closure contributes. All request
/// builders go through here so the authentication-first invariant holds for
/// every operation.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_request_xml<F>(
    root_element: &str,
    credentials: &Credentials,
    body: F,
) -> Result<Vec<u8>, XmlError>
where
    F: FnOnce(&mut Writer<&mut Vec<u8>>) -> io::Result<()>,
{
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer
        .create_element(root_element)
        .write_inner_content(|w| {
            w.create_element("authentication").write_inner_content(|w| {
                write_text_element(w, "user", &credentials.username)?;
                write_text_element(w, "password", &credentials.password)?;
                Ok(())
            })?;
            body(w)
        })?;

    Ok(buf)
}

/// Build the `<labels>` request document.
///
/// One `<format>` child followed by one `<barcode>` child per input, in the
/// caller's order. Format validation happens in the client before this is
/// called.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn labels_request(
    credentials: &Credentials,
    format: &str,
    barcodes: &[&str],
) -> Result<Vec<u8>, XmlError> {
    to_request_xml("labels", credentials, |w| {
        write_text_element(w, "format", format)?;
        for barcode in barcodes {
            write_text_element(w, "barcode", barcode)?;
        }
        Ok(())
    })
}

/// Build the `<orders>` request document for shipment creation.
///
/// The `<report>` block is always present, holding one `<email>` per report
/// address, followed by one `<item>` element per input item in the caller's
/// order.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn orders_request(
    credentials: &Credentials,
    report_emails: &[&str],
    items: &[Item],
) -> Result<Vec<u8>, XmlError> {
    to_request_xml("orders", credentials, |w| {
        w.create_element("report").write_inner_content(|w| {
            for email in report_emails {
                write_text_element(w, "email", email)?;
            }
            Ok(())
        })?;
        for item in items {
            item.serialize_xml(w)?;
        }
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional number.
fn write_optional_f64<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<f64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &v.to_string())?;
    }
    Ok(())
}

/// Write `<tag>true</tag>` or `<tag>false</tag>`, unconditionally.
///
/// Boolean service flags are always transmitted; only absent optionals are
/// left off the wire.
fn write_bool_element<W: Write>(writer: &mut Writer<W>, tag: &str, value: bool) -> io::Result<()> {
    write_text_element(writer, tag, if value { "true" } else { "false" })
}

// ---------------------------------------------------------------------------
// SmartpostSerialize implementations
// ---------------------------------------------------------------------------

impl SmartpostSerialize for Recipient {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("recipient")
            .write_inner_content(|w| {
                write_text_element(w, "name", &self.name)?;
                write_text_element(w, "phone", &self.phone)?;
                write_text_element(w, "email", &self.email)?;
                write_optional_f64(w, "cash", self.cash)?;
                write_optional_text(w, "idcode", self.personal_id.as_deref())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl SmartpostSerialize for Sender {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("sender").write_inner_content(|w| {
            write_text_element(w, "name", &self.name)?;
            write_text_element(w, "phone", &self.phone)?;
            write_text_element(w, "email", &self.email)?;
            write_optional_f64(w, "cash", self.cash)?;
            write_optional_text(w, "account", self.account.as_deref())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl SmartpostSerialize for Destination {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("destination")
            .write_inner_content(|w| match self {
                Self::Ee { place_id } => write_text_element(w, "place_id", &place_id.to_string()),
                Self::Fi {
                    postal_code,
                    routing_code,
                } => {
                    write_text_element(w, "postalcode", postal_code)?;
                    write_text_element(w, "routingcode", routing_code)
                }
                Self::Courier(address) => write_courier_children(w, address),
            })?;
        Ok(())
    }
}

/// Write the courier child set; the `<destination>` wrapper is owned by the
/// enum dispatch above.
fn write_courier_children<W: Write>(w: &mut Writer<W>, address: &CourierAddress) -> io::Result<()> {
    write_text_element(w, "street", &address.street)?;
    write_optional_text(w, "house", address.house.as_deref())?;
    write_optional_text(w, "apartment", address.apartment.as_deref())?;
    write_text_element(w, "city", &address.city)?;
    write_text_element(w, "country", &address.country)?;
    write_optional_text(w, "details", address.details.as_deref())?;
    write_text_element(w, "timewindow", address.time_window.as_str())?;
    write_text_element(w, "postalcode", &address.postal_code)?;
    Ok(())
}

impl SmartpostSerialize for AdditionalServices {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("additionalservices")
            .write_inner_content(|w| {
                write_bool_element(w, "express", self.express)?;
                write_bool_element(w, "idcheck", self.id_check)?;
                write_bool_element(w, "agecheck", self.age_check)?;
                write_optional_text(w, "notifyemail", self.notify_email.as_deref())?;
                write_optional_text(w, "notifyphone", self.notify_phone.as_deref())?;
                write_bool_element(w, "paidbyrecipient", self.paid_by_recipient)?;
                Ok(())
            })?;
        Ok(())
    }
}

impl SmartpostSerialize for Item {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("item").write_inner_content(|w| {
            write_optional_text(w, "barcode", self.barcode.as_deref())?;
            write_text_element(w, "reference", &self.reference)?;
            write_text_element(w, "content", &self.content)?;
            write_optional_text(w, "orderparent", self.parent_barcode.as_deref())?;
            write_text_element(w, "weight", &self.weight.to_string())?;
            write_text_element(w, "size", self.size.as_str())?;
            if let Some(ref sender) = self.sender {
                sender.serialize_xml(w)?;
            }
            self.recipient.serialize_xml(w)?;
            self.destination.serialize_xml(w)?;
            self.additional_services.serialize_xml(w)?;
            Ok(())
        })?;
        Ok(())
    }
}
