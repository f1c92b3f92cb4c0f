//! Parsing of the provider's shipment-confirmation XML.
//!
//! The shipment response is a document whose top-level children each
//! describe one processed item. Parsing follows the same manual
//! `quick_xml::Reader` event loop used for every wire type: known elements
//! are read, unknown elements are skipped, and response order is preserved.

use quick_xml::Reader;
use quick_xml::events::Event;

use smartpost_model::SentItem;

use crate::error::XmlError;

/// Parse the provider's shipment response into confirmation records.
///
/// Each top-level child of the response root becomes one [`SentItem`], in
/// response order. `<barcode>` and `<reference>` are required per item; the
/// sender door code is read only when a `<sender>` block is present, and a
/// block without a `<doorcode>` child yields `None`.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or a required element is
/// missing.
pub fn parse_shipment_response(xml: &[u8]) -> Result<Vec<SentItem>, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    // Skip any declaration, comments, and whitespace before the root.
    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            _ => {}
        }
    }

    let mut items = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(_) => items.push(read_sent_item(&mut reader)?),
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in shipment response".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(items)
}

/// Read one item-confirmation element.
///
/// The reader is positioned just after the element's opening tag; reads
/// through the matching end tag.
fn read_sent_item(reader: &mut Reader<&[u8]>) -> Result<SentItem, XmlError> {
    let mut barcode = None;
    let mut reference = None;
    let mut door_code = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                match tag_name {
                    "barcode" => barcode = Some(read_text_content(reader)?),
                    "reference" => reference = Some(read_text_content(reader)?),
                    "sender" => door_code = read_door_code(reader)?,
                    _ => skip_element(reader)?,
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in item confirmation".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(SentItem {
        barcode: barcode.ok_or_else(|| XmlError::MissingElement("barcode".to_string()))?,
        reference: reference.ok_or_else(|| XmlError::MissingElement("reference".to_string()))?,
        door_code,
    })
}

/// Read the `<doorcode>` text out of a `<sender>` block.
fn read_door_code(reader: &mut Reader<&[u8]>) -> Result<Option<String>, XmlError> {
    let mut door_code = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                match tag_name {
                    "doorcode" => door_code = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in sender block".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(door_code)
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event. Reads
/// the text content and consumes through the matching `End` event.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::GeneralRef(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let entity = format!("&{decoded};");
                let unescaped = quick_xml::escape::unescape(&entity)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => {
                return Ok(text.trim().to_string());
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}
