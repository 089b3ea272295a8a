//! HTML extraction for the router's admin pages.
//!
//! Two narrow parsers: a structural lookup for hidden form inputs (CSRF
//! tokens), and the label-delimited micro-parser for rows of the
//! connected-devices table. The row parser is deliberately coupled to the
//! backend's current rendering: when a label or delimiter is missing the
//! affected field comes back absent rather than as an error, and a change
//! in the backend's label text degrades results silently.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, RouterError};

use super::types::DeviceRecord;

/// Line delimiter in flattened row text.
const LINE: &str = "\n";
/// Label line preceding a device's IPv4 address.
const IPV4_LABEL: &str = "IPV4 Address\n";
/// Label line preceding a device's MAC address.
const MAC_LABEL: &str = "MAC Address\n";
/// Selector for the connected-devices data table.
const DEVICE_TABLE: &str = "table.data";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Returns the `value` attribute, verbatim, of the first hidden input
/// named `field` in `html`.
///
/// Fails with [`RouterError::TokenNotFound`] when no such input carries a
/// value; posting a form without its token would only produce a confusing
/// rejection downstream.
pub fn hidden_input_value(html: &str, field: &str, page: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let hidden = selector(r#"input[type="hidden"]"#);
    document
        .select(&hidden)
        .find(|input| input.value().attr("name") == Some(field))
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
        .ok_or_else(|| RouterError::TokenNotFound {
            field: field.to_string(),
            page: page.to_string(),
        })
}

/// Parses the connected-devices page into device records, in row order.
///
/// The single `table.data` element must be present; its absence means the
/// page structure is not what this parser was written against, which is
/// fatal and distinct from a table legitimately reporting zero devices.
/// The first row is the header and is skipped.
pub fn device_table(html: &str, page: &str) -> Result<Vec<DeviceRecord>> {
    let document = Html::parse_document(html);
    let table = document
        .select(&selector(DEVICE_TABLE))
        .next()
        .ok_or_else(|| RouterError::DeviceTableMissing {
            page: page.to_string(),
        })?;

    let rows = selector("tr");
    Ok(table
        .select(&rows)
        .skip(1)
        .map(|row| device_from_row_text(&row_text(row)))
        .collect())
}

/// One device from a row's flattened text: the name is the first
/// line-delimited segment, the addresses follow their literal label
/// lines. Each field is independently absent when its marker is missing.
pub fn device_from_row_text(text: &str) -> DeviceRecord {
    DeviceRecord {
        name: text.split_once(LINE).map(|(first, _)| first.to_string()),
        ipv4: grab_chunk(text, IPV4_LABEL, LINE).map(str::to_string),
        mac: grab_chunk(text, MAC_LABEL, LINE).map(str::to_string),
    }
}

/// Flattens a row to its non-empty text nodes, one per line,
/// `\n`-terminated.
fn row_text(row: ElementRef<'_>) -> String {
    let mut text = String::new();
    for chunk in row.text() {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        text.push_str(chunk);
        text.push_str(LINE);
    }
    text
}

/// Text strictly between `start` and the next occurrence of `end` after
/// it.
fn grab_chunk<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = text.find(start)? + start.len();
    let len = text[from..].find(end)?;
    Some(&text[from..from + len])
}
