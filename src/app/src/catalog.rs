//! Decoding of the event catalog document.
//!
//! The document is `{"events": [...]}`. A missing or non-list `events` field
//! is an empty catalog rather than an error; entries that cannot be decoded
//! are skipped.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::types::EventRecord;

/// Parse a catalog document, failing only if it is not JSON at all
pub fn parse_catalog(body: &[u8]) -> Result<Vec<EventRecord>, String> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| format!("Catalog: JSON parse error: {e}"))?;

    let Some(Value::Array(entries)) = document.get("events") else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match EventRecord::deserialize(entry) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("skipping catalog entry {index}: {e}");
                None
            }
        })
        .collect())
}
