//! Encoding of the registration set in the shell's key-value storage.
//!
//! The stored value is a JSON array of event ids. Reads fail open: anything
//! that is not such an array loads as an empty set. Writes always replace the
//! whole value. There is no locking between a read and the following write;
//! two tabs racing each other resolve as last write wins.

use log::warn;
use serde_json::Value;

use crate::types::{coerce_integer, RegistrationSet};

/// Decode the stored value, `None` meaning the key is not set
pub fn load(raw: Option<&str>) -> RegistrationSet {
    let Some(raw) = raw else {
        return RegistrationSet::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries.iter().filter_map(coerce_integer).collect(),
        Ok(other) => {
            warn!("ignoring stored registrations: expected an array, found {other}");
            RegistrationSet::new()
        }
        Err(e) => {
            warn!("ignoring stored registrations: {e}");
            RegistrationSet::new()
        }
    }
}

/// Encode the set for storage
pub fn save(registrations: &RegistrationSet) -> String {
    Value::from(registrations.iter().collect::<Vec<_>>()).to_string()
}
