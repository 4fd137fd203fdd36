use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNTITLED_EVENT: &str = "Untitled Event";
pub const LOCATION_TBA: &str = "Location TBA";
pub const DEFAULT_ORGANIZER: &str = "KNUST Community";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_DESCRIPTION: &str = "Details for this event will be updated soon.";

/// A single catalog entry
///
/// Fields are decoded leniently: numeric fields accept JSON numbers and
/// numeric strings, text fields accept numbers and booleans as their text.
/// Anything else is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub organizer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub capacity: i64,
    /// Registrations known to the catalog, excluding this browser
    #[serde(default, deserialize_with = "lenient_count")]
    pub registered: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl EventRecord {
    pub fn title_or_default(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED_EVENT)
    }

    pub fn location_or_default(&self) -> &str {
        non_empty(&self.location).unwrap_or(LOCATION_TBA)
    }

    pub fn organizer_or_default(&self) -> &str {
        non_empty(&self.organizer).unwrap_or(DEFAULT_ORGANIZER)
    }

    pub fn category_or_default(&self) -> &str {
        non_empty(&self.category).unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn description_or_default(&self) -> &str {
        non_empty(&self.description).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Category as used by the listing filter; empty categories count as none
    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Coerce a JSON value to an integer the way the browser's `Number()` would,
/// rejecting values that are not finite or not integral.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

// 2^53, the largest integer range a JSON producer can represent exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER)
        .then_some(value as i64)
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_integer))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(deserializer)?.unwrap_or(0))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(tag) => Some(tag),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_coerced() {
        let event: EventRecord = serde_json::from_value(json!({
            "id": "7",
            "capacity": "40",
            "registered": 12.0
        }))
        .unwrap();

        assert_eq!(event.id, Some(7));
        assert_eq!(event.capacity, 40);
        assert_eq!(event.registered, 12);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let event: EventRecord = serde_json::from_value(json!({ "id": 3 })).unwrap();

        assert_eq!(event.capacity, 0);
        assert_eq!(event.registered, 0);
        assert!(event.tags.is_empty());
        assert_eq!(event.title_or_default(), UNTITLED_EVENT);
        assert_eq!(event.location_or_default(), LOCATION_TBA);
        assert_eq!(event.organizer_or_default(), DEFAULT_ORGANIZER);
        assert_eq!(event.category_or_default(), DEFAULT_CATEGORY);
        assert_eq!(event.category(), None);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let event = EventRecord {
            title: Some(String::new()),
            category: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(event.title_or_default(), UNTITLED_EVENT);
        assert_eq!(event.category(), None);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert_eq!(coerce_integer(&json!("abc")), None);
        assert_eq!(coerce_integer(&json!("")), None);
        assert_eq!(coerce_integer(&json!(1.5)), None);
        assert_eq!(coerce_integer(&json!(null)), None);
        assert_eq!(coerce_integer(&json!([1])), None);
        assert_eq!(coerce_integer(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_integer(&json!("3.0")), Some(3));
    }

    #[test]
    fn text_fields_accept_scalars() {
        let event: EventRecord = serde_json::from_value(json!({
            "title": 2026,
            "location": true,
            "organizer": {"name": "SRC"},
            "description": null
        }))
        .unwrap();

        assert_eq!(event.title.as_deref(), Some("2026"));
        assert_eq!(event.location.as_deref(), Some("true"));
        assert_eq!(event.organizer, None);
        assert_eq!(event.organizer_or_default(), DEFAULT_ORGANIZER);
        assert_eq!(event.description, None);
    }

    #[test]
    fn tags_keep_order_and_skip_non_text() {
        let event: EventRecord = serde_json::from_value(json!({
            "tags": ["music", null, "live", 2026]
        }))
        .unwrap();

        assert_eq!(event.tags, vec!["music", "live", "2026"]);
    }
}
