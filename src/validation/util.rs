//! Stateless helpers shared by every validator.

use serde_json::Value;
use url::Url;

use super::error::{DecodeError, SchemaViolation};

/// Check that a value is a string containing a well-formed absolute URL.
///
/// Non-string input is rejected without raising: an attribute holding a
/// number where a URL belongs is an ordinary validation failure.
pub fn validate_url(value: &Value) -> bool {
    match value.as_str() {
        Some(text) => Url::parse(text).is_ok(),
        None => false,
    }
}

/// Check that a value is link-like: object-like with an `href` attribute
/// holding a well-formed URL. Lenient: any value lacking `href` is `false`.
pub fn validate_link(item: &Value) -> bool {
    match has_properties(item, &["href"], false) {
        Ok(true) => validate_url(&item["href"]),
        _ => false,
    }
}

/// Decode a JSON-encoded string into its native representation.
///
/// This is the single point where malformed external input becomes an
/// explicit failure instead of a silent null. The error carries the
/// offending text.
pub fn decode_json(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|source| DecodeError {
        text: text.to_string(),
        source,
    })
}

/// Check that an object-like value exposes every name in `names`.
///
/// In non-strict mode a missing name yields `Ok(false)`. In strict mode the
/// first missing name fails fast with a [`SchemaViolation`] naming the
/// attribute and rendering the offending item. Callers that treat absence
/// as a broken producer contract use strict mode instead of catching the
/// boolean.
pub fn has_properties(
    item: &Value,
    names: &[&str],
    strict: bool,
) -> Result<bool, SchemaViolation> {
    let Some(map) = item.as_object() else {
        if strict {
            return Err(SchemaViolation::new(
                names.first().copied().unwrap_or_default(),
                item,
            ));
        }
        return Ok(false);
    };

    for name in names {
        if !map.contains_key(*name) {
            if strict {
                return Err(SchemaViolation::new(name, item));
            }
            return Ok(false);
        }
    }

    Ok(true)
}
