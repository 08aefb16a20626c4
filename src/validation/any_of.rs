use serde_json::Value;
use tracing::debug;

use super::error::InputError;
use super::util::{decode_json, has_properties};
use super::validator::Validator;
use crate::models::TypedObject;

/// Validates a choice-set attribute: a non-empty collection of alternative
/// objects, only meaningful on a `Question` container.
///
/// The collection may arrive pre-serialized as a JSON string; decoding
/// failures propagate to the caller rather than being downgraded to a
/// rejection. Each element must be an inline object strictly carrying
/// `type` and `name`, with `type` equal to `Note` and a scalar `name`.
///
/// Known limitation: choices may legally be indirect references (a URL or id
/// standing in for a full object), but this rule only accepts inline
/// objects.
pub struct AnyOfValidator;

impl AnyOfValidator {
    /// Container type this rule is scoped to.
    const CONTAINER_TYPE: &'static str = "Question";

    /// Required type of every element in the collection.
    const ELEMENT_TYPE: &'static str = "Note";

    pub fn new() -> Self {
        Self
    }

    fn validate_object(&self, item: &Value) -> Result<bool, InputError> {
        has_properties(item, &["type", "name"], true)?;

        Ok(item["type"] == Self::ELEMENT_TYPE && is_scalar(&item["name"]))
    }

    fn validate_object_collection(&self, collection: &[Value]) -> Result<bool, InputError> {
        for item in collection {
            // An indirect reference (a bare URL or id) lands here and is
            // rejected; only inline objects reach the strict shape check.
            if !item.is_object() || !self.validate_object(item)? {
                debug!("choice rejected: {item}");
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl Default for AnyOfValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for AnyOfValidator {
    fn name(&self) -> &'static str {
        "AnyOfValidator"
    }

    fn validate(&self, value: &Value, container: &TypedObject) -> Result<bool, InputError> {
        // A choice set on anything but a Question is invalid regardless of
        // its payload shape.
        if container.object_type() != Self::CONTAINER_TYPE {
            return Ok(false);
        }

        // Can be a JSON string
        let decoded;
        let value = if let Some(text) = value.as_str() {
            decoded = decode_json(text)?;
            &decoded
        } else {
            value
        };

        // A collection
        let Some(collection) = value.as_array() else {
            return Ok(false);
        };

        // A choice set with zero choices is meaningless
        if collection.is_empty() {
            return Ok(false);
        }

        self.validate_object_collection(collection)
    }
}

/// Validates the `oneOf` attribute. Exact behavioral alias of
/// [`AnyOfValidator`].
pub struct OneOfValidator {
    inner: AnyOfValidator,
}

impl OneOfValidator {
    pub fn new() -> Self {
        Self {
            inner: AnyOfValidator::new(),
        }
    }
}

impl Default for OneOfValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for OneOfValidator {
    fn name(&self) -> &'static str {
        "OneOfValidator"
    }

    fn validate(&self, value: &Value, container: &TypedObject) -> Result<bool, InputError> {
        self.inner.validate(value, container)
    }
}

fn is_scalar(value: &Value) -> bool {
    value.is_string() || value.is_number() || value.is_boolean()
}
