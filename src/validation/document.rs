use serde_json::Value;
use tracing::{debug, info};

use super::error::DocumentError;
use super::util::decode_json;
use crate::models::TypedObject;

/// Builds a [`TypedObject`] from a whole JSON document, dispatching every
/// member through the validator bound to it.
///
/// Validation is fail-fast: the first offending attribute is reported and
/// nothing after it is inspected.
pub struct DocumentValidator;

impl DocumentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a document supplied as raw JSON text.
    ///
    /// Malformed text is a [`DecodeError`](super::error::DecodeError), a
    /// distinct and more severe failure than any validation rejection.
    pub fn from_str(&self, text: &str) -> Result<TypedObject, DocumentError> {
        let value = decode_json(text)?;
        self.from_value(&value)
    }

    /// Validate an already-decoded document.
    pub fn from_value(&self, value: &Value) -> Result<TypedObject, DocumentError> {
        let Some(members) = value.as_object() else {
            return Err(DocumentError::NotAnObject(value.to_string()));
        };

        let type_name = members
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| DocumentError::MissingType(value.to_string()))?;

        let mut object = TypedObject::new(type_name)?;

        for (name, member) in members {
            if name == "type" {
                continue;
            }

            debug!("validating {type_name}.{name}");
            object
                .set(name, member.clone())
                .map_err(|source| DocumentError::Attribute {
                    attribute: name.clone(),
                    source,
                })?;
        }

        info!("✓ document validated as {type_name}");
        Ok(object)
    }
}

impl Default for DocumentValidator {
    fn default() -> Self {
        Self::new()
    }
}
