use serde_json::Value;

use super::error::InputError;
use super::util::{has_properties, validate_link, validate_url};
use super::validator::Validator;
use crate::models::TypedObject;

/// Validates attributes that reference another object: `actor`, `object`,
/// `target` and `origin`. A reference is a URL string, a link-like object,
/// or an inline object carrying its own `type` tag.
pub struct ReferenceValidator;

impl ReferenceValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_one(value: &Value) -> bool {
        if validate_url(value) || validate_link(value) {
            return true;
        }

        matches!(has_properties(value, &["type"], false), Ok(true))
    }
}

impl Default for ReferenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ReferenceValidator {
    fn name(&self) -> &'static str {
        "ReferenceValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        match value.as_array() {
            Some(items) => Ok(!items.is_empty() && items.iter().all(Self::validate_one)),
            None => Ok(Self::validate_one(value)),
        }
    }
}
