use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::error::InputError;
use super::validator::Validator;
use crate::models::TypedObject;

static MEDIA_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w+/[\w+.-]+$").expect("media type pattern must compile"));

/// Validates the `name` attribute: a plain-text scalar (string, number or
/// boolean).
pub struct NameValidator;

impl NameValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for NameValidator {
    fn name(&self) -> &'static str {
        "NameValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        Ok(value.is_string() || value.is_number() || value.is_boolean())
    }
}

/// Validates the `mediaType` attribute against the `type "/" subtype` MIME
/// grammar.
pub struct MediaTypeValidator;

impl MediaTypeValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MediaTypeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for MediaTypeValidator {
    fn name(&self) -> &'static str {
        "MediaTypeValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        Ok(value.as_str().is_some_and(|text| MEDIA_TYPE.is_match(text)))
    }
}
