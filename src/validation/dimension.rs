use serde_json::Value;

use super::error::InputError;
use super::validator::Validator;
use crate::models::TypedObject;

/// Validates the `height` attribute: a non-negative integer number of
/// pixels.
pub struct HeightValidator;

impl HeightValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeightValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for HeightValidator {
    fn name(&self) -> &'static str {
        "HeightValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        Ok(value.as_u64().is_some())
    }
}

/// Validates the `width` attribute. Width shares the height rule wholesale
/// and delegates to it.
pub struct WidthValidator {
    inner: HeightValidator,
}

impl WidthValidator {
    pub fn new() -> Self {
        Self {
            inner: HeightValidator::new(),
        }
    }
}

impl Default for WidthValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for WidthValidator {
    fn name(&self) -> &'static str {
        "WidthValidator"
    }

    fn validate(&self, value: &Value, container: &TypedObject) -> Result<bool, InputError> {
        self.inner.validate(value, container)
    }
}
