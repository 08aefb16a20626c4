use serde_json::Value;

use super::error::InputError;
use super::util::{validate_link, validate_url};
use super::validator::Validator;
use crate::models::TypedObject;

/// Validates the `href` attribute: a string holding a well-formed absolute
/// URL.
pub struct HrefValidator;

impl HrefValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HrefValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for HrefValidator {
    fn name(&self) -> &'static str {
        "HrefValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        Ok(validate_url(value))
    }
}

/// Validates the `url` attribute: a URL string, a link-like object, or a
/// collection of those.
pub struct UrlValidator;

impl UrlValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_one(value: &Value) -> bool {
        validate_url(value) || validate_link(value)
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn name(&self) -> &'static str {
        "UrlValidator"
    }

    fn validate(&self, value: &Value, _container: &TypedObject) -> Result<bool, InputError> {
        match value.as_array() {
            Some(items) => Ok(!items.is_empty() && items.iter().all(Self::validate_one)),
            None => Ok(Self::validate_one(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypedObject;
    use serde_json::json;

    #[test]
    fn test_href_requires_a_url_string() {
        let validator = HrefValidator::new();
        let container = TypedObject::new("Link").unwrap();

        assert!(
            validator
                .validate(&json!("https://example.org/image.png"), &container)
                .unwrap()
        );
        assert!(!validator.validate(&json!("not a url"), &container).unwrap());
        assert!(!validator.validate(&json!(42), &container).unwrap());
    }

    #[test]
    fn test_url_accepts_strings_links_and_collections() {
        let validator = UrlValidator::new();
        let container = TypedObject::new("Image").unwrap();

        assert!(
            validator
                .validate(&json!("https://example.org/a"), &container)
                .unwrap()
        );
        assert!(
            validator
                .validate(&json!({"href": "https://example.org/a"}), &container)
                .unwrap()
        );
        assert!(
            validator
                .validate(
                    &json!(["https://example.org/a", {"href": "https://example.org/b"}]),
                    &container
                )
                .unwrap()
        );
    }

    #[test]
    fn test_url_rejects_empty_and_malformed_collections() {
        let validator = UrlValidator::new();
        let container = TypedObject::new("Image").unwrap();

        assert!(!validator.validate(&json!([]), &container).unwrap());
        assert!(
            !validator
                .validate(&json!(["https://example.org/a", "nope"]), &container)
                .unwrap()
        );
        assert!(!validator.validate(&json!({"name": "x"}), &container).unwrap());
    }
}
