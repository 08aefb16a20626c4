use serde_json::{Map, Value};
use tracing::debug;

use super::registry;
use crate::validation::error::ObjectError;

/// An entity carrying an immutable type tag and a validated set of named
/// attributes.
///
/// Every attribute present in the map has passed its bound validator at
/// assignment time; an absent attribute is simply unset, never an error.
#[derive(Debug, Clone)]
pub struct TypedObject {
    type_name: &'static str,
    attributes: Map<String, Value>,
}

impl TypedObject {
    /// Construct an empty object of a registered type.
    pub fn new(type_name: &str) -> Result<Self, ObjectError> {
        let spec = registry::spec(type_name)
            .ok_or_else(|| ObjectError::UnknownType(type_name.to_string()))?;

        Ok(Self {
            type_name: spec.name,
            attributes: Map::new(),
        })
    }

    pub fn object_type(&self) -> &str {
        self.type_name
    }

    /// Assign an attribute, dispatching the validator bound to it.
    ///
    /// A rejected value leaves the object unchanged and reports which
    /// attribute and which validator refused it. Malformed input surfaced by
    /// a validator (bad JSON, a strictly-required attribute missing on a
    /// nested item) propagates as-is instead of being downgraded to a
    /// rejection.
    pub fn set(&mut self, attribute: &str, value: Value) -> Result<(), ObjectError> {
        let validator = registry::validator_for(self.type_name, attribute).ok_or_else(|| {
            ObjectError::UnknownAttribute {
                type_name: self.type_name.to_string(),
                attribute: attribute.to_string(),
            }
        })?;

        if !validator.validate(&value, self)? {
            return Err(ObjectError::Rejected {
                type_name: self.type_name.to_string(),
                attribute: attribute.to_string(),
                validator: validator.name(),
            });
        }

        debug!("{}.{} accepted by {}", self.type_name, attribute, validator.name());
        self.attributes.insert(attribute.to_string(), value);
        Ok(())
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    pub fn has(&self, attribute: &str) -> bool {
        self.attributes.contains_key(attribute)
    }

    /// Remove an attribute. Removing an unset attribute is a no-op.
    pub fn unset(&mut self, attribute: &str) -> Option<Value> {
        self.attributes.remove(attribute)
    }

    /// Names of the attributes currently set, sorted by name.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Render as a JSON object carrying the `type` tag.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.type_name.to_string()));
        for (name, value) in &self.attributes {
            map.insert(name.clone(), value.clone());
        }

        Value::Object(map)
    }
}
