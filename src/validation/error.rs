use miette::Diagnostic;
use serde_json::Value;
use thiserror::Error;

/// Raised when a string attribute value that should contain JSON cannot be
/// decoded. Carries the offending text so the failure is diagnosable at the
/// point it surfaces, which may be far from the producer.
#[derive(Error, Debug, Diagnostic)]
#[error("JSON decoding failed for string: {text}")]
#[diagnostic(code(astreams::decode_error))]
pub struct DecodeError {
    pub text: String,
    #[source]
    pub source: serde_json::Error,
}

/// Raised by strict property checks when a required attribute is missing.
/// A missing attribute in strict mode is a broken contract on the producer
/// side, not a soft validation failure.
#[derive(Error, Debug, Diagnostic)]
#[error("attribute \"{attribute}\" MUST be set for item: {item}")]
#[diagnostic(code(astreams::schema_violation))]
pub struct SchemaViolation {
    pub attribute: String,
    pub item: String,
}

impl SchemaViolation {
    pub fn new(attribute: &str, item: &Value) -> Self {
        Self {
            attribute: attribute.to_string(),
            item: item.to_string(),
        }
    }
}

/// Malformed-input failures that propagate out of validators unchanged.
/// Distinct from validation rejection, which is an ordinary `Ok(false)`.
#[derive(Error, Debug, Diagnostic)]
pub enum InputError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaViolation),
}

/// Outcomes of attribute assignment on a typed object.
#[derive(Error, Debug, Diagnostic)]
pub enum ObjectError {
    #[error("unknown type \"{0}\"")]
    #[diagnostic(code(astreams::unknown_type))]
    UnknownType(String),

    #[error("attribute \"{attribute}\" is not recognized on type \"{type_name}\"")]
    #[diagnostic(code(astreams::unknown_attribute))]
    UnknownAttribute {
        type_name: String,
        attribute: String,
    },

    #[error(
        "value for attribute \"{attribute}\" on type \"{type_name}\" was rejected by {validator}"
    )]
    #[diagnostic(code(astreams::rejected))]
    Rejected {
        type_name: String,
        attribute: String,
        validator: &'static str,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}

/// Failures while building a typed object from a whole JSON document.
#[derive(Error, Debug, Diagnostic)]
pub enum DocumentError {
    #[error("document is not a JSON object: {0}")]
    #[diagnostic(code(astreams::not_an_object))]
    NotAnObject(String),

    #[error("document has no \"type\" attribute: {0}")]
    #[diagnostic(code(astreams::missing_type))]
    MissingType(String),

    #[error("attribute \"{attribute}\" failed validation")]
    #[diagnostic(code(astreams::attribute))]
    Attribute {
        attribute: String,
        #[source]
        #[diagnostic_source]
        source: ObjectError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Object(#[from] ObjectError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),
}
