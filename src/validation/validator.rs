use serde_json::Value;

use super::error::InputError;
use crate::models::TypedObject;

/// The contract every attribute validator satisfies.
///
/// A validator is a pure predicate over a candidate value and the object it
/// would be attached to. It must not mutate either. Returning `Ok(false)`
/// means "reject, do not assign" and is an ordinary outcome; `Err` is
/// reserved for malformed input surfaced by the helpers (bad JSON, a
/// strictly-required attribute missing) and propagates to the caller
/// unchanged. Implementations never downgrade an `Err` to `Ok(false)`.
pub trait Validator: Send + Sync {
    /// Name reported when this validator rejects a value.
    fn name(&self) -> &'static str;

    /// Decide whether `value` may be assigned onto `container`.
    ///
    /// `container` is available for cross-attribute constraints, e.g. a rule
    /// that is only meaningful when the container's type is `Question`.
    fn validate(&self, value: &Value, container: &TypedObject) -> Result<bool, InputError>;
}
