//! JSON encoding and prototype-based decoding.
//!
//! Decoding does not go through `serde::Deserialize`. The text is parsed into
//! a JSON object, then every key is copied onto a prototype value by name via
//! [`FillFields`]. Keys the prototype does not already hold keep their
//! prototype value; keys the type does not know are skipped with a warning.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::warning::warn_once;

/// Errors produced by [`encode`], [`decode_as`], and [`decode_into`].
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input was not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The input parsed, but the top-level value is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind of the value that was found instead (`array`, `number`, ...).
        found: &'static str,
    },

    /// A known field was present with a value of the wrong type.
    #[error("invalid value for field `{name}`: expected {expected}")]
    InvalidField {
        /// Field name as it appeared in the input.
        name: String,
        /// Human-readable description of the accepted type.
        expected: &'static str,
    },

    /// The value could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A type whose fields can be assigned one at a time from decoded JSON.
///
/// This is the "fill struct fields from a key-value mapping" half of
/// [`decode_into`]: the decoder only enumerates keys, the implementor decides
/// what each key means.
pub trait FillFields {
    /// Name used in warnings about unknown keys.
    const TYPE_NAME: &'static str;

    /// Assign `value` to the field called `name`.
    ///
    /// Returns `Ok(false)` if the type has no such field.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::InvalidField`] if `name` is known but `value` has
    /// the wrong type.
    fn fill_field(&mut self, name: &str, value: Value) -> Result<bool, JsonError>;
}

/// Serialize `value` to compact JSON text.
///
/// Struct fields are emitted in declaration order.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if `value`'s `Serialize` implementation fails
/// (for example a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse `text` as a JSON object and copy its keys onto `T::default()`.
///
/// # Errors
///
/// See [`decode_into`].
pub fn decode_as<T: FillFields + Default>(text: &str) -> Result<T, JsonError> {
    decode_into(T::default(), text)
}

/// Parse `text` as a JSON object and copy its keys onto `prototype`.
///
/// The copy is shallow: nested objects are handed to
/// [`FillFields::fill_field`] whole.
///
/// # Errors
///
/// Returns [`JsonError::Syntax`] for malformed input,
/// [`JsonError::NotAnObject`] if the top-level value is not an object, and
/// whatever [`FillFields::fill_field`] returns for a badly typed field.
pub fn decode_into<T: FillFields>(mut prototype: T, text: &str) -> Result<T, JsonError> {
    let value: Value = serde_json::from_str(text).map_err(JsonError::Syntax)?;
    let fields = into_object(value)?;

    for (name, value) in fields {
        if !prototype.fill_field(&name, value)? {
            warn_once(
                "JSON",
                &format!("ignoring unknown key '{name}' for {}", T::TYPE_NAME),
            );
        }
    }

    Ok(prototype)
}

/// Read a numeric field value, for use inside [`FillFields`] implementations.
///
/// # Errors
///
/// Returns [`JsonError::InvalidField`] if `value` is not a JSON number.
pub fn number_field(name: &str, value: &Value) -> Result<f64, JsonError> {
    value.as_f64().ok_or_else(|| JsonError::InvalidField {
        name: name.to_string(),
        expected: "a number",
    })
}

fn into_object(value: Value) -> Result<Map<String, Value>, JsonError> {
    let found = match value {
        Value::Object(map) => return Ok(map),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
    };
    Err(JsonError::NotAnObject { found })
}
