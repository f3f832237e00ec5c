//! JSON helpers with an explicit field-order contract.
//!
//! Serialization is plain `serde_json`. Deserialization goes through
//! [`Reconstruct`]: a type declares its constructor parameters as an ordered
//! field list, and the values are pulled out of the JSON object in that
//! order before being handed over positionally.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::trace;

use crate::config::JsonStyle;
use crate::result::{KataError, KataResult};

#[cfg(feature = "derive")]
pub use kata_derive::Reconstruct;

/// A type that can be rebuilt from values given in a declared order.
///
/// `FIELDS` names the JSON keys in constructor parameter order;
/// `from_values` receives one value per entry, in that order.
pub trait Reconstruct: Sized {
    /// JSON keys in constructor parameter order
    const FIELDS: &'static [&'static str];

    /// Build the value from positional arguments
    fn from_values(values: Vec<Value>) -> KataResult<Self>;
}

/// Serialize to compact JSON text
pub fn serialize_to_json<T: Serialize + ?Sized>(value: &T) -> KataResult<String> {
    let json = serde_json::to_string(value)?;
    trace!(bytes = json.len(), "serialized value");
    Ok(json)
}

/// Serialize using the configured style
pub fn serialize_to_json_with<T: Serialize + ?Sized>(
    value: &T,
    style: &JsonStyle,
) -> KataResult<String> {
    if !style.pretty {
        return serialize_to_json(value);
    }

    let indent = " ".repeat(style.indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    trace!(bytes = buf.len(), indent = style.indent, "serialized value (pretty)");
    Ok(String::from_utf8(buf)?)
}

/// Rebuild `P` from JSON, taking values in `P::FIELDS` order.
///
/// Keys not listed in `FIELDS` are ignored.
pub fn deserialize_from_prototype<P: Reconstruct>(json: &str) -> KataResult<P> {
    let mut object = parse_object(json)?;
    let values = P::FIELDS
        .iter()
        .map(|field| {
            object.remove(*field).ok_or_else(|| KataError::MissingField {
                field: (*field).to_string(),
            })
        })
        .collect::<KataResult<Vec<_>>>()?;
    trace!(fields = P::FIELDS.len(), "reconstructing from declared field order");
    P::from_values(values)
}

/// Rebuild `P` from JSON, taking values in the document's key order.
///
/// Key names are ignored: if the JSON lists its keys in a different order
/// than `P::FIELDS`, the values land in the wrong parameters.
pub fn deserialize_positional<P: Reconstruct>(json: &str) -> KataResult<P> {
    let values: Vec<Value> = parse_object(json)?.into_iter().map(|(_, v)| v).collect();
    trace!(values = values.len(), "reconstructing from key order");
    P::from_values(values)
}

/// Split positional values into exactly `N` arguments
pub fn take_exact<const N: usize>(values: Vec<Value>) -> KataResult<[Value; N]> {
    <[Value; N]>::try_from(values).map_err(|values| KataError::ArityMismatch {
        expected: N,
        found: values.len(),
    })
}

/// Convert one positional value into a parameter type
pub fn convert<T: DeserializeOwned>(value: Value) -> KataResult<T> {
    Ok(serde_json::from_value(value)?)
}

fn parse_object(json: &str) -> KataResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(object) => Ok(object),
        other => Err(KataError::NotAnObject {
            found: type_name(&other).to_string(),
        }),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
