//! Struct value escaping
//!
//! The loader stores every struct value as a JSON object whose fields are
//! themselves JSON-encoded strings. Nested structs and lists repeat the
//! scheme, adding one layer of encoding per level:
//!
//! ```text
//! {"x": 1, "inner": {"y": "a"}}
//!   => {"x":"1","inner":"{\"y\":\"\\\"a\\\"\"}"}
//! ```

use serde_json::{Map, Number, Value};

use super::AnnotationError;

/// Nesting depth at which escaping gives up
pub const MAX_STRUCT_DEPTH: usize = 64;

/// Largest float whose integral value is still exact (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Rewrites an integral float (`1.0`) as an integer (`1`)
///
/// The loader's own tooling writes numbers that way, so defaults render the
/// same whichever way the schema spelled them.
pub(super) fn canonical_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => {
            Number::from(f as i64)
        }
        _ => number.clone(),
    }
}

/// Scalar JSON value with numbers in canonical form
pub(super) fn canonical_value(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(canonical_number(number)),
        other => other.clone(),
    }
}

/// Encodes a struct default value into the string the loader expects
pub fn escape_struct_value(value: &Value) -> Result<String, AnnotationError> {
    escape(value, 0)
}

fn escape(value: &Value, depth: usize) -> Result<String, AnnotationError> {
    if depth > MAX_STRUCT_DEPTH {
        return Err(AnnotationError::StructTooDeep {
            limit: MAX_STRUCT_DEPTH,
        });
    }

    match value {
        Value::Object(record) => {
            let mut fields = Map::with_capacity(record.len());
            for (key, field) in record {
                fields.insert(key.clone(), Value::String(escape(field, depth + 1)?));
            }
            Ok(serde_json::to_string(&fields)?)
        }
        Value::Array(items) => {
            let escaped = items
                .iter()
                .map(|item| escape(item, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(serde_json::to_string(&escaped)?)
        }
        scalar => Ok(serde_json::to_string(&canonical_value(scalar))?),
    }
}
