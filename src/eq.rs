//! Structural equality over runtime values.

use crate::error::AdtError;
use crate::tag::type_of;
use crate::value::Value;

/// Structural equality between two values of the same runtime type.
///
/// Comparing values of different runtime types is a caller error and fails
/// with [`AdtError::CompareMismatch`] rather than silently returning
/// `false`. Primitives compare by value. Variant values are equal iff they
/// share the same variant name and every field is pairwise equal under
/// recursive `eq` (which itself may fail if nested field types mismatch;
/// for values built through constructor enforcement that cannot happen).
pub fn eq(a: &Value, b: &Value) -> Result<bool, AdtError> {
    let (left, right) = (type_of(a), type_of(b));
    if left != right {
        return Err(AdtError::CompareMismatch { left, right });
    }
    match (a, b) {
        (Value::Variant(x), Value::Variant(y)) => {
            if x.ctor() != y.ctor() || x.fields().len() != y.fields().len() {
                return Ok(false);
            }
            pairwise(x.fields(), y.fields())
        }
        (Value::List(x), Value::List(y)) => {
            if x.len() != y.len() {
                return Ok(false);
            }
            pairwise(x, y)
        }
        _ => Ok(a == b),
    }
}

fn pairwise(xs: &[Value], ys: &[Value]) -> Result<bool, AdtError> {
    for (x, y) in xs.iter().zip(ys) {
        if !eq(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}
