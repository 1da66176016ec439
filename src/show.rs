//! Human-readable rendering of runtime values.

use std::fmt;

use crate::value::Value;

/// Render a value for display.
///
/// A zero-field variant renders as its bare name; otherwise
/// `(<variant> <field> ...)` with each field recursively rendered and
/// space-joined. Lists render as `[ <item>, <item> ]`. Strings render as
/// their raw content, `Null` as `null`.
pub fn show(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(f, *n),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(" ]")
            }
            Value::Variant(v) => {
                if v.fields().is_empty() {
                    f.write_str(v.ctor())
                } else {
                    write!(f, "({}", v.ctor())?;
                    for field in v.fields() {
                        write!(f, " {field}")?;
                    }
                    f.write_str(")")
                }
            }
        }
    }
}

// Integral values print without a trailing `.0`, the way the dynamic hosts
// this model mirrors print their numbers.
fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n == n.trunc() && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}
