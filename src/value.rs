//! The dynamic value model that tagged types are defined over.

use crate::tag::TypeTag;

/// A runtime value.
///
/// Constructed variant values are an explicit case of this enum and carry
/// their owning type's tag and variant name as real fields, so there are no
/// reserved indices that could collide with positional field access.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
    Variant(VariantValue),
}

/// A value produced by one of a type descriptor's variant constructors.
///
/// Fields are fixed at construction; there are no public mutators. The
/// field count and field types always match the variant definition that
/// produced the value, because every constructor runs argument enforcement
/// before building one of these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantValue {
    tag: TypeTag,
    ctor: String,
    fields: Vec<Value>,
}

impl VariantValue {
    pub(crate) fn new(tag: TypeTag, ctor: impl Into<String>, fields: Vec<Value>) -> Self {
        Self {
            tag,
            ctor: ctor.into(),
            fields,
        }
    }

    /// The wrapped tag of the type that produced this value.
    pub fn type_tag(&self) -> &TypeTag {
        &self.tag
    }

    /// The name of the variant constructor that produced this value.
    pub fn ctor(&self) -> &str {
        &self.ctor
    }

    /// The positional field values, in declaration order.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// A single field by position.
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.fields.get(index)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<VariantValue> for Value {
    fn from(v: VariantValue) -> Self {
        Value::Variant(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_fields_are_positional() {
        let v = VariantValue::new(
            TypeTag::adt("Pair"),
            "Pair",
            vec![Value::Number(1.0), Value::Str("a".into())],
        );
        assert_eq!(v.ctor(), "Pair");
        assert_eq!(v.fields().len(), 2);
        assert_eq!(v.field(0), Some(&Value::Number(1.0)));
        assert_eq!(v.field(1), Some(&Value::Str("a".into())));
        assert_eq!(v.field(2), None);
    }

    #[test]
    fn conversions_build_the_expected_cases() {
        assert_eq!(Value::from(2.5), Value::Number(2.5));
        assert_eq!(Value::from(3i64), Value::Number(3.0));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("hi"), Value::Str("hi".into()));
        assert_eq!(
            Value::from(vec![Value::Null]),
            Value::List(vec![Value::Null])
        );
    }
}
