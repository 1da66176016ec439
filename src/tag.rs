//! Runtime type tags: the comparable names of primitive categories and
//! constructed types.

use std::fmt;

use crate::descriptor::TypeDescriptor;
use crate::value::Value;

/// The runtime type of a [`Value`].
///
/// Primitive categories are enum cases; a constructed type carries its name
/// wrapped in a fixed delimiter pair (for example `(Shape)`), which keeps
/// constructed tags visually distinct from primitive ones wherever a tag is
/// rendered in an error message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    Null,
    Bool,
    Number,
    Str,
    List,
    /// A constructed type, holding the wrapped name `(TypeName)`.
    Adt(String),
}

impl TypeTag {
    /// Wrap a raw type name into its tag form.
    pub fn adt(name: &str) -> Self {
        TypeTag::Adt(format!("({name})"))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Null => f.write_str("null"),
            TypeTag::Bool => f.write_str("boolean"),
            TypeTag::Number => f.write_str("number"),
            TypeTag::Str => f.write_str("string"),
            TypeTag::List => f.write_str("list"),
            TypeTag::Adt(wrapped) => f.write_str(wrapped),
        }
    }
}

/// Field-type declarations accept primitive tags and type descriptors
/// interchangeably; a descriptor contributes its wrapped tag.
impl From<&TypeDescriptor> for TypeTag {
    fn from(descriptor: &TypeDescriptor) -> Self {
        descriptor.tag().clone()
    }
}

/// Classify a value by its runtime type.
///
/// Total over the value model: primitives map to their category, a variant
/// value yields the tag attached by the constructor that built it.
pub fn type_of(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Bool,
        Value::Number(_) => TypeTag::Number,
        Value::Str(_) => TypeTag::Str,
        Value::List(_) => TypeTag::List,
        Value::Variant(v) => v.type_tag().clone(),
    }
}
