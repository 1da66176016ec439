//! The ADT factory: builds frozen type descriptors whose variant
//! constructors check arity and argument types at call time.

use indexmap::IndexMap;

use crate::case::{Cases, Matcher};
use crate::enforce::enforce_args;
use crate::error::AdtError;
use crate::tag::TypeTag;
use crate::value::{Value, VariantValue};

/// Names that cannot be used for variants: `type` and `case` are descriptor
/// properties, `_` is the catch-all key in case analysis.
const RESERVED: &[&str] = &["type", "case", "_"];

/// A callable constructor for a variant with at least one field.
#[derive(Debug, Clone)]
pub struct VariantCtor {
    type_tag: TypeTag,
    name: String,
    field_tags: Vec<TypeTag>,
}

impl VariantCtor {
    /// The variant name this constructor produces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field count.
    pub fn arity(&self) -> usize {
        self.field_tags.len()
    }

    /// Declared field tags, in positional order.
    pub fn field_tags(&self) -> &[TypeTag] {
        &self.field_tags
    }

    /// Build a value of this variant.
    ///
    /// Fails with [`AdtError::Arity`] on a wrong argument count and with
    /// [`AdtError::TypeMismatch`] on the first wrongly typed argument.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, AdtError> {
        enforce_args(&self.name, &self.field_tags, &args)?;
        Ok(Value::Variant(VariantValue::new(
            self.type_tag.clone(),
            self.name.clone(),
            args,
        )))
    }
}

/// One entry in a descriptor's variant table.
#[derive(Debug, Clone)]
enum VariantSlot {
    /// Callable constructor, arity >= 1.
    Ctor(VariantCtor),
    /// Zero-arity variant, built eagerly when the descriptor is created and
    /// shared by every access.
    Singleton(Value),
}

/// A property read off a descriptor through the dynamic protocol.
#[derive(Debug, Clone)]
pub enum Property<'a> {
    /// The `type` property: the descriptor's wrapped tag.
    Type(&'a TypeTag),
    /// A callable variant constructor.
    Ctor(&'a VariantCtor),
    /// A zero-arity singleton value.
    Singleton(&'a Value),
}

/// A frozen algebraic data type: its identity plus one constructor (or
/// singleton value) per declared variant.
///
/// Descriptors are built once by [`adt`] and have no mutators; the dynamic
/// property surface ([`get`](Self::get) / [`set`](Self::set)) rejects
/// unknown reads and all writes, so a mistyped variant name surfaces as an
/// error instead of a silent miss.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: String,
    tag: TypeTag,
    variants: IndexMap<String, VariantSlot>,
}

/// Define an algebraic data type.
///
/// `variants` pairs each variant name with its ordered field types;
/// declaration order is preserved. Zero-field variants are constructed into
/// singleton values here rather than exposed as callables, since they would
/// always produce the same content.
///
/// Fails with [`AdtError::Naming`] on an empty type name, a reserved
/// variant name, or a duplicate variant name.
pub fn adt<N, V, I>(name: N, variants: I) -> Result<TypeDescriptor, AdtError>
where
    N: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (V, Vec<TypeTag>)>,
{
    let name = name.into();
    if name.is_empty() {
        return Err(AdtError::Naming {
            reason: "a type needs a non-empty name".into(),
        });
    }
    let tag = TypeTag::adt(&name);

    let mut table: IndexMap<String, VariantSlot> = IndexMap::new();
    for (variant, field_tags) in variants {
        let variant = variant.into();
        if RESERVED.contains(&variant.as_str()) {
            return Err(AdtError::Naming {
                reason: format!("`{variant}` is reserved and cannot name a variant"),
            });
        }
        if table.contains_key(&variant) {
            return Err(AdtError::Naming {
                reason: format!("duplicate variant `{variant}`"),
            });
        }
        let slot = if field_tags.is_empty() {
            VariantSlot::Singleton(Value::Variant(VariantValue::new(
                tag.clone(),
                variant.clone(),
                Vec::new(),
            )))
        } else {
            VariantSlot::Ctor(VariantCtor {
                type_tag: tag.clone(),
                name: variant.clone(),
                field_tags,
            })
        };
        table.insert(variant, slot);
    }

    Ok(TypeDescriptor {
        name,
        tag,
        variants: table,
    })
}

impl TypeDescriptor {
    /// The raw name the type was declared with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped type tag, e.g. `(Shape)`. Stable across reads.
    pub fn tag(&self) -> &TypeTag {
        &self.tag
    }

    /// Declared variant names, in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Read a property by name, the way a dynamic host would.
    ///
    /// `type` yields the descriptor's tag; a variant name yields its
    /// constructor or singleton value. Any other name fails with
    /// [`AdtError::UnknownProperty`].
    pub fn get(&self, prop: &str) -> Result<Property<'_>, AdtError> {
        if prop == "type" {
            return Ok(Property::Type(&self.tag));
        }
        match self.variants.get(prop) {
            Some(VariantSlot::Ctor(ctor)) => Ok(Property::Ctor(ctor)),
            Some(VariantSlot::Singleton(value)) => Ok(Property::Singleton(value)),
            None => Err(AdtError::UnknownProperty {
                tag: self.tag.clone(),
                prop: prop.to_string(),
            }),
        }
    }

    /// Reject a property write.
    ///
    /// Descriptors are frozen at creation; the variant table cannot be
    /// added to, removed from, or reassigned afterwards. Always fails with
    /// [`AdtError::Immutable`].
    pub fn set(&self, prop: &str, _value: Value) -> Result<(), AdtError> {
        Err(AdtError::Immutable {
            tag: self.tag.clone(),
            prop: prop.to_string(),
        })
    }

    /// Build a value of the named variant.
    ///
    /// A singleton variant returns its shared value (and still rejects a
    /// non-empty argument list with [`AdtError::Arity`]); an unknown
    /// variant name fails like any other unknown property read.
    pub fn construct(&self, variant: &str, args: Vec<Value>) -> Result<Value, AdtError> {
        match self.variants.get(variant) {
            Some(VariantSlot::Ctor(ctor)) => ctor.call(args),
            Some(VariantSlot::Singleton(value)) => {
                if args.is_empty() {
                    Ok(value.clone())
                } else {
                    Err(AdtError::Arity {
                        ctor: variant.to_string(),
                        expected: 0,
                        got: args.len(),
                    })
                }
            }
            None => Err(AdtError::UnknownProperty {
                tag: self.tag.clone(),
                prop: variant.to_string(),
            }),
        }
    }

    /// Build a matcher over this type's variants.
    ///
    /// Exhaustiveness is verified here, when the matcher is built: every
    /// declared variant needs a handler unless `cases` carries a catch-all.
    pub fn case<'h>(&self, cases: Cases<'h>) -> Result<Matcher<'h>, AdtError> {
        Matcher::build(self, cases)
    }
}
