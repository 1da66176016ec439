//! Built-in generic types, each a thin consumer of the ADT factory.
//!
//! Every call builds a fresh, independent descriptor: two descriptors for
//! the same element type are structurally compatible (same tag, same
//! variants) but never the same object, and no registry caches them.

use crate::descriptor::{adt, TypeDescriptor};
use crate::tag::{type_of, TypeTag};
use crate::value::Value;

/// An optional value over `ty`: `Just` holds one field of the element type,
/// `Nothing` is a zero-field singleton.
pub fn maybe(ty: impl Into<TypeTag>) -> TypeDescriptor {
    let ty = ty.into();
    adt(
        format!("Maybe {ty}"),
        [("Just", vec![ty]), ("Nothing", vec![])],
    )
    .expect("builtin type and variant names are valid")
}

/// Wrap a value in `Just`, inferring the element type from the value.
pub fn just(value: Value) -> Value {
    let descriptor = maybe(type_of(&value));
    match descriptor.construct("Just", vec![value]) {
        Ok(v) => v,
        // The element type was inferred from the argument itself.
        Err(err) => unreachable!("inferred Just construction failed: {err}"),
    }
}

/// A pair: a single `Tuple` variant with two typed fields.
pub fn tuple_of(first: impl Into<TypeTag>, second: impl Into<TypeTag>) -> TypeDescriptor {
    let (first, second) = (first.into(), second.into());
    adt(
        format!("Tuple {first} {second}"),
        [("Tuple", vec![first, second])],
    )
    .expect("builtin type and variant names are valid")
}

/// Pair two values, inferring both element types from the arguments.
pub fn tuple(a: Value, b: Value) -> Value {
    let descriptor = tuple_of(type_of(&a), type_of(&b));
    match descriptor.construct("Tuple", vec![a, b]) {
        Ok(v) => v,
        Err(err) => unreachable!("inferred Tuple construction failed: {err}"),
    }
}

/// A disjunction: `Left` holds the first type, `Right` the second. No
/// inference helper is provided; which side a value belongs on is the
/// caller's choice.
pub fn either(left: impl Into<TypeTag>, right: impl Into<TypeTag>) -> TypeDescriptor {
    let (left, right) = (left.into(), right.into());
    adt(
        format!("Either {left} {right}"),
        [("Left", vec![left]), ("Right", vec![right])],
    )
    .expect("builtin type and variant names are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Cases;
    use crate::eq::eq;
    use crate::show::show;

    #[test]
    fn maybe_builds_just_and_nothing() {
        let m = maybe(TypeTag::Number);
        assert_eq!(*m.tag(), TypeTag::adt("Maybe number"));
        let just3 = m.construct("Just", vec![Value::Number(3.0)]).unwrap();
        let nothing = m.construct("Nothing", vec![]).unwrap();
        assert_eq!(show(&just3), "(Just 3)");
        assert_eq!(show(&nothing), "Nothing");
        assert_eq!(eq(&just3, &nothing), Ok(false));
    }

    #[test]
    fn just_infers_the_element_type() {
        let v = just(Value::Str("hi".into()));
        assert_eq!(type_of(&v), TypeTag::adt("Maybe string"));
        assert_eq!(show(&v), "(Just hi)");
    }

    #[test]
    fn tuple_infers_both_element_types() {
        let v = tuple(Value::Number(1.0), Value::Str("a".into()));
        assert_eq!(type_of(&v), TypeTag::adt("Tuple number string"));
        assert_eq!(show(&v), "(Tuple 1 a)");
    }

    #[test]
    fn either_holds_one_of_two_types() {
        let e = either(TypeTag::Str, TypeTag::Number);
        assert_eq!(*e.tag(), TypeTag::adt("Either string number"));
        let left = e.construct("Left", vec![Value::Str("err".into())]).unwrap();
        let right = e.construct("Right", vec![Value::Number(1.0)]).unwrap();

        let which = e
            .case(
                Cases::new()
                    .on("Left", |_| Value::Str("left".into()))
                    .on("Right", |_| Value::Str("right".into())),
            )
            .unwrap();
        assert_eq!(which.apply(&left), Value::Str("left".into()));
        assert_eq!(which.apply(&right), Value::Str("right".into()));
    }

    #[test]
    fn repeated_calls_build_compatible_but_distinct_descriptors() {
        let a = maybe(TypeTag::Number);
        let b = maybe(TypeTag::Number);
        assert_eq!(a.tag(), b.tag());
        let from_a = a.construct("Just", vec![Value::Number(1.0)]).unwrap();
        let from_b = b.construct("Just", vec![Value::Number(1.0)]).unwrap();
        // Values from separately built descriptors of the same element type
        // are structurally equal.
        assert_eq!(eq(&from_a, &from_b), Ok(true));
    }

    #[test]
    fn maybe_of_a_descriptor_element_type() {
        let inner = tuple_of(TypeTag::Number, TypeTag::Number);
        let m = maybe(&inner);
        assert_eq!(*m.tag(), TypeTag::adt("Maybe (Tuple number number)"));
    }
}
