//! Arity and argument-type checks shared by every variant constructor.

use crate::error::AdtError;
use crate::tag::{type_of, TypeTag};
use crate::value::Value;

/// Check `args` against the expected tags declared for `ctor`.
///
/// The expected tags are fixed when the variant is declared; the comparison
/// is dynamic, computed per call via [`type_of`]. Arity is checked first,
/// then each position left to right, stopping at the first mismatch.
/// Mismatch positions are reported 1-based.
pub(crate) fn enforce_args(
    ctor: &str,
    expected: &[TypeTag],
    args: &[Value],
) -> Result<(), AdtError> {
    if args.len() != expected.len() {
        return Err(AdtError::Arity {
            ctor: ctor.to_string(),
            expected: expected.len(),
            got: args.len(),
        });
    }
    for (i, (want, arg)) in expected.iter().zip(args).enumerate() {
        let actual = type_of(arg);
        if actual != *want {
            return Err(AdtError::TypeMismatch {
                position: i + 1,
                expected: want.clone(),
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_arguments() {
        let expected = [TypeTag::Number, TypeTag::Str];
        let args = [Value::Number(1.0), Value::Str("a".into())];
        assert_eq!(enforce_args("Pair", &expected, &args), Ok(()));
    }

    #[test]
    fn arity_is_checked_before_types() {
        // Wrong count fails with Arity regardless of the argument types.
        let expected = [TypeTag::Number];
        let args = [Value::Str("a".into()), Value::Str("b".into())];
        assert_eq!(
            enforce_args("Circle", &expected, &args),
            Err(AdtError::Arity {
                ctor: "Circle".into(),
                expected: 1,
                got: 2,
            })
        );
    }

    #[test]
    fn first_mismatch_wins_and_is_one_based() {
        let expected = [TypeTag::Number, TypeTag::Number, TypeTag::Number];
        let args = [
            Value::Number(1.0),
            Value::Str("oops".into()),
            Value::Bool(true),
        ];
        assert_eq!(
            enforce_args("Triple", &expected, &args),
            Err(AdtError::TypeMismatch {
                position: 2,
                expected: TypeTag::Number,
                actual: TypeTag::Str,
            })
        );
    }

    #[test]
    fn zero_arity_accepts_only_no_arguments() {
        assert_eq!(enforce_args("Nothing", &[], &[]), Ok(()));
        assert_eq!(
            enforce_args("Nothing", &[], &[Value::Null]),
            Err(AdtError::Arity {
                ctor: "Nothing".into(),
                expected: 0,
                got: 1,
            })
        );
    }
}
