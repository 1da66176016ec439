//! Error types for the ADT runtime.

use thiserror::Error;

use crate::tag::TypeTag;

/// Errors raised by the ADT runtime.
///
/// Every variant is a contract violation at the point of use; nothing is
/// caught or retried internally, each one propagates straight to the caller
/// with the offending name, position, or counts in its message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdtError {
    /// Invalid or reserved type/variant name.
    #[error("invalid name: {reason}")]
    Naming { reason: String },

    /// Wrong argument count to a variant constructor.
    #[error("`{ctor}` takes {expected} argument(s), got {got}")]
    Arity {
        ctor: String,
        expected: usize,
        got: usize,
    },

    /// Argument tag mismatch during construction. Positions are 1-based.
    #[error("expected type `{expected}` at argument {position}, got a value of type `{actual}`")]
    TypeMismatch {
        position: usize,
        expected: TypeTag,
        actual: TypeTag,
    },

    /// Cross-type comparison in structural equality.
    #[error("cannot compare a value of type `{left}` with a value of type `{right}`")]
    CompareMismatch { left: TypeTag, right: TypeTag },

    /// Case handlers omit a variant and supply no catch-all.
    #[error("match on `{tag}` does not cover `{variant}`; add a handler or a catch-all")]
    NonExhaustiveMatch { tag: TypeTag, variant: String },

    /// Attempted property write on a finalized type descriptor.
    #[error("`{tag}` is frozen; `{prop}` cannot be assigned after creation")]
    Immutable { tag: TypeTag, prop: String },

    /// Property read of a name the descriptor does not define.
    #[error("`{tag}` has no `{prop}` property")]
    UnknownProperty { tag: TypeTag, prop: String },
}
