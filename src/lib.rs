//! Runtime algebraic data types over a dynamic value model.
//!
//! The core is the ADT factory [`adt`]: given a type name and an ordered
//! set of variant definitions (each a list of expected field types), it
//! builds a frozen [`TypeDescriptor`] whose variant constructors check
//! arity and argument types on every call, and whose
//! [`case`](TypeDescriptor::case) operation dispatches exhaustively over a
//! value's variant. Structural equality ([`eq`]), rendering ([`show`]) and
//! the built-in generics ([`maybe`], [`tuple_of`], [`either`]) are thin
//! consumers of the factory.
//!
//! ```
//! use tagged_sum::{adt, Cases, TypeTag, Value};
//!
//! let shape = adt(
//!     "Shape",
//!     [
//!         ("Circle", vec![TypeTag::Number]),
//!         ("Square", vec![TypeTag::Number]),
//!     ],
//! )?;
//!
//! let area = shape.case(
//!     Cases::new()
//!         .on("Circle", |fields| match fields {
//!             [Value::Number(r)] => Value::Number(3.14 * r * r),
//!             _ => unreachable!(),
//!         })
//!         .on("Square", |fields| match fields {
//!             [Value::Number(s)] => Value::Number(s * s),
//!             _ => unreachable!(),
//!         }),
//! )?;
//!
//! let circle = shape.construct("Circle", vec![Value::Number(2.0)])?;
//! assert_eq!(area.apply(&circle), Value::Number(12.56));
//! # Ok::<(), tagged_sum::AdtError>(())
//! ```

mod builtins;
mod case;
mod descriptor;
mod enforce;
mod eq;
mod error;
mod show;
mod tag;
mod value;

pub use builtins::{either, just, maybe, tuple, tuple_of};
pub use case::{Cases, Matcher};
pub use descriptor::{adt, Property, TypeDescriptor, VariantCtor};
pub use eq::eq;
pub use error::AdtError;
pub use show::show;
pub use tag::{type_of, TypeTag};
pub use value::{Value, VariantValue};
