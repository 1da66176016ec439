//! Case analysis: exhaustive dispatch over a type's variants.

use indexmap::IndexMap;

use crate::descriptor::TypeDescriptor;
use crate::error::AdtError;
use crate::tag::{type_of, TypeTag};
use crate::value::Value;

type Handler<'h> = Box<dyn Fn(&[Value]) -> Value + 'h>;
type CatchAll<'h> = Box<dyn Fn() -> Value + 'h>;

/// Handlers for a match, keyed by variant name.
///
/// A variant handler receives the value's fields positionally. The
/// catch-all registered with [`otherwise`](Self::otherwise) stands in for
/// every variant without its own handler and is invoked with no arguments.
#[derive(Default)]
pub struct Cases<'h> {
    handlers: IndexMap<String, Handler<'h>>,
    catch_all: Option<CatchAll<'h>>,
}

impl<'h> Cases<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `variant`.
    pub fn on<F>(mut self, variant: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'h,
    {
        self.handlers.insert(variant.into(), Box::new(handler));
        self
    }

    /// Register the catch-all.
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> Value + 'h,
    {
        self.catch_all = Some(Box::new(handler));
        self
    }
}

/// A matcher produced by [`TypeDescriptor::case`].
pub struct Matcher<'h> {
    type_tag: TypeTag,
    handlers: IndexMap<String, Handler<'h>>,
    catch_all: Option<CatchAll<'h>>,
}

impl std::fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("type_tag", &self.type_tag)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("catch_all", &self.catch_all.is_some())
            .finish()
    }
}

impl<'h> Matcher<'h> {
    /// Verify exhaustiveness and freeze the handler set.
    ///
    /// This runs when the matcher is built, not when a value is matched:
    /// without a catch-all, every declared variant must have a handler or
    /// the whole `case` fails with [`AdtError::NonExhaustiveMatch`].
    pub(crate) fn build(
        descriptor: &TypeDescriptor,
        cases: Cases<'h>,
    ) -> Result<Self, AdtError> {
        if cases.catch_all.is_none() {
            for variant in descriptor.variant_names() {
                if !cases.handlers.contains_key(variant) {
                    return Err(AdtError::NonExhaustiveMatch {
                        tag: descriptor.tag().clone(),
                        variant: variant.to_string(),
                    });
                }
            }
        }
        Ok(Self {
            type_tag: descriptor.tag().clone(),
            handlers: cases.handlers,
            catch_all: cases.catch_all,
        })
    }

    /// Dispatch on `value`'s variant: its handler gets the fields spread
    /// positionally; with no handler the catch-all runs with no arguments.
    ///
    /// # Panics
    ///
    /// Panics if `value` was not built by the descriptor this matcher came
    /// from. That is a caller bug, not a recoverable condition.
    pub fn apply(&self, value: &Value) -> Value {
        let variant = match value {
            Value::Variant(v) if *v.type_tag() == self.type_tag => v,
            other => panic!(
                "match on `{}` applied to a value of type `{}`",
                self.type_tag,
                type_of(other)
            ),
        };
        if let Some(handler) = self.handlers.get(variant.ctor()) {
            handler(variant.fields())
        } else if let Some(catch_all) = &self.catch_all {
            catch_all()
        } else {
            // Unreachable for values built by this descriptor: the
            // exhaustiveness check covered every variant.
            panic!(
                "no handler for variant `{}` of `{}`",
                variant.ctor(),
                self.type_tag
            )
        }
    }
}
