use crate::traits::identity::Identity;
use crate::values::core_value::{Category, CoreValue};
use crate::values::core_values::opaque::OpaqueValue;
use crate::values::core_values::reference::ReferenceKind;
use core::any::type_name;
use core::fmt::{Display, Formatter};
use core::ops::Deref;

/// A borrowed, dynamically typed view of a runtime value.
///
/// `actual_type` is the name of the Rust type the value was taken from, `inner`
/// its classification. A value never owns what it describes, so it can be
/// copied freely for the duration of a check.
#[derive(Clone, Copy, Debug)]
pub struct Value<'a> {
    pub inner: CoreValue<'a>,
    pub actual_type: &'static str,
}

/// Two values are identical if they were taken from the same type and their
/// inner values are identical
impl Identity for Value<'_> {
    fn identical(&self, other: &Self) -> bool {
        self.actual_type == other.actual_type
            && self.inner.identical(&other.inner)
    }
}

impl<'a> Deref for Value<'a> {
    type Target = CoreValue<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<'a> Value<'a> {
    /// Tags `inner` with the type name of `T`.
    pub fn of<T: ?Sized>(inner: CoreValue<'a>) -> Self {
        Value {
            inner,
            actual_type: type_name::<T>(),
        }
    }

    /// The universal absence of a value.
    pub fn nil() -> Value<'static> {
        Value::of::<Nil>(CoreValue::Nil)
    }

    /// Wraps a value whose only notion of equality is its `PartialEq`
    /// implementation, e.g. a fixed-size aggregate.
    pub fn opaque<T: OpaqueValue>(value: &'a T) -> Self {
        Value::of::<T>(CoreValue::Opaque(value))
    }

    /// Re-tags the value with the type name of `T`.
    /// Used by named wrapper types that classify as their single field.
    pub fn renamed<T: ?Sized>(self) -> Self {
        Value {
            actual_type: type_name::<T>(),
            ..self
        }
    }

    pub fn category(&self) -> Category {
        self.inner.category()
    }

    pub fn is_universal_nil(&self) -> bool {
        matches!(self.inner, CoreValue::Nil)
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        core::write!(f, "{}", self.inner)
    }
}

/// Conversion of a native value into its [`Value`] view.
///
/// Implemented for the std scalar, text, sequence, array, pointer, function,
/// channel and map types, and derivable with `#[derive(AsValue)]` for user
/// types.
pub trait AsValue {
    /// Reference kind of the nil state when the type stands behind an `Option`.
    /// `None` for value types, whose `Option` is a dynamic holder.
    const NIL_KIND: Option<ReferenceKind> = None;

    fn as_value(&self) -> Value<'_>;
}

/// The universal absence-of-value literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

impl AsValue for Nil {
    fn as_value(&self) -> Value<'_> {
        Value::nil()
    }
}

impl AsValue for Value<'_> {
    fn as_value(&self) -> Value<'_> {
        *self
    }
}
