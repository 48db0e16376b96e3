use core::any::Any;
use core::fmt::Debug;

/// A value that is only comparable through its own `PartialEq`, such as a
/// struct or a fixed-size aggregate.
///
/// Implemented for every `'static` type that is `PartialEq + Debug`.
pub trait OpaqueValue: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    /// Equal if `other` has the same type and compares equal.
    fn opaque_eq(&self, other: &dyn OpaqueValue) -> bool;
}

impl<T: Any + Debug + PartialEq> OpaqueValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn opaque_eq(&self, other: &dyn OpaqueValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}
