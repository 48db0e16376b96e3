use crate::traits::identity::Identity;
use crate::values::core_values::opaque::OpaqueValue;
use core::fmt::Display;

/// A live, dynamically sized sequence such as a `Vec<T>` or a `[u8]` slice.
///
/// A sequence value is never nil. Its nil state is a `None` sequence
/// reference.
#[derive(Clone, Copy, Debug)]
pub enum Sequence<'a> {
    /// Bytes, compared element-wise with bytes from any container.
    Bytes(&'a [u8]),
    /// Any other elements, compared through the `PartialEq` of the container.
    Elements(&'a dyn OpaqueValue),
}

impl<'a> Sequence<'a> {
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Sequence::Bytes(bytes) => Some(bytes),
            Sequence::Elements(_) => None,
        }
    }
}

impl Identity for Sequence<'_> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Sequence::Bytes(a), Sequence::Bytes(b)) => a == b,
            (Sequence::Elements(a), Sequence::Elements(b)) => a.opaque_eq(*b),
            _ => false,
        }
    }
}

impl Display for Sequence<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Sequence::Bytes(bytes) => core::write!(f, "{bytes:?}"),
            Sequence::Elements(elements) => core::write!(f, "{elements:?}"),
        }
    }
}
