use crate::traits::identity::Identity;
use crate::values::core_values::complex::TypedComplex;
use crate::values::core_values::decimal::typed_decimal::TypedDecimal;
use crate::values::core_values::integer::typed_integer::TypedInteger;
use crate::values::core_values::opaque::OpaqueValue;
use crate::values::core_values::reference::Reference;
use crate::values::core_values::sequence::Sequence;
use core::fmt::{Display, Formatter};

/// Runtime classification of a value's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Boolean,
    Text,
    SignedInteger,
    UnsignedInteger,
    FloatingPoint,
    ComplexNumber,
    NilAdmittingReference,
    Other,
}

#[derive(Clone, Copy, Debug)]
pub enum CoreValue<'a> {
    Nil,
    Boolean(bool),
    Text(&'a str),
    TypedInteger(TypedInteger),
    TypedDecimal(TypedDecimal),
    TypedComplex(TypedComplex),
    /// A fixed-size byte array.
    Bytes(&'a [u8]),
    Sequence(Sequence<'a>),
    Reference(Reference),
    Opaque(&'a dyn OpaqueValue),
}

/// Identity is native same-variant equality, with floats and complex numbers
/// compared bit for bit, references by address and opaque values by their
/// own `PartialEq`.
impl Identity for CoreValue<'_> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (CoreValue::Nil, CoreValue::Nil) => true,
            (CoreValue::Boolean(a), CoreValue::Boolean(b)) => a == b,
            (CoreValue::Text(a), CoreValue::Text(b)) => a == b,
            (CoreValue::TypedInteger(a), CoreValue::TypedInteger(b)) => a == b,
            (CoreValue::TypedDecimal(a), CoreValue::TypedDecimal(b)) => {
                a.identical(b)
            }
            (CoreValue::TypedComplex(a), CoreValue::TypedComplex(b)) => {
                a.identical(b)
            }
            (CoreValue::Bytes(a), CoreValue::Bytes(b)) => a == b,
            (CoreValue::Sequence(a), CoreValue::Sequence(b)) => a.identical(b),
            (CoreValue::Reference(a), CoreValue::Reference(b)) => a == b,
            (CoreValue::Opaque(a), CoreValue::Opaque(b)) => a.opaque_eq(*b),
            _ => false,
        }
    }
}

impl<'a> CoreValue<'a> {
    pub fn category(&self) -> Category {
        match self {
            CoreValue::Boolean(_) => Category::Boolean,
            CoreValue::Text(_) => Category::Text,
            CoreValue::TypedInteger(int) if int.is_unsigned() => {
                Category::UnsignedInteger
            }
            CoreValue::TypedInteger(_) => Category::SignedInteger,
            CoreValue::TypedDecimal(_) => Category::FloatingPoint,
            CoreValue::TypedComplex(_) => Category::ComplexNumber,
            CoreValue::Sequence(_) | CoreValue::Reference(_) => {
                Category::NilAdmittingReference
            }
            CoreValue::Nil | CoreValue::Bytes(_) | CoreValue::Opaque(_) => {
                Category::Other
            }
        }
    }

    /// Check if the value is a zero in any integer or float representation.
    pub fn is_numeric_zero(&self) -> bool {
        match self {
            CoreValue::TypedInteger(int) => int.is_zero(),
            CoreValue::TypedDecimal(decimal) => decimal.is_zero(),
            _ => false,
        }
    }

    /// The bytes of a byte array or byte sequence.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            CoreValue::Bytes(bytes) => Some(bytes),
            CoreValue::Sequence(sequence) => sequence.as_bytes(),
            _ => None,
        }
    }
}

impl Display for CoreValue<'_> {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            CoreValue::Nil => core::write!(f, "nil"),
            CoreValue::Boolean(bool) => core::write!(f, "{bool}"),
            CoreValue::Text(text) => core::write!(f, "{text:?}"),
            CoreValue::TypedInteger(int) => core::write!(f, "{int}"),
            CoreValue::TypedDecimal(decimal) => core::write!(f, "{decimal}"),
            CoreValue::TypedComplex(complex) => core::write!(f, "{complex}"),
            CoreValue::Bytes(bytes) => core::write!(f, "{bytes:?}"),
            CoreValue::Sequence(sequence) => core::write!(f, "{sequence}"),
            CoreValue::Reference(reference) => {
                core::write!(f, "{reference}")
            }
            CoreValue::Opaque(opaque) => core::write!(f, "{opaque:?}"),
        }
    }
}
