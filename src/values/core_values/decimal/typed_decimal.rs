use crate::traits::identity::Identity;
use core::fmt::Display;
use num_traits::Zero;

/// A float together with the width it was taken from.
///
/// `PartialEq` follows IEEE 754 (NaN is unequal to itself, `0.0 == -0.0`),
/// [`Identity`] compares bit patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedDecimal {
    F32(f32),
    F64(f64),
}

impl Identity for TypedDecimal {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (TypedDecimal::F32(a), TypedDecimal::F32(b)) => {
                a.to_bits() == b.to_bits()
            }
            (TypedDecimal::F64(a), TypedDecimal::F64(b)) => {
                a.to_bits() == b.to_bits()
            }
            _ => false,
        }
    }
}

impl TypedDecimal {
    /// Widens to f64, exact for every f32.
    pub fn as_f64(&self) -> f64 {
        match self {
            TypedDecimal::F32(value) => f64::from(*value),
            TypedDecimal::F64(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            TypedDecimal::F32(value) => value.is_zero(),
            TypedDecimal::F64(value) => value.is_zero(),
        }
    }
}

impl Display for TypedDecimal {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TypedDecimal::F32(value) => core::write!(f, "{value:?}f32"),
            TypedDecimal::F64(value) => core::write!(f, "{value:?}f64"),
        }
    }
}

impl From<f32> for TypedDecimal {
    fn from(value: f32) -> Self {
        TypedDecimal::F32(value)
    }
}

impl From<f64> for TypedDecimal {
    fn from(value: f64) -> Self {
        TypedDecimal::F64(value)
    }
}
