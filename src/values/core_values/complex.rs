use crate::traits::identity::Identity;
use core::fmt::Display;
use num::complex::{Complex32, Complex64};

/// A complex number together with the width of its parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypedComplex {
    C64(Complex32),
    C128(Complex64),
}

impl Identity for TypedComplex {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (TypedComplex::C64(a), TypedComplex::C64(b)) => {
                a.re.to_bits() == b.re.to_bits()
                    && a.im.to_bits() == b.im.to_bits()
            }
            (TypedComplex::C128(a), TypedComplex::C128(b)) => {
                a.re.to_bits() == b.re.to_bits()
                    && a.im.to_bits() == b.im.to_bits()
            }
            _ => false,
        }
    }
}

impl TypedComplex {
    /// Widens both parts to f64.
    pub fn as_complex128(&self) -> Complex64 {
        match self {
            TypedComplex::C64(value) => {
                Complex64::new(f64::from(value.re), f64::from(value.im))
            }
            TypedComplex::C128(value) => *value,
        }
    }
}

impl Display for TypedComplex {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TypedComplex::C64(value) => core::write!(f, "({value})c64"),
            TypedComplex::C128(value) => core::write!(f, "({value})c128"),
        }
    }
}

impl From<Complex32> for TypedComplex {
    fn from(value: Complex32) -> Self {
        TypedComplex::C64(value)
    }
}

impl From<Complex64> for TypedComplex {
    fn from(value: Complex64) -> Self {
        TypedComplex::C128(value)
    }
}
