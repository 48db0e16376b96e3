use crate::traits::identity::Identity;
use crate::values::core_value::CoreValue;
use crate::values::value::Value;
use core::fmt::Display;
use num::complex::Complex64;

/// The canonical form a value is reduced to before loose comparison.
///
/// Literals of different variants are never equal. Values without a numeric,
/// boolean or text reading stay [`Literal::Other`] and only equal identical
/// values.
#[derive(Debug, Clone, Copy)]
pub enum Literal<'a> {
    Boolean(bool),
    Text(&'a str),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Complex(Complex64),
    Other(Value<'a>),
}

impl PartialEq for Literal<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            (Literal::Text(a), Literal::Text(b)) => a == b,
            (Literal::Signed(a), Literal::Signed(b)) => a == b,
            (Literal::Unsigned(a), Literal::Unsigned(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a == b,
            (Literal::Complex(a), Literal::Complex(b)) => a == b,
            (Literal::Other(a), Literal::Other(b)) => a.identical(b),
            _ => false,
        }
    }
}

impl<'a> Value<'a> {
    /// Reduces the value to its canonical literal.
    pub fn to_literal(&self) -> Literal<'a> {
        match self.inner {
            CoreValue::Boolean(bool) => Literal::Boolean(bool),
            CoreValue::Text(text) => Literal::Text(text),
            CoreValue::TypedInteger(int) => int.to_literal(),
            CoreValue::TypedDecimal(decimal) => Literal::Float(decimal.as_f64()),
            CoreValue::TypedComplex(complex) => {
                Literal::Complex(complex.as_complex128())
            }
            CoreValue::Nil
            | CoreValue::Bytes(_)
            | CoreValue::Sequence(_)
            | CoreValue::Reference(_)
            | CoreValue::Opaque(_) => Literal::Other(*self),
        }
    }
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Literal::Boolean(bool) => core::write!(f, "{bool}"),
            Literal::Text(text) => core::write!(f, "{text:?}"),
            Literal::Signed(int) => core::write!(f, "{int}i64"),
            Literal::Unsigned(int) => core::write!(f, "{int}u64"),
            Literal::Float(float) => core::write!(f, "{float:?}f64"),
            Literal::Complex(complex) => core::write!(f, "({complex})c128"),
            Literal::Other(value) => core::write!(f, "{value}"),
        }
    }
}
