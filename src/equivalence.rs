//! Loose equality between values of arbitrary, possibly different types.

use crate::traits::identity::Identity;
use crate::traits::loose_eq::LooseEq;
use crate::values::value::{AsValue, Value};
use log::trace;

/// Check whether `a` and `b` are loosely equal.
///
/// Identical values are equal. Byte sequences compare element-wise and
/// nothing else. Any other pair is reduced to canonical literals first, so
/// integer widths, the signedness of non-negative integers and float or
/// complex widths do not matter. The universal nil equals a numeric zero.
pub fn equivalent<A, B>(a: &A, b: &B) -> bool
where
    A: AsValue + ?Sized,
    B: AsValue + ?Sized,
{
    a.as_value().loose_eq(&b.as_value())
}

impl LooseEq for Value<'_> {
    fn loose_eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_bytes(), other.as_bytes()) {
            return a == b;
        }
        if self.identical(other) {
            return true;
        }
        if nil_against_zero(self, other) || nil_against_zero(other, self) {
            trace!("{} and {} are equal as nil and zero", self, other);
            return true;
        }
        let (left, right) = (self.to_literal(), other.to_literal());
        trace!("comparing literals {left} and {right}");
        left == right
    }
}

// nil only relaxes against numeric zero, never against "", false or empty sequences
fn nil_against_zero(nil: &Value<'_>, other: &Value<'_>) -> bool {
    nil.is_universal_nil() && other.is_numeric_zero()
}
