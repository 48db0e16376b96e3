use crate::values::literal::Literal;
use core::fmt::Display;
use num_traits::Zero;

/// An integer together with the width and signedness it was taken from.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy)]
pub enum TypedInteger {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

impl TypedInteger {
    fn subtype(&self) -> &'static str {
        match self {
            TypedInteger::I8(_) => "i8",
            TypedInteger::I16(_) => "i16",
            TypedInteger::I32(_) => "i32",
            TypedInteger::I64(_) => "i64",
            TypedInteger::Isize(_) => "isize",
            TypedInteger::U8(_) => "u8",
            TypedInteger::U16(_) => "u16",
            TypedInteger::U32(_) => "u32",
            TypedInteger::U64(_) => "u64",
            TypedInteger::Usize(_) => "usize",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            TypedInteger::I8(_)
                | TypedInteger::I16(_)
                | TypedInteger::I32(_)
                | TypedInteger::I64(_)
                | TypedInteger::Isize(_)
        )
    }

    pub fn is_unsigned(&self) -> bool {
        !self.is_signed()
    }

    pub fn is_zero(&self) -> bool {
        match self {
            TypedInteger::I8(v) => v.is_zero(),
            TypedInteger::I16(v) => v.is_zero(),
            TypedInteger::I32(v) => v.is_zero(),
            TypedInteger::I64(v) => v.is_zero(),
            TypedInteger::Isize(v) => v.is_zero(),
            TypedInteger::U8(v) => v.is_zero(),
            TypedInteger::U16(v) => v.is_zero(),
            TypedInteger::U32(v) => v.is_zero(),
            TypedInteger::U64(v) => v.is_zero(),
            TypedInteger::Usize(v) => v.is_zero(),
        }
    }

    /// Reduces the integer to its canonical literal.
    /// Negative integers stay signed, every other integer becomes unsigned,
    /// so that `5i32` and `5u8` meet on the same literal.
    pub fn to_literal(&self) -> Literal<'static> {
        match *self {
            TypedInteger::I8(v) => signed_literal(v.into()),
            TypedInteger::I16(v) => signed_literal(v.into()),
            TypedInteger::I32(v) => signed_literal(v.into()),
            TypedInteger::I64(v) => signed_literal(v),
            TypedInteger::Isize(v) => signed_literal(v as i64),
            TypedInteger::U8(v) => Literal::Unsigned(v.into()),
            TypedInteger::U16(v) => Literal::Unsigned(v.into()),
            TypedInteger::U32(v) => Literal::Unsigned(v.into()),
            TypedInteger::U64(v) => Literal::Unsigned(v),
            TypedInteger::Usize(v) => Literal::Unsigned(v as u64),
        }
    }
}

fn signed_literal(value: i64) -> Literal<'static> {
    match u64::try_from(value) {
        Ok(unsigned) => Literal::Unsigned(unsigned),
        Err(_) => Literal::Signed(value),
    }
}

impl Display for TypedInteger {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            TypedInteger::I8(v) => core::write!(f, "{v}")?,
            TypedInteger::I16(v) => core::write!(f, "{v}")?,
            TypedInteger::I32(v) => core::write!(f, "{v}")?,
            TypedInteger::I64(v) => core::write!(f, "{v}")?,
            TypedInteger::Isize(v) => core::write!(f, "{v}")?,
            TypedInteger::U8(v) => core::write!(f, "{v}")?,
            TypedInteger::U16(v) => core::write!(f, "{v}")?,
            TypedInteger::U32(v) => core::write!(f, "{v}")?,
            TypedInteger::U64(v) => core::write!(f, "{v}")?,
            TypedInteger::Usize(v) => core::write!(f, "{v}")?,
        }
        f.write_str(self.subtype())
    }
}

impl From<i8> for TypedInteger {
    fn from(v: i8) -> Self {
        TypedInteger::I8(v)
    }
}
impl From<i16> for TypedInteger {
    fn from(v: i16) -> Self {
        TypedInteger::I16(v)
    }
}
impl From<i32> for TypedInteger {
    fn from(v: i32) -> Self {
        TypedInteger::I32(v)
    }
}
impl From<i64> for TypedInteger {
    fn from(v: i64) -> Self {
        TypedInteger::I64(v)
    }
}
impl From<isize> for TypedInteger {
    fn from(v: isize) -> Self {
        TypedInteger::Isize(v)
    }
}
impl From<u8> for TypedInteger {
    fn from(v: u8) -> Self {
        TypedInteger::U8(v)
    }
}
impl From<u16> for TypedInteger {
    fn from(v: u16) -> Self {
        TypedInteger::U16(v)
    }
}
impl From<u32> for TypedInteger {
    fn from(v: u32) -> Self {
        TypedInteger::U32(v)
    }
}
impl From<u64> for TypedInteger {
    fn from(v: u64) -> Self {
        TypedInteger::U64(v)
    }
}
impl From<usize> for TypedInteger {
    fn from(v: usize) -> Self {
        TypedInteger::Usize(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_signed_becomes_unsigned() {
        assert_eq!(TypedInteger::from(5i32).to_literal(), Literal::Unsigned(5));
        assert_eq!(TypedInteger::from(0i8).to_literal(), Literal::Unsigned(0));
        assert_eq!(
            TypedInteger::from(i64::MAX).to_literal(),
            Literal::Unsigned(i64::MAX as u64)
        );
    }

    #[test]
    fn negative_signed_stays_signed() {
        assert_eq!(TypedInteger::from(-5i32).to_literal(), Literal::Signed(-5));
        assert_eq!(
            TypedInteger::from(i64::MIN).to_literal(),
            Literal::Signed(i64::MIN)
        );
        assert_eq!(TypedInteger::from(-1isize).to_literal(), Literal::Signed(-1));
    }

    #[test]
    fn unsigned_widens() {
        assert_eq!(TypedInteger::from(251u8).to_literal(), Literal::Unsigned(251));
        assert_eq!(
            TypedInteger::from(u64::MAX).to_literal(),
            Literal::Unsigned(u64::MAX)
        );
        assert_eq!(TypedInteger::from(7usize).to_literal(), Literal::Unsigned(7));
        assert!(TypedInteger::from(7usize).is_unsigned());
        assert!(!TypedInteger::from(7isize).is_unsigned());
    }

    #[test]
    fn display_carries_width() {
        assert_eq!(TypedInteger::from(-5i32).to_string(), "-5i32");
        assert_eq!(TypedInteger::from(251u8).to_string(), "251u8");
    }
}
