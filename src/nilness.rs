//! Whether a value's type admits a nil state, and whether the value is in it.

use crate::assert::failure::Failure;
use crate::values::core_value::{Category, CoreValue};
use crate::values::value::{AsValue, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NilnessError {
    /// Nilness was asked of a value whose type never admits nil.
    #[error("{value} cannot be nil")]
    CannotBeNil { value: String },
}

/// Check whether the type of `value` admits a nil state.
pub fn admits_nil<T: AsValue + ?Sized>(value: &T) -> bool {
    value.as_value().admits_nil()
}

/// Check whether `value` is nil. Fails for values whose type never admits nil.
pub fn is_nil<T: AsValue + ?Sized>(value: &T) -> Result<bool, NilnessError> {
    value.as_value().is_nil()
}

impl Value<'_> {
    pub fn admits_nil(&self) -> bool {
        self.category() == Category::NilAdmittingReference
    }

    pub fn is_nil(&self) -> Result<bool, NilnessError> {
        match self.inner {
            CoreValue::Reference(reference) => Ok(reference.is_nil()),
            CoreValue::Sequence(_) => Ok(false),
            _ => Err(NilnessError::CannotBeNil {
                value: self.to_string(),
            }),
        }
    }
}

/// "must be nil": the universal nil holds, a value type is a contract
/// violation, a reference holds if it is nil.
pub fn expect_nil(value: &Value<'_>) -> Result<(), Failure> {
    if value.is_universal_nil() || value.is_nil()? {
        Ok(())
    } else {
        Err(Failure::NotNil {
            value: value.to_string(),
        })
    }
}

/// "must not be nil": the universal nil fails, a value type always holds,
/// a reference holds if it is not nil.
pub fn expect_not_nil(value: &Value<'_>) -> Result<(), Failure> {
    if value.is_universal_nil() {
        return Err(Failure::ExpectedNotNil);
    }
    if value.admits_nil() && value.is_nil()? {
        return Err(Failure::IsNil {
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::value::Nil;
    use core::ptr;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[test]
    fn admission() {
        assert!(admits_nil(&Box::new(1)));
        assert!(admits_nil(&ptr::null::<i32>()));
        assert!(admits_nil(&None::<i32>));
        assert!(admits_nil(&HashMap::<i32, i32>::new()));
        assert!(admits_nil(&Vec::<u8>::new()));
        assert!(admits_nil(&vec![1i32]));
        assert!(admits_nil(&b"hi"[..]));
        assert!(!admits_nil(&1));
        assert!(!admits_nil(&1.5f32));
        assert!(!admits_nil(&true));
        assert!(!admits_nil("text"));
        assert!(!admits_nil(&[1u8, 2, 3]));
        assert!(!admits_nil(&[1i32, 2, 3]));
        assert!(!admits_nil(&Nil));
    }

    #[test]
    fn nil_references() {
        assert_eq!(is_nil(&ptr::null::<i32>()), Ok(true));
        assert_eq!(is_nil(&ptr::null_mut::<i32>()), Ok(true));
        assert_eq!(is_nil(&None::<Box<i32>>), Ok(true));
        assert_eq!(is_nil(&None::<Rc<str>>), Ok(true));
        assert_eq!(is_nil(&None::<HashMap<u8, u8>>), Ok(true));
    }

    #[test]
    fn live_references() {
        let mut target = 0i32;
        assert_eq!(is_nil(&Box::new(0i32)), Ok(false));
        assert_eq!(is_nil(&(&mut target as *mut i32)), Ok(false));
        assert_eq!(is_nil(&Some(Box::new(0i32))), Ok(false));
        assert_eq!(is_nil(&Vec::<u8>::new()), Ok(false));
        assert_eq!(is_nil(&vec![String::new()]), Ok(false));
        assert_eq!(is_nil(&None::<Vec<String>>), Ok(true));
    }

    #[test]
    fn value_types_cannot_be_nil() {
        assert_eq!(
            is_nil(&1u8),
            Err(NilnessError::CannotBeNil {
                value: "1u8".to_string()
            })
        );
        assert!(is_nil(&Nil).is_err());
    }

    #[test]
    fn must_be_nil() {
        assert_eq!(expect_nil(&Nil.as_value()), Ok(()));
        assert_eq!(expect_nil(&ptr::null::<i32>().as_value()), Ok(()));
        assert_eq!(
            expect_nil(&Box::new(1).as_value()).map_err(|f| f.is_contract_violation()),
            Err(false)
        );
        let empty = Vec::<u8>::new();
        let failure = expect_nil(&empty.as_value()).unwrap_err();
        assert!(!failure.is_contract_violation());
        assert_eq!(failure.to_string(), "[] != nil");
        let failure = expect_nil(&1i32.as_value()).unwrap_err();
        assert!(failure.is_contract_violation());
        assert_eq!(failure.to_string(), "1i32 cannot be nil");
    }

    #[test]
    fn must_not_be_nil() {
        assert_eq!(expect_not_nil(&Nil.as_value()), Err(Failure::ExpectedNotNil));
        assert!(matches!(
            expect_not_nil(&ptr::null::<i32>().as_value()),
            Err(Failure::IsNil { .. })
        ));
        assert_eq!(expect_not_nil(&Box::new(1).as_value()), Ok(()));
        assert_eq!(expect_not_nil(&1i32.as_value()), Ok(()));
        assert_eq!(expect_not_nil(&"".as_value()), Ok(()));
        assert_eq!(expect_not_nil(&vec![1i32, 2].as_value()), Ok(()));
    }
}
