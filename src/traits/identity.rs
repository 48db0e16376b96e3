pub trait Identity {
    /// Check if two values are strictly identical (same type, same bits, same referent).
    fn identical(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_identical {
    ($left_val:expr, $right_val:expr $(,)?) => {
        match (&$left_val, &$right_val) {
            (left_val, right_val) => {
                let left = $crate::values::value::AsValue::as_value(left_val);
                let right = $crate::values::value::AsValue::as_value(right_val);
                if !$crate::traits::identity::Identity::identical(&left, &right) {
                    ::core::panic!(
                        "identity assertion failed: `(left is right)`\n  left: `{}`,\n right: `{}`",
                        left, right
                    );
                }
            }
        }
    };
}
