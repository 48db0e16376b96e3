pub trait LooseEq {
    /// Check if two values are equal after literal normalization,
    /// ignoring integer widths, signedness of non-negative integers and float widths.
    fn loose_eq(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_loose_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        match (&$left_val, &$right_val) {
            (left_val, right_val) => {
                let left = $crate::values::value::AsValue::as_value(left_val);
                let right = $crate::values::value::AsValue::as_value(right_val);
                if !$crate::traits::loose_eq::LooseEq::loose_eq(&left, &right) {
                    ::core::panic!(
                        "loose equality assertion failed: `(left ~ right)`\n  left: `{}`,\n right: `{}`",
                        left, right
                    );
                }
            }
        }
    };
}
