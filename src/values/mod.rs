pub mod conversions;
pub mod core_value;
pub mod core_values;
pub mod literal;
pub mod value;
