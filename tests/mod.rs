pub mod assertions;
pub mod values;
