pub mod identity;
pub mod loose_eq;
