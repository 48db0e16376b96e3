pub mod named;
pub mod nilness;
