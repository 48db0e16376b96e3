pub mod complex;
pub mod decimal;
pub mod integer;
pub mod opaque;
pub mod reference;
pub mod sequence;
