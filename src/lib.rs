//! Loose-equality and nilness engine behind a minimal assertion toolkit.
//!
//! [`equivalent`] decides whether two values of arbitrary, possibly different
//! types are equal for assertion purposes, [`admits_nil`] and [`is_nil`]
//! classify nilness. The functions in [`assert`] report failing verdicts
//! through a [`Reporter`](assert::reporter::Reporter).

// lets the derive macros refer to this crate by name from inside it
extern crate self as assertive_core;

pub mod assert;
pub mod equivalence;
pub mod logger;
pub mod nilness;
pub mod traits;
pub mod values;

pub use assertive_macros::AsValue;
pub use equivalence::equivalent;
pub use nilness::{admits_nil, is_nil};
pub use values::value::{AsValue, Nil, Value};
