use crate::nilness::NilnessError;
use thiserror::Error;

/// Why an assertion did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("{left} != {right}")]
    NotEqual { left: String, right: String },

    #[error("expected condition failed")]
    ConditionFailed,

    #[error("expected {expected}")]
    ExpectedBool { expected: bool },

    #[error("{value} != nil")]
    NotNil { value: String },

    #[error("expected not nil")]
    ExpectedNotNil,

    #[error("{value} == nil")]
    IsNil { value: String },

    #[error("expected an error")]
    MissingError,

    #[error("{0}")]
    UnexpectedError(String),

    #[error(transparent)]
    Nilness(#[from] NilnessError),
}

impl Failure {
    /// A contract violation can not be fixed by any test data,
    /// e.g. asking a value type to be nil.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Failure::Nilness(_))
    }
}
