//! Error kinds for the arithmetic engine and the solver.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid character in integer string")]
    InvalidFormat,

    #[error("division by zero")]
    DivisionByZero,

    #[error("random bound must be strictly positive")]
    InvalidArgument,

    #[error("value does not fit in a u64")]
    Overflow,

    #[error("Euler's criterion produced an impossible residue; modulus is not prime")]
    InvariantViolation,
}

pub type Result<T> = std::result::Result<T, Error>;
