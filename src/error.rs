use thiserror::Error;

/// Failure kinds reported by [`BigInteger`](crate::BigInteger) operations.
///
/// Both arithmetic kinds are fatal to the computation that raised them;
/// they are never used as flow control for expected conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntegerError {
    /// A limb left `[0, BASE)` during parsing or carry/borrow correction,
    /// or a multiplication result exceeded the decimal digit ceiling.
    #[error("BigInteger overflow")]
    Overflow,

    /// The divisor's magnitude was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A character after the optional leading sign was not a decimal digit.
    #[error("invalid digit {ch:?} in decimal string")]
    InvalidDigit { ch: char },

    /// The input held no digits at all (empty string or a bare sign).
    #[error("empty decimal string")]
    Empty,
}
