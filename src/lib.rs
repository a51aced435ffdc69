//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers in sign-magnitude form, with the
//!   full arithmetic operator set, decimal parsing and formatting, and no dependency on a
//!   built-in big-integer facility.
//! - [`BigIntegerError`]: the failure kinds raised by the fallible `checked_*` entry points
//!   (overflow, division by zero, malformed decimal input).

mod big_integer;
mod big_integer_cache;
mod big_integer_constants;
mod error;

pub use big_integer::BigInteger;
pub use error::BigIntegerError;

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".into();
        let b: BigInteger = "900000000000".into();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
