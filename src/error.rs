//! Failure types surfaced by this crate's checked operations.

use std::fmt;

/// `BigInt::mod_inverse` found no multiplicative inverse.
///
/// The binary extended-GCD contract distinguishes two ways that can
/// happen: the two operands share the trivial common factor of 2 before
/// the loop even starts, or the loop runs to completion and finds some
/// other common factor greater than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// Both `self` and the modulus are even, so their gcd is at least 2.
    BothEven,
    /// `gcd(self, modulus) != 1`; no inverse exists.
    NotCoprime,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::BothEven => f.write_str("both operands are even, no inverse exists"),
            BigIntError::NotCoprime => f.write_str("operands are not coprime, no inverse exists"),
        }
    }
}

impl std::error::Error for BigIntError {}
