//! Power-of-two reduction: reducing modulo `2^k` is a bitmask, not a
//! division.

use super::{super::BigInt, Reducer};

pub struct PowerOfTwo {
    modulus: BigInt,
    mask: BigInt,
}

impl PowerOfTwo {
    /// `modulus` must be a power of two; the caller (the `mod_pow`
    /// orchestrator, which only ever builds this reducer from an exact
    /// `2^k` CRT factor) is responsible for that precondition.
    pub fn new(modulus: BigInt) -> Self {
        let mask = modulus.sub(&BigInt::one());
        PowerOfTwo { modulus, mask }
    }
}

impl Reducer for PowerOfTwo {
    fn reduce(&self, x: &BigInt) -> BigInt {
        if x.is_negative() {
            // and_magnitude ignores sign, so fall back to common-residue
            // division for the rare negative input rather than mask a
            // two's-complement bit pattern this type doesn't keep.
            return x.div_rem(&self.modulus).1;
        }
        x.and(&self.mask)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn masks_below_the_modulus() {
        let r = PowerOfTwo::new(BigInt::from(16u64));
        assert_eq!(r.reduce(&BigInt::from(37u64)), BigInt::from(5u64));
        assert_eq!(r.reduce(&BigInt::from(16u64)), BigInt::zero());
    }
}
