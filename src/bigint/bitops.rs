//! Logical shifts and bitwise AND over the limb vector.
//!
//! These operate on magnitudes only; sign is irrelevant to a shift or a
//! mask and is always left at `false` in by this module's results, matching
//! their sole callers (power-of-two reduction, Montgomery's odd-power
//! table, Barrett's windowed extraction), which only ever apply them to
//! already-non-negative values.

use super::{
    limb::{and_magnitude, shift_left, shift_right},
    BigInt,
};

impl BigInt {
    #[must_use]
    pub fn shl(&self, bits: usize) -> BigInt {
        BigInt { limbs: shift_left(&self.limbs, bits), negative: self.negative }
    }

    #[must_use]
    pub fn shr(&self, bits: usize) -> BigInt {
        BigInt { limbs: shift_right(&self.limbs, bits), negative: self.negative }
            .canonicalize_zero_sign()
    }

    #[must_use]
    pub fn and(&self, other: &BigInt) -> BigInt {
        BigInt { limbs: and_magnitude(&self.limbs, &other.limbs), negative: false }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shl_then_shr_round_trips() {
        let x = BigInt::from_str_radix("123456789", 10);
        assert_eq!(x.shl(17).shr(17), x);
    }

    #[test]
    fn and_masks_to_power_of_two_minus_one() {
        let x = BigInt::from_str_radix("255", 10);
        let mask = BigInt::from_str_radix("15", 10);
        assert_eq!(x.and(&mask), BigInt::from_str_radix("15", 10));
    }
}
