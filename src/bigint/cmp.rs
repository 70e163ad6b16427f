//! Three-way comparison.
//!
//! Signs are compared first; equal signs fall back to magnitude comparison
//! (limb count, then limbs from most significant down), with the result
//! polarity flipped when both operands are negative.

use {
    super::{limb::compare_magnitude, BigInt},
    std::cmp::Ordering,
};

impl BigInt {
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => compare_magnitude(&self.limbs, &other.limbs),
            (true, true) => compare_magnitude(&self.limbs, &other.limbs).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positive_beats_negative() {
        let p = BigInt::one();
        let n = BigInt::one().negate();
        assert!(p > n);
        assert!(n < p);
    }

    #[test]
    fn negative_magnitude_ordering_is_reversed() {
        let a = BigInt::from_str_radix("10", 10).negate();
        let b = BigInt::from_str_radix("20", 10).negate();
        assert!(a > b);
    }

    #[test]
    fn equal_values_compare_equal() {
        assert_eq!(BigInt::zero().compare(&BigInt::zero()), Ordering::Equal);
    }
}
