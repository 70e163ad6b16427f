//! Barrett reduction (HAC 14.42): replaces division by the modulus with a
//! division-free estimate built from a precomputed reciprocal.

use super::{super::{limb::LIMB_BITS, BigInt}, Reducer};

pub struct Barrett {
    modulus: BigInt,
    mu: BigInt,
    k: usize,
}

impl Barrett {
    pub fn new(modulus: BigInt) -> Self {
        let k = modulus.limb_count();
        let mu = BigInt::one().shl(2 * k * LIMB_BITS as usize).div_rem(&modulus).0;
        Barrett { modulus, mu, k }
    }

    fn low_limbs_mask(&self, limbs: usize) -> BigInt {
        BigInt::one().shl(limbs * LIMB_BITS as usize).sub(&BigInt::one())
    }
}

impl Reducer for Barrett {
    fn reduce(&self, x: &BigInt) -> BigInt {
        let word = LIMB_BITS as usize;
        let q1 = x.shr((self.k - 1) * word);
        let q2 = q1.mul(&self.mu);
        let q3 = q2.shr((self.k + 1) * word);

        let mask = self.low_limbs_mask(self.k + 1);
        let r1 = x.and(&mask);
        let r2 = q3.mul(&self.modulus).and(&mask);

        let mut r = if r1 < r2 {
            r1.add(&mask).add(&BigInt::one()).sub(&r2)
        } else {
            r1.sub(&r2)
        };
        while r >= self.modulus {
            r = r.sub(&self.modulus);
        }
        r
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_plain_division() {
        let n = BigInt::from_str_radix("1000003", 10);
        let r = Barrett::new(n.clone());
        let x = BigInt::from_str_radix("123456789012345", 10);
        assert_eq!(r.reduce(&x), x.div_rem(&n).1);
    }

    #[test]
    fn reduces_value_already_below_modulus() {
        let n = BigInt::from(97u64);
        let r = Barrett::new(n.clone());
        let x = BigInt::from(42u64);
        assert_eq!(r.reduce(&x), x);
    }
}
