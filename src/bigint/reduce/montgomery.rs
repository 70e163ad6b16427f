//! Montgomery reduction (HAC 14.32): trades the per-multiply division that
//! Classic and Barrett pay for a fixed setup cost, at the price of keeping
//! every operand lifted into "Montgomery form" (`x * R mod n`) for the
//! duration of an exponentiation.

use super::{
    super::{limb::{Limb, LIMB_BITS}, BigInt},
    Reducer,
};

pub struct Montgomery {
    modulus: BigInt,
    k: usize,
    r_mask: BigInt,
    n_prime: BigInt,
}

impl Montgomery {
    /// `modulus` must be odd; the caller (the `mod_pow` orchestrator's CRT
    /// split) only ever builds this reducer from the odd factor.
    pub fn new(modulus: BigInt) -> Self {
        let k = modulus.limb_count();
        let bits = k * LIMB_BITS as usize;
        let r_mask = BigInt::one().shl(bits).sub(&BigInt::one());
        let n_inv = invert_mod_two_power(&modulus, bits);
        let n_prime = BigInt::one().shl(bits).sub(&n_inv);
        Montgomery { modulus, k, r_mask, n_prime }
    }

    /// REDC: given `t` known to lie in `[0, n*R)`, return `t * R^-1 mod n`.
    fn redc(&self, t: &BigInt) -> BigInt {
        let t_low = t.and(&self.r_mask);
        let m = t_low.mul(&self.n_prime).and(&self.r_mask);
        let reduced = t.add(&m.mul(&self.modulus)).shr(self.k * LIMB_BITS as usize);
        if reduced >= self.modulus {
            reduced.sub(&self.modulus)
        } else {
            reduced
        }
    }
}

impl Reducer for Montgomery {
    fn reduce(&self, x: &BigInt) -> BigInt {
        self.redc(x)
    }

    fn enter(&self, x: &BigInt) -> BigInt {
        x.shl(self.k * LIMB_BITS as usize).div_rem(&self.modulus).1
    }
}

/// Compute `n^-1 mod 2^target_bits` by Newton-Hensel doubling.
///
/// The low limb's inverse mod `2^LIMB_BITS` is bootstrapped from the
/// 3-correct-bit guess every odd limb satisfies (`n0 * n0 == 1 mod 8`),
/// doubled up to full limb width, then the whole-magnitude inverse is
/// doubled in bit-width the same way up to `target_bits`.
fn invert_mod_two_power(n: &BigInt, target_bits: usize) -> BigInt {
    let n0 = n.low_limb();
    let mut y: Limb = n0;
    for _ in 0..6 {
        y = y.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(y)));
    }

    let mut inv = BigInt::from(y);
    let mut bits = LIMB_BITS as usize;
    let two = BigInt::from(2u64);
    while bits < target_bits {
        bits = (bits * 2).min(target_bits);
        let modulus_pow2 = BigInt::one().shl(bits);
        // Newton step y_{i+1} = y_i * (2 - n*y_i); the intermediate is
        // taken mod a signed range, so reduce through `div_rem`'s
        // common-residue convention rather than a two's-complement mask.
        let t = two.sub(&n.mul(&inv)).div_rem(&modulus_pow2).1;
        inv = inv.mul(&t).div_rem(&modulus_pow2).1;
    }
    inv
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn low_limb_inverse_is_correct_mod_base() {
        let n = BigInt::from(0xdead_beef_0000_0001u64);
        let inv = invert_mod_two_power(&n, LIMB_BITS as usize);
        let product = n.mul(&inv).and(&BigInt::one().shl(LIMB_BITS as usize).sub(&BigInt::one()));
        assert_eq!(product, BigInt::one());
    }

    #[test]
    fn redc_round_trips_through_enter() {
        let n = BigInt::from_str_radix("1000000000000000039", 10);
        let m = Montgomery::new(n.clone());
        let x = BigInt::from(123456789u64);
        let lifted = m.enter(&x);
        assert_eq!(m.reduce(&lifted), x);
    }

    #[test]
    fn redc_agrees_with_plain_modulus_on_a_product() {
        let n = BigInt::from_str_radix("1000000000000000039", 10);
        let m = Montgomery::new(n.clone());
        let a = BigInt::from(12345u64);
        let b = BigInt::from(67890u64);

        let a_mont = m.enter(&a);
        let b_mont = m.enter(&b);
        let product_mont = m.reduce(&a_mont.mul(&b_mont));
        let expected = a.mul(&b).div_rem(&n).1;
        assert_eq!(product_mont, expected);
    }
}
