//! Modular inverse via binary extended GCD (HAC 14.61 family), generalized
//! to accept any integer `this` rather than requiring it already reduced.

use super::BigInt;
use crate::error::BigIntError;

/// `this^-1 mod n`.
///
/// Fails if `this` and `n` are both even (their gcd is then at least 2,
/// so no inverse can exist) or if `gcd(this, n) != 1`.
pub fn mod_inverse(this: &BigInt, n: &BigInt) -> Result<BigInt, BigIntError> {
    if this.is_even() && n.is_even() {
        return Err(BigIntError::BothEven);
    }

    // Fold `this` into `[0, n)` up front so any integer, not just an
    // already-reduced one, is accepted safely by the xGCD loop below. The
    // fixups below must add back this same folded value, not `this` as
    // given: the loop invariant is `a*n + b*reduced == u` (and the `c`/`d`
    // mirror for `v`), so the operand they reconstruct against has to match
    // what `v` was actually initialized to.
    let reduced = this.div_rem(n).1;
    let mut u = n.clone();
    let mut v = reduced.clone();

    let mut a = BigInt::one();
    let mut b = BigInt::zero();
    let mut c = BigInt::zero();
    let mut d = BigInt::one();

    while !u.is_zero() {
        while u.is_even() {
            u = u.shr(1);
            if !a.is_even() || !b.is_even() {
                a = a.add(&reduced);
                b = b.sub(n);
            }
            a = a.shr(1);
            b = b.shr(1);
        }

        while v.is_even() {
            v = v.shr(1);
            if !c.is_even() || !d.is_even() {
                c = c.add(&reduced);
                d = d.sub(n);
            }
            c = c.shr(1);
            d = d.shr(1);
        }

        if u >= v {
            u = u.sub(&v);
            a = a.sub(&c);
            b = b.sub(&d);
        } else {
            v = v.sub(&u);
            c = c.sub(&a);
            d = d.sub(&b);
        }
    }

    if v != BigInt::one() {
        return Err(BigIntError::NotCoprime);
    }

    Ok(if d.is_negative() { d.add(n) } else { d })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_known_inverse() {
        let inv = mod_inverse(&BigInt::from(30u64), &BigInt::from(17u64)).unwrap();
        assert_eq!(inv, BigInt::from(4u64));
    }

    #[test]
    fn inverse_times_value_is_one_mod_n() {
        let n = BigInt::from(1000000007u64);
        let x = BigInt::from(123456u64);
        let inv = mod_inverse(&x, &n).unwrap();
        assert_eq!(x.mul(&inv).div_rem(&n).1, BigInt::one());
    }

    #[test]
    fn both_even_fails() {
        assert_eq!(mod_inverse(&BigInt::from(4u64), &BigInt::from(6u64)), Err(BigIntError::BothEven));
    }

    #[test]
    fn non_coprime_fails() {
        assert_eq!(mod_inverse(&BigInt::from(6u64), &BigInt::from(9u64)), Err(BigIntError::NotCoprime));
    }

    #[test]
    fn accepts_unreduced_input() {
        let n = BigInt::from(17u64);
        let unreduced = BigInt::from(30u64 + 17 * 5);
        assert_eq!(mod_inverse(&unreduced, &n).unwrap(), BigInt::from(4u64));
    }
}
