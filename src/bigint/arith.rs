//! Addition and subtraction.
//!
//! Same-sign addition and opposite-sign subtraction both reduce to a single
//! magnitude-addition primitive; opposite-sign addition and same-sign
//! subtraction both reduce to a single magnitude-subtraction primitive that
//! assumes its left operand is the larger magnitude. The two primitives are
//! mutual mirror images of each other, same as the rest of this crate's
//! carry/borrow propagation.

use {
    super::{limb::{compare_magnitude, normalize, DoubleLimb, Limb, BASE},
            BigInt},
    std::{cmp::Ordering, ops},
};

/// Add two magnitudes of arbitrary length.
fn add_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleLimb = 0;
    for i in 0..long.len() {
        let x = long[i] as DoubleLimb;
        let y = short.get(i).copied().unwrap_or(0) as DoubleLimb;
        let sum = x + y + carry;
        out.push((sum % BASE) as Limb);
        carry = sum / BASE;
    }
    if carry != 0 {
        out.push(carry as Limb);
    }
    normalize(&mut out);
    out
}

/// Subtract magnitude `b` from magnitude `a`, requiring `a >= b`.
fn sub_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert_ne!(compare_magnitude(a, b), Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i128 = 0;
    for i in 0..a.len() {
        let x = a[i] as i128;
        let y = b.get(i).copied().unwrap_or(0) as i128;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += BASE as i128;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as Limb);
    }
    debug_assert_eq!(borrow, 0);
    normalize(&mut out);
    out
}

impl BigInt {
    #[must_use]
    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.negative == other.negative {
            BigInt {
                limbs: add_magnitude(&self.limbs, &other.limbs),
                negative: self.negative,
            }
            .canonicalize_zero_sign()
        } else {
            // Mixed signs: delegate to subtraction of magnitudes, with the
            // sign of the larger magnitude winning.
            match compare_magnitude(&self.limbs, &other.limbs) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt {
                    limbs: sub_magnitude(&self.limbs, &other.limbs),
                    negative: self.negative,
                },
                Ordering::Less => BigInt {
                    limbs: sub_magnitude(&other.limbs, &self.limbs),
                    negative: other.negative,
                },
            }
        }
    }

    #[must_use]
    pub fn sub(&self, other: &BigInt) -> BigInt {
        if self.negative != other.negative {
            // Mixed signs: delegate to addition of magnitudes.
            BigInt {
                limbs: add_magnitude(&self.limbs, &other.limbs),
                negative: self.negative,
            }
            .canonicalize_zero_sign()
        } else {
            match compare_magnitude(&self.limbs, &other.limbs) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt {
                    limbs: sub_magnitude(&self.limbs, &other.limbs),
                    negative: self.negative,
                },
                Ordering::Less => BigInt {
                    limbs: sub_magnitude(&other.limbs, &self.limbs),
                    negative: !self.negative,
                },
            }
        }
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $op:ident) => {
        impl ops::$trait for &BigInt {
            type Output = BigInt;
            fn $op(self, rhs: &BigInt) -> BigInt {
                BigInt::$method(self, rhs)
            }
        }

        impl ops::$trait for BigInt {
            type Output = BigInt;
            fn $op(self, rhs: BigInt) -> BigInt {
                BigInt::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_magnitude_propagates_carry() {
        assert_eq!(add_magnitude(&[Limb::MAX], &[1]), vec![0, 1]);
        assert_eq!(add_magnitude(&[1, 2], &[5]), vec![6, 2]);
    }

    #[test]
    fn sub_magnitude_propagates_borrow() {
        assert_eq!(sub_magnitude(&[0, 1], &[1]), vec![Limb::MAX]);
        assert_eq!(sub_magnitude(&[5], &[5]), Vec::<Limb>::new());
    }
}
