//! Schoolbook multiplication and its diagonal-accumulating squaring
//! specialization.

use super::{
    limb::{normalize, DoubleLimb, Limb, BASE},
    BigInt,
};
use std::ops;

fn multiply_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut acc = vec![0 as Limb; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            let m = acc[i + j] as DoubleLimb + x as DoubleLimb * y as DoubleLimb + carry;
            acc[i + j] = (m % BASE) as Limb;
            carry = m / BASE;
        }
        // The final carry out of this row becomes the next digit over; it
        // can itself ripple further if that digit is already near capacity.
        if carry != 0 {
            add_at(&mut acc, i + b.len(), carry);
        }
    }
    normalize(&mut acc);
    acc
}

/// Square a magnitude by accumulating the diagonal `a[i]^2` terms and the
/// doubled cross terms `2 * a[i] * a[j]` for `j > i`, skipping the
/// symmetric duplicate half that schoolbook multiplication would redo.
fn square_magnitude(a: &[Limb]) -> Vec<Limb> {
    if a.is_empty() {
        return Vec::new();
    }
    let n = a.len();
    let mut acc = vec![0 as Limb; 2 * n];

    for i in 0..n {
        let diagonal = a[i] as DoubleLimb * a[i] as DoubleLimb;
        add_at(&mut acc, 2 * i, diagonal);

        for j in (i + 1)..n {
            // Fold in 2 * a[i] * a[j] as two additions of the plain
            // product rather than one addition of the doubled product:
            // doubling a near-maximal u64*u64 product outright would
            // already overflow the u128 accumulator before the add even
            // happens, since such a product can sit past half of u128's
            // range.
            let cross = a[i] as DoubleLimb * a[j] as DoubleLimb;
            add_at(&mut acc, i + j, cross);
            add_at(&mut acc, i + j, cross);
        }
    }

    normalize(&mut acc);
    acc
}

/// Add a (possibly multi-limb-sized) value into `acc` at limb index `at`,
/// propagating carry through as many limbs as needed.
fn add_at(acc: &mut [Limb], at: usize, value: DoubleLimb) {
    let mut carry = value;
    let mut i = at;
    while carry != 0 {
        let sum = acc[i] as DoubleLimb + (carry % BASE);
        acc[i] = (sum % BASE) as Limb;
        carry = carry / BASE + sum / BASE;
        i += 1;
    }
}

impl BigInt {
    #[must_use]
    pub fn mul(&self, other: &BigInt) -> BigInt {
        let limbs = if self == other {
            square_magnitude(&self.limbs)
        } else {
            multiply_magnitude(&self.limbs, &other.limbs)
        };
        BigInt { limbs, negative: self.negative != other.negative }.canonicalize_zero_sign()
    }

    #[must_use]
    pub fn square(&self) -> BigInt {
        BigInt { limbs: square_magnitude(&self.limbs), negative: false }
    }
}

impl ops::Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl ops::Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn multiply_matches_known_product() {
        assert_eq!(
            multiply_magnitude(&[Limb::MAX], &[2]),
            vec![Limb::MAX - 1, 1]
        );
    }

    #[test]
    fn square_matches_multiply_by_self() {
        let a = vec![12345, 67890, Limb::MAX];
        assert_eq!(square_magnitude(&a), multiply_magnitude(&a, &a));
    }

    #[test]
    fn square_of_empty_is_empty() {
        assert_eq!(square_magnitude(&[]), Vec::<Limb>::new());
    }
}
