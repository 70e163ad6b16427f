//! Long division (quotient and remainder).
//!
//! Implements HAC 14.20 (Knuth's Algorithm D) adapted to this crate's
//! 64-bit limb. The public contract is the
//! "common residue" convention: `x.div_rem(y)` returns `(q, r)` such that
//! `x == q*y + r` with `0 <= r < |y|`, i.e. when the mathematical remainder
//! would come out negative, `|y|` is added back so the remainder is always
//! non-negative.

use super::{
    limb::{compare_magnitude, normalize, shift_right, DoubleLimb, Limb, BASE, LIMB_BITS},
    BigInt,
};
use std::cmp::Ordering;

impl BigInt {
    /// Divide by `other`, returning `(quotient, common-residue remainder)`.
    ///
    /// Panics on division by zero, matching the convention already used
    /// elsewhere in this crate's ecosystem for integer division.
    #[must_use]
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        assert!(!other.is_zero(), "division by zero");

        let (q_mag, r_mag) = divmod_magnitude(&self.limbs, &other.limbs);
        let q = BigInt { limbs: q_mag, negative: self.negative != other.negative }.canonicalize_zero_sign();
        let mut r = BigInt { limbs: r_mag, negative: false };
        if self.negative && !r.is_zero() {
            r = other.abs().sub(&r);
        }
        (q, r)
    }
}

fn divmod_magnitude(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    match compare_magnitude(a, b) {
        Ordering::Equal => (vec![1], Vec::new()),
        Ordering::Less => (Vec::new(), a.to_vec()),
        Ordering::Greater if b.len() == 1 => {
            let (q, r) = short_divide(a, b[0]);
            (q, if r == 0 { Vec::new() } else { vec![r] })
        }
        Ordering::Greater => long_divide(a, b),
    }
}

/// Division by a single limb.
fn short_divide(a: &[Limb], d: Limb) -> (Vec<Limb>, Limb) {
    let mut q = vec![0 as Limb; a.len()];
    let mut rem: DoubleLimb = 0;
    for i in (0..a.len()).rev() {
        let cur = rem * BASE + a[i] as DoubleLimb;
        q[i] = (cur / d as DoubleLimb) as Limb;
        rem = cur % d as DoubleLimb;
    }
    normalize(&mut q);
    (q, rem as Limb)
}

/// Division by two or more limbs (Knuth's Algorithm D).
fn long_divide(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let n = b.len();
    let m = a.len() - n;
    let s = b.last().unwrap().leading_zeros();

    let mut u = shl_extend(a, s, a.len() + 1);
    let v = shl_extend(b, s, n);

    let mut q = vec![0 as Limb; m + 1];

    for j in (0..=m).rev() {
        // D3: estimate the trial digit from the window's top two limbs.
        let window_top = u[j + n] as DoubleLimb * BASE + u[j + n - 1] as DoubleLimb;
        let mut q_hat = (window_top / v[n - 1] as DoubleLimb).min(BASE - 1);
        let mut r_hat = window_top - q_hat * v[n - 1] as DoubleLimb;

        while r_hat < BASE && q_hat * v[n - 2] as DoubleLimb > r_hat * BASE + u[j + n - 2] as DoubleLimb {
            q_hat -= 1;
            r_hat += v[n - 1] as DoubleLimb;
        }

        // D4: subtract q_hat * v from the window, carrying the multiply and
        // the borrow through together.
        let mut mul_carry: DoubleLimb = 0;
        let mut borrow = false;
        for i in 0..n {
            let p = q_hat * v[i] as DoubleLimb + mul_carry;
            mul_carry = p / BASE;
            let piece = (p % BASE) as Limb;
            let (t, b0) = u[j + i].overflowing_sub(piece);
            let (t, b1) = t.overflowing_sub(borrow as Limb);
            u[j + i] = t;
            borrow = b0 || b1;
        }
        let (t, b0) = u[j + n].overflowing_sub(mul_carry as Limb);
        let (t, b1) = t.overflowing_sub(borrow as Limb);
        u[j + n] = t;
        borrow = b0 || b1;

        // D5/D6: q_hat was one too large; undo by adding v back once.
        if borrow {
            q_hat -= 1;
            let mut carry: DoubleLimb = 0;
            for i in 0..n {
                let sum = u[j + i] as DoubleLimb + v[i] as DoubleLimb + carry;
                u[j + i] = (sum % BASE) as Limb;
                carry = sum / BASE;
            }
            u[j + n] = (u[j + n] as DoubleLimb + carry) as Limb;
        }

        q[j] = q_hat as Limb;
    }

    normalize(&mut q);
    let r = shift_right(&u[..n], s as usize);
    (q, r)
}

/// Shift a magnitude left by fewer than `LIMB_BITS` bits into a fixed-size
/// output buffer, without normalizing — used to build Algorithm D's working
/// copies, which must keep their nominal length (including a leading zero
/// limb for the dividend) regardless of how many significant bits result.
fn shl_extend(limbs: &[Limb], bits: u32, out_len: usize) -> Vec<Limb> {
    let mut out = vec![0 as Limb; out_len];
    if bits == 0 {
        out[..limbs.len()].copy_from_slice(limbs);
        return out;
    }
    let mut carry: Limb = 0;
    for (i, &limb) in limbs.iter().enumerate() {
        out[i] = (limb << bits) | carry;
        carry = limb >> (LIMB_BITS - bits);
    }
    if limbs.len() < out_len {
        out[limbs.len()] = carry;
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn short_divide_matches_known_quotient() {
        let (q, r) = short_divide(&[65, 2], 12);
        // 65 + 2*BASE divided by 12.
        let expected = BigInt::from_bytes_be(&(65u128 + 2 * BASE).to_be_bytes());
        let got = BigInt { limbs: q.clone(), negative: false };
        let reconstructed = got.mul(&BigInt::from(12u64)).add(&BigInt::from(r));
        assert_eq!(reconstructed, expected);
    }

    #[test]
    fn long_divide_round_trips_through_multiply_add() {
        let a: Vec<Limb> = vec![1, 2, 3, 4];
        let b: Vec<Limb> = vec![7, 5];
        let (q, r) = divmod_magnitude(&a, &b);
        let x = BigInt { limbs: a, negative: false };
        let y = BigInt { limbs: b, negative: false };
        let qb = BigInt { limbs: q, negative: false };
        let rb = BigInt { limbs: r.clone(), negative: false };
        assert_eq!(qb.mul(&y).add(&rb), x);
        assert_eq!(compare_magnitude(&r, &y.limbs), Ordering::Less);
    }

    #[test]
    fn equal_magnitudes_give_quotient_one() {
        let a = vec![5, 6];
        assert_eq!(divmod_magnitude(&a, &a), (vec![1], Vec::new()));
    }

    #[test]
    fn smaller_dividend_gives_zero_quotient() {
        let a = vec![3];
        let b = vec![1, 1];
        assert_eq!(divmod_magnitude(&a, &b), (Vec::new(), vec![3]));
    }
}
