//! Limb-level primitives shared by every operation in this module.
//!
//! A magnitude is stored least-significant limb first, in base `BASE = 2^64`:
//! the widest limb Rust gives a native double-width accumulator for, so a
//! pairwise product of two limbs always fits a single `u128` with room to
//! spare for carry propagation.

pub type Limb = u64;
pub type DoubleLimb = u128;

pub const LIMB_BITS: u32 = Limb::BITS;
pub const BASE: DoubleLimb = 1 << LIMB_BITS;

/// Strip high zero limbs so that the top limb, if any, is nonzero.
pub fn normalize(limbs: &mut Vec<Limb>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

/// Compare two magnitudes (limb vectors assumed already normalized).
pub fn compare_magnitude(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().zip(b.iter()).rev() {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Bitwise AND over the overlapping limbs; limbs beyond the shorter operand
/// are implicitly zero and therefore dropped.
pub fn and_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut out: Vec<Limb> = a.iter().zip(b.iter()).map(|(x, y)| x & y).collect();
    normalize(&mut out);
    out
}

/// Shift a magnitude left by `bits`, expressed as whole limbs plus a
/// sub-limb rotation carried between limbs.
pub fn shift_left(limbs: &[Limb], bits: usize) -> Vec<Limb> {
    if bits == 0 || limbs.is_empty() {
        return limbs.to_vec();
    }
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;

    let mut out = vec![0 as Limb; limb_shift];
    if bit_shift == 0 {
        out.extend_from_slice(limbs);
    } else {
        let mut carry: Limb = 0;
        for &limb in limbs {
            out.push((limb << bit_shift) | carry);
            carry = limb >> (LIMB_BITS - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    normalize(&mut out);
    out
}

/// Shift a magnitude right by `bits`. A no-op shift (`bits == 0`) still
/// normalizes, producing the same canonical result as any other shift.
pub fn shift_right(limbs: &[Limb], bits: usize) -> Vec<Limb> {
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;

    if limb_shift >= limbs.len() {
        return Vec::new();
    }

    let mut out = limbs[limb_shift..].to_vec();
    if bit_shift != 0 {
        let mut carry: Limb = 0;
        for limb in out.iter_mut().rev() {
            let next_carry = *limb << (LIMB_BITS - bit_shift);
            *limb = (*limb >> bit_shift) | carry;
            carry = next_carry;
        }
    }
    normalize(&mut out);
    out
}

/// Number of leading zero bits above the highest set bit of the top limb,
/// i.e. how far the top limb must be shifted left for its MSB to be set.
/// Returns 0 for an empty magnitude.
pub fn leading_zero_bits_of_top_limb(limbs: &[Limb]) -> u32 {
    match limbs.last() {
        Some(&top) => top.leading_zeros(),
        None => 0,
    }
}

/// Index (from the low end, 0-based) of the highest set bit, or `None` for
/// zero.
pub fn bit_length(limbs: &[Limb]) -> usize {
    match limbs.last() {
        Some(&top) => limbs.len() * LIMB_BITS as usize - top.leading_zeros() as usize,
        None => 0,
    }
}

pub fn get_bit(limbs: &[Limb], i: usize) -> bool {
    let limb = i / LIMB_BITS as usize;
    let bit = i % LIMB_BITS as usize;
    limbs.get(limb).map(|l| (l >> bit) & 1 == 1).unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_strips_trailing_zero_limbs() {
        let mut v = vec![1, 2, 0, 0];
        normalize(&mut v);
        assert_eq!(v, vec![1, 2]);

        let mut z = vec![0, 0, 0];
        normalize(&mut z);
        assert!(z.is_empty());
    }

    #[test]
    fn compare_magnitude_by_length_then_msb_first() {
        use std::cmp::Ordering;
        assert_eq!(compare_magnitude(&[1, 2], &[5]), Ordering::Greater);
        assert_eq!(compare_magnitude(&[5], &[1, 2]), Ordering::Less);
        assert_eq!(compare_magnitude(&[1, 2], &[1, 2]), Ordering::Equal);
        assert_eq!(compare_magnitude(&[9, 2], &[10, 2]), Ordering::Less);
    }

    #[test]
    fn shift_left_crosses_limb_boundary() {
        assert_eq!(shift_left(&[1], LIMB_BITS as usize), vec![0, 1]);
        assert_eq!(shift_left(&[1], 1), vec![2]);
        assert_eq!(shift_left(&[], 5), Vec::<Limb>::new());
        assert_eq!(shift_left(&[1, 2], 0), vec![1, 2]);
    }

    #[test]
    fn shift_right_crosses_limb_boundary_and_normalizes() {
        assert_eq!(shift_right(&[0, 1], LIMB_BITS as usize), vec![1]);
        assert_eq!(shift_right(&[2], 1), vec![1]);
        assert_eq!(shift_right(&[1], 0), vec![1]);
        assert_eq!(shift_right(&[1], 1), Vec::<Limb>::new());
    }

    #[test]
    fn bit_length_and_get_bit_agree() {
        let v = vec![0b1010];
        assert_eq!(bit_length(&v), 4);
        assert!(get_bit(&v, 1));
        assert!(get_bit(&v, 3));
        assert!(!get_bit(&v, 0));
        assert!(!get_bit(&v, 2));
        assert!(!get_bit(&v, 100));
    }
}
