//! Sliding-window modular exponentiation (HAC 14.85) and the `mod_pow`
//! orchestrator built on top of it.

use super::{
    modinv::mod_inverse,
    reduce::{Barrett, Classic, Identity, Montgomery, PowerOfTwo, Reducer},
    BigInt,
};

/// Which reduction strategy a sliding-window exponentiation should drive.
/// `mod_pow` picks one automatically; exposed publicly so callers (and this
/// crate's own reducer-equivalence tests) can force a particular strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceMode {
    None,
    Classic,
    PowerOfTwo,
    Barrett,
    Montgomery,
}

fn build_reducer(mode: ReduceMode, modulus: BigInt) -> Box<dyn Reducer> {
    match mode {
        ReduceMode::None => Box::new(Identity),
        ReduceMode::Classic => Box::new(Classic::new(modulus)),
        ReduceMode::PowerOfTwo => Box::new(PowerOfTwo::new(modulus)),
        ReduceMode::Barrett => Box::new(Barrett::new(modulus)),
        ReduceMode::Montgomery => Box::new(Montgomery::new(modulus)),
    }
}

/// Smallest window width `w` such that a `2^w`-ary sliding window pays for
/// itself at this exponent's bit length, per the crossover table below.
fn window_size(exponent_bit_length: usize) -> usize {
    const CROSSOVERS: [usize; 6] = [7, 25, 81, 241, 673, 1793];
    for (i, &bound) in CROSSOVERS.iter().enumerate() {
        if exponent_bit_length <= bound {
            return i + 1;
        }
    }
    6
}

/// `x^e mod n`, reducing through `mode` after every squaring and multiply.
///
/// Used directly by this crate's reducer-equivalence tests and internally
/// by `mod_pow`, which picks `mode` for the caller.
pub fn sliding_window_pow_mod(x: &BigInt, e: &BigInt, n: &BigInt, mode: ReduceMode) -> BigInt {
    let reducer = build_reducer(mode, n.clone());

    if e.is_zero() {
        return reducer.reduce(&reducer.enter(&BigInt::one()));
    }

    let w = window_size(e.bit_length());
    let table_len = 1usize << w;

    // Only odd slots of this table are ever populated or read: a sliding
    // window always ends its low edge on a set bit, so the value it reads
    // off the exponent is always odd.
    let mut odd_powers = vec![BigInt::zero(); table_len];
    odd_powers[1] = reducer.enter(x);
    let squared_base = reducer.reduce(&odd_powers[1].square());
    for i in 1..(table_len / 2) {
        let idx = 2 * i + 1;
        odd_powers[idx] = reducer.reduce(&odd_powers[idx - 2].mul(&squared_base));
    }

    let mut result = reducer.enter(&BigInt::one());
    let mut i = e.bit_length() - 1;
    loop {
        if !e.get_bit(i) {
            result = reducer.reduce(&result.square());
            if i == 0 {
                break;
            }
            i -= 1;
        } else {
            let low = i.saturating_sub(w - 1);
            let mut j = low;
            while !e.get_bit(j) {
                j += 1;
            }
            for _ in 0..=(i - j) {
                result = reducer.reduce(&result.square());
            }
            let mut window_value: u64 = 0;
            for b in (j..=i).rev() {
                window_value = (window_value << 1) | e.get_bit(b) as u64;
            }
            result = reducer.reduce(&result.mul(&odd_powers[window_value as usize]));
            if j == 0 {
                break;
            }
            i = j - 1;
        }
    }

    reducer.reduce(&result)
}

/// Index of the lowest set bit, i.e. the largest `j` with `n = 2^j * m`,
/// `m` odd. Undefined for zero, matching every other caller's assumption
/// that a modulus is strictly positive.
fn trailing_zero_bits(n: &BigInt) -> usize {
    let mut j = 0;
    while !n.get_bit(j) {
        j += 1;
    }
    j
}

/// `x^e mod n`. Dispatches on `n`'s parity: an odd modulus goes straight
/// through Montgomery; an even one is split via `n = 2^j * m` (`m` odd)
/// into a Montgomery sub-problem and a power-of-two sub-problem, recombined
/// by the Chinese Remainder Theorem.
pub fn mod_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
    if exponent.is_zero() {
        return BigInt::one().div_rem(modulus).1;
    }
    if exponent == &BigInt::one() {
        return base.div_rem(modulus).1;
    }
    if exponent == &BigInt::from(2u64) {
        return base.mul(base).div_rem(modulus).1;
    }

    if !modulus.is_even() {
        return sliding_window_pow_mod(base, exponent, modulus, ReduceMode::Montgomery);
    }

    let j = trailing_zero_bits(modulus);
    let m = modulus.shr(j);
    let power_of_two = BigInt::one().shl(j);

    let part1 = if m == BigInt::one() {
        BigInt::zero()
    } else {
        sliding_window_pow_mod(base, exponent, &m, ReduceMode::Montgomery)
    };
    let part2 = sliding_window_pow_mod(base, exponent, &power_of_two, ReduceMode::PowerOfTwo);

    let y1 = mod_inverse(&power_of_two, &m).expect("2^j and its odd cofactor are always coprime");
    let y2 = mod_inverse(&m, &power_of_two).expect("an odd cofactor is always coprime to 2^j");

    let combined = part1.mul(&power_of_two).mul(&y1).add(&part2.mul(&m).mul(&y2));
    combined.div_rem(modulus).1
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_size_follows_crossover_table() {
        assert_eq!(window_size(1), 1);
        assert_eq!(window_size(7), 1);
        assert_eq!(window_size(8), 2);
        assert_eq!(window_size(2000), 6);
    }

    #[test]
    fn sliding_window_agrees_with_mod_pow_dispatch() {
        let x = BigInt::from(7u64);
        let e = BigInt::from(13u64);
        let n = BigInt::from(11u64);
        assert_eq!(sliding_window_pow_mod(&x, &e, &n, ReduceMode::Montgomery), mod_pow(&x, &e, &n));
    }

    #[test]
    fn mod_pow_matches_known_value() {
        assert_eq!(
            mod_pow(&BigInt::from(10u64), &BigInt::from(20u64), &BigInt::from(30u64)),
            BigInt::from(10u64)
        );
    }

    #[test]
    fn mod_pow_handles_even_modulus_via_crt_split() {
        let base = BigInt::from(7u64);
        let e = BigInt::from(5u64);
        let n = BigInt::from(12u64);
        let expected = base.mul(&base).mul(&base).mul(&base).mul(&base).div_rem(&n).1;
        assert_eq!(mod_pow(&base, &e, &n), expected);
    }

    #[test]
    fn mod_pow_zero_exponent_is_one_mod_n() {
        assert_eq!(mod_pow(&BigInt::from(9u64), &BigInt::zero(), &BigInt::from(5u64)), BigInt::one());
    }

    #[test]
    fn rsa_round_trip() {
        // p = 61, q = 53, n = 3233, phi = 3120, e = 17, d = 2753.
        let n = BigInt::from(3233u64);
        let e = BigInt::from(17u64);
        let d = BigInt::from(2753u64);
        let m = BigInt::from(65u64);
        let c = mod_pow(&m, &e, &n);
        assert_eq!(mod_pow(&c, &d, &n), m);
    }
}
