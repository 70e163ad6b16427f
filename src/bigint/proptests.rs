//! Randomized property checks, generated the way this codebase's other
//! round-trip tests randomize their inputs (`rand::thread_rng()` driving a
//! byte buffer, as in the cipher and padding test suites) rather than fixed
//! example vectors.

use {super::BigInt, rand::Rng};

fn random_bigint(byte_len: usize) -> BigInt {
    let bytes: Vec<u8> = (0..byte_len).map(|_| rand::thread_rng().gen()).collect();
    BigInt::from_bytes_be(&bytes)
}

#[test]
fn add_then_subtract_is_identity() {
    for _ in 0..20 {
        let x = random_bigint(16);
        let y = random_bigint(16);
        assert_eq!(x.add(&y).sub(&y), x);
        assert_eq!(x.sub(&y).add(&y), x);
    }
}

#[test]
fn multiplication_commutes() {
    for _ in 0..20 {
        let x = random_bigint(8);
        let y = random_bigint(8);
        assert_eq!(x.mul(&y), y.mul(&x));
    }
}

#[test]
fn byte_round_trip_for_nonzero_leading_byte() {
    for _ in 0..20 {
        let mut bytes: Vec<u8> = (0..24).map(|_| rand::thread_rng().gen()).collect();
        bytes[0] |= 1; // force a nonzero leading byte so the round-trip is exact
        assert_eq!(BigInt::from_bytes_be(&bytes).to_bytes_be(), bytes);
    }
}

#[test]
fn mod_pow_matches_repeated_squaring_reference() {
    let modulus = random_bigint(4).add(&BigInt::from(3u64));
    for _ in 0..10 {
        let base = random_bigint(4).div_rem(&modulus).1;
        let exponent = random_bigint(1);
        let got = base.mod_pow(&exponent, &modulus);

        let mut expected = BigInt::one();
        let mut i = BigInt::zero();
        while i.compare(&exponent) == std::cmp::Ordering::Less {
            expected = expected.mul(&base).div_rem(&modulus).1;
            i = i.add(&BigInt::one());
        }
        assert_eq!(got, expected);
    }
}

#[test]
fn mod_inverse_of_coprime_pair_satisfies_product_identity() {
    let modulus = BigInt::from(1_000_000_007u64);
    for _ in 0..20 {
        let x = random_bigint(4).div_rem(&modulus).1;
        if x.is_zero() {
            continue;
        }
        if let Ok(inv) = x.mod_inverse(&modulus) {
            assert_eq!(x.mul(&inv).div_rem(&modulus).1, BigInt::one());
        }
    }
}
