//! Construction from and conversion to base 2, 10, 16, and 256.
//!
//! Base 2 and base 16 are expressed directly as big-endian byte packing
//! rather than a textual regroup-into-nibbles pass, which avoids an
//! unnecessary hex-string intermediate while producing the same value for
//! the same digit string. Base 10 keeps nine-decimal-digit chunking, since
//! `10^9` already fits a single limb at this limb width and the chunking
//! itself — not the width of the multiplier — is the part of
//! the contract worth preserving (it bounds how large an accumulator
//! multiply/add pair has to run per digit group).

use super::{limb::normalize, BigInt};

const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

impl BigInt {
    /// Construct from a big-endian byte string (base 256). The empty byte
    /// string is zero.
    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> BigInt {
        let mut limbs = Vec::with_capacity(bytes.len() / 8 + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(8);
            let chunk = &bytes[start..end];
            let mut buf = [0u8; 8];
            buf[8 - chunk.len()..].copy_from_slice(chunk);
            limbs.push(u64::from_be_bytes(buf));
            end = start;
        }
        normalize(&mut limbs);
        BigInt { limbs, negative: false }
    }

    /// Big-endian minimal byte string; the empty string for zero.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let mut bytes = Vec::with_capacity(self.limbs.len() * 8);
        for &limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
        bytes[first_nonzero..].to_vec()
    }

    /// Construct from a textual representation in the given radix. Only
    /// radix 2, 10, and 16 are recognized; any other radix silently yields
    /// zero, matching the documented external contract.
    #[must_use]
    pub fn from_str_radix(s: &str, radix: u32) -> BigInt {
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let value = match radix {
            16 => Self::from_bytes_be(&hex_to_bytes(s)),
            2 => Self::from_bytes_be(&binary_to_bytes(s)),
            10 => Self::from_decimal_digits(s),
            _ => return BigInt::zero(),
        };

        if negative { value.negate() } else { value }
    }

    fn from_decimal_digits(s: &str) -> BigInt {
        let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return BigInt::zero();
        }
        let pad = (DECIMAL_CHUNK_DIGITS - digits.len() % DECIMAL_CHUNK_DIGITS) % DECIMAL_CHUNK_DIGITS;
        let padded: String = "0".repeat(pad) + &digits;

        let chunk_mult = BigInt::from(DECIMAL_CHUNK as u64);
        let mut acc = BigInt::zero();
        for chunk in padded.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let chunk_str = std::str::from_utf8(chunk).unwrap();
            let chunk_value: u32 = chunk_str.parse().unwrap();
            acc = acc.mul(&chunk_mult).add(&BigInt::from(chunk_value as u64));
        }
        acc
    }
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    let digits: String = s.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    let padded = if digits.len() % 2 == 1 { format!("0{digits}") } else { digits };
    (0..padded.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&padded[i..i + 2], 16).unwrap())
        .collect()
}

fn binary_to_bytes(s: &str) -> Vec<u8> {
    let digits: String = s.chars().filter(|c| *c == '0' || *c == '1').collect();
    let pad = (8 - digits.len() % 8) % 8;
    let padded: String = "0".repeat(pad) + &digits;
    padded
        .as_bytes()
        .chunks(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &c| (acc << 1) | (c - b'0')))
        .collect()
}

impl std::str::FromStr for BigInt {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BigInt::from_str_radix(s, 10))
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        if n == 0 {
            BigInt::zero()
        } else {
            BigInt { limbs: vec![n], negative: false }
        }
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        let magnitude = BigInt::from(n.unsigned_abs());
        if n < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }
}

impl std::fmt::Display for BigInt {
    /// Base-10 rendering: repeatedly divide by `10^9`, prepending each
    /// nine-digit (zero-padded) remainder, then strip the leading zeros
    /// that padding introduced.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let chunk_mult = BigInt::from(DECIMAL_CHUNK as u64);
        let mut magnitude = self.abs();
        let mut groups = Vec::new();
        while !magnitude.is_zero() {
            let (q, r) = magnitude.div_rem(&chunk_mult);
            let remainder: u64 = r.limbs.first().copied().unwrap_or(0);
            groups.push(remainder as u32);
            magnitude = q;
        }

        if self.negative {
            write!(f, "-")?;
        }
        let mut groups = groups.into_iter().rev();
        write!(f, "{}", groups.next().unwrap())?;
        for group in groups {
            write!(f, "{group:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_round_trip_for_nonzero_leading_byte() {
        let bytes = [0x12, 0x34, 0x56, 0x78, 0x9a];
        assert_eq!(BigInt::from_bytes_be(&bytes).to_bytes_be(), bytes);
    }

    #[test]
    fn empty_bytes_is_zero() {
        assert_eq!(BigInt::from_bytes_be(&[]), BigInt::zero());
        assert_eq!(BigInt::zero().to_bytes_be(), Vec::<u8>::new());
    }

    #[test]
    fn decimal_round_trip() {
        for s in ["0", "10", "20", "-10", "123456789012345678901234567890"] {
            assert_eq!(BigInt::from_str_radix(s, 10).to_string(), s);
        }
    }

    #[test]
    fn hex_matches_decimal() {
        assert_eq!(BigInt::from_str_radix("0x32", 16).to_string(), "50");
        assert_eq!(BigInt::from_str_radix("-0x32", 16).to_string(), "-50");
    }

    #[test]
    fn binary_agrees_with_hex() {
        let from_bin = BigInt::from_str_radix("101010", 2);
        let from_hex = BigInt::from_str_radix("2a", 16);
        assert_eq!(from_bin, from_hex);
    }

    #[test]
    fn unknown_radix_yields_zero() {
        assert_eq!(BigInt::from_str_radix("123", 7), BigInt::zero());
    }
}
