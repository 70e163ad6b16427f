//! Plain division reduction: the fallback strategy for an arbitrary odd or
//! even modulus with no special structure to exploit.

use super::{super::BigInt, Reducer};

pub struct Classic {
    modulus: BigInt,
}

impl Classic {
    pub fn new(modulus: BigInt) -> Self {
        Classic { modulus }
    }
}

impl Reducer for Classic {
    fn reduce(&self, x: &BigInt) -> BigInt {
        x.div_rem(&self.modulus).1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reduces_to_common_residue() {
        let m = Classic::new(BigInt::from(13u64));
        assert_eq!(m.reduce(&BigInt::from(27u64)), BigInt::from(1u64));
        assert_eq!(m.reduce(&BigInt::from(13u64)), BigInt::zero());
    }
}
