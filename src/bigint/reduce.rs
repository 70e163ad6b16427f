//! Pluggable modular reduction strategies.
//!
//! Each reducer owns whatever it needs to precompute for its modulus —
//! Montgomery's `n0inv`, Barrett's `mu` — fixed at construction time, so
//! setup amortizes across the repeated reductions a single `mod_pow` call
//! makes against one modulus, with no shared mutable state and no
//! cross-thread hazard to document.

mod barrett;
mod classic;
mod montgomery;
mod pow2;

pub use barrett::Barrett;
pub use classic::Classic;
pub use montgomery::Montgomery;
pub use pow2::PowerOfTwo;

use super::BigInt;

/// A modular reduction strategy bound to one modulus.
pub trait Reducer {
    /// Reduce `x` into this reducer's canonical representative class.
    fn reduce(&self, x: &BigInt) -> BigInt;

    /// Lift `x` into the representation the reducer's `reduce` expects to
    /// be fed on every subsequent call. Identity for every strategy except
    /// Montgomery, which instead multiplies by the Montgomery radix.
    fn enter(&self, x: &BigInt) -> BigInt {
        self.reduce(x)
    }
}

/// The identity reducer used by the sliding-window exponentiator when no
/// modulus is in play; `reduce` and `enter` are both a plain clone.
pub struct Identity;

impl Reducer for Identity {
    fn reduce(&self, x: &BigInt) -> BigInt {
        x.clone()
    }
}
