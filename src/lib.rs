//! Arbitrary-precision signed integer arithmetic for cryptographic
//! primitives (RSA-shaped workloads): the limb-level kernel, schoolbook
//! multiplication and squaring, long division, base conversion, and the
//! sliding-window `mod_pow` orchestrator with its four pluggable reducers
//! (classic, power-of-two, Barrett, Montgomery).
//!
//! Not constant-time; not hardened against side channels. Callers that
//! need that must use a dedicated primitive.

mod bigint;
mod error;

pub use {
    bigint::{reduce, BigInt, ReduceMode},
    error::BigIntError,
};
