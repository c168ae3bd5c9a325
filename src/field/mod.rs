//! Prime-field arithmetic.
//!
//! All secret-sharing math happens in the field of integers modulo a fixed
//! 256-bit prime. Elements are `BigUint` values normalized into `[0, p)`;
//! the operations here compute and reduce, so results are always normalized.
//!
//! # Design
//! - **Immutable modulus**: the prime is a process-wide constant, initialized
//!   once and never mutated, so unsynchronized concurrent reads are safe.
//! - **Total operations**: add/sub/mul/inverse never fail on normalized
//!   inputs. `inverse(0)` is undefined and never reached: interpolation
//!   denominators are differences of distinct nonzero x-coordinates.

use lazy_static::lazy_static;
use num_bigint::BigUint;

pub mod bytes;

lazy_static! {
    /// The field modulus: a fixed 256-bit prime, slightly below 2^256.
    pub static ref PRIME: BigUint = BigUint::parse_bytes(
        b"115792089237316195423570985008687907853269984665640564039457584007913129639747",
        10,
    )
    .expect("prime literal parses");
}

/// Modular addition: `(a + b) mod p`.
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*PRIME
}

/// Modular subtraction: `(a - b) mod p`.
///
/// `p` is added before reducing so the intermediate never goes negative;
/// inputs are expected normalized into `[0, p)`.
pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    ((a + &*PRIME) - b) % &*PRIME
}

/// Modular multiplication: `(a * b) mod p`.
pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*PRIME
}

/// Multiplicative inverse: the unique `b` with `a * b == 1 (mod p)`.
///
/// Computed as `a^(p-2) mod p` (Fermat's little theorem; `p` is prime).
/// Undefined for `a == 0`.
pub fn inverse(a: &BigUint) -> BigUint {
    a.modpow(&(&*PRIME - 2u32), &*PRIME)
}
