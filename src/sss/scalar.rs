//! Random nonzero field elements with per-run uniqueness.
//!
//! Splitting one secret draws many random scalars: the polynomial
//! coefficients and one x-coordinate per share. Duplicate x-coordinates
//! between shares would make Lagrange interpolation ill-defined, and 0 is
//! reserved as the secret's evaluation point, so every draw is checked
//! against a pool of values already handed out. The pool is local to one
//! split call; nothing persists across invocations.

use std::collections::HashSet;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};

use crate::field::PRIME;

/// Tracks every scalar assigned during one split run.
///
/// Coefficients and x-coordinates share one pool: only x-uniqueness is
/// required for correctness, but treating the whole number space as one
/// pool keeps the bookkeeping simple.
pub(crate) struct ScalarPool {
    used: HashSet<BigUint>,
}

impl ScalarPool {
    /// Creates a pool with 0 pre-reserved.
    pub(crate) fn new() -> Self {
        let mut used = HashSet::new();
        used.insert(BigUint::zero());
        Self { used }
    }

    /// Draws a uniform random element of `[1, p-1]` not yet in the pool.
    ///
    /// Rejection-retries on collision; with a 256-bit field and at most a
    /// few thousand prior draws, a retry is astronomically rare.
    pub(crate) fn draw<R: Rng + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> BigUint {
        let one = BigUint::one();
        loop {
            let candidate = rng.gen_biguint_range(&one, &*PRIME);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
