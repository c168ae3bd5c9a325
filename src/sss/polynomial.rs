//! Polynomial construction and evaluation over the prime field.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, Rng};

use super::scalar::ScalarPool;
use crate::field;

/// Builds a random polynomial hiding `constant_term`.
///
/// Coefficient 0 is the secret chunk; coefficients 1..=degree are fresh
/// scalars from the pool, so they are nonzero and unique across the run.
pub(crate) fn random<R: Rng + CryptoRng + ?Sized>(
    constant_term: BigUint,
    degree: usize,
    pool: &mut ScalarPool,
    rng: &mut R,
) -> Vec<BigUint> {
    let mut coeffs = Vec::with_capacity(degree + 1);
    coeffs.push(constant_term);
    for _ in 0..degree {
        coeffs.push(pool.draw(rng));
    }
    coeffs
}

/// Evaluates a polynomial at `x` using Horner's method.
///
/// f(x) = c[0] + c[1]*x + ... + c[d]*x^d, all arithmetic mod p.
pub(crate) fn evaluate(coeffs: &[BigUint], x: &BigUint) -> BigUint {
    let Some(top) = coeffs.last() else {
        return BigUint::zero();
    };
    let mut acc = top.clone();
    for coeff in coeffs.iter().rev().skip(1) {
        acc = field::add(&field::mul(&acc, x), coeff);
    }
    acc
}
