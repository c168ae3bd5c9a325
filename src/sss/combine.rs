//! Secret reconstruction via Lagrange interpolation at x = 0.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{share::Share, SssError};
use crate::field::{self, bytes};

/// Reconstructs the secret from raw share buffers.
///
/// Every buffer is validated and parsed before any arithmetic; all shares
/// must agree on chunk count. Each chunk is interpolated independently:
///
/// secret[j] = sum_i  y_i * prod_{k != i} (0 - x_k) / (x_i - x_k)   (mod p)
///
/// Correct reconstruction needs at least the split's `minimum` distinct
/// shares. Fewer yields a deterministically wrong secret, not an error; a
/// superset of `minimum` interpolates to the same polynomial and is
/// harmless.
///
/// # Errors
/// * `EmptyShareSet` if no buffers are given.
/// * `InvalidShare` if any buffer fails validation.
/// * `InconsistentShareSet` if buffers disagree on chunk count.
pub fn combine_secret(shares: &[Vec<u8>]) -> Result<Vec<u8>, SssError> {
    if shares.is_empty() {
        return Err(SssError::EmptyShareSet);
    }

    let parsed: Vec<Share> = shares
        .iter()
        .map(|buffer| Share::from_bytes(buffer))
        .collect::<Result<_, _>>()?;

    let chunk_count = parsed[0].chunk_count();
    if parsed.iter().any(|share| share.chunk_count() != chunk_count) {
        return Err(SssError::InconsistentShareSet);
    }
    log::debug!("combining {} shares of {chunk_count} chunk(s)", parsed.len());

    let zero = BigUint::zero();
    let mut elements = Vec::with_capacity(chunk_count);
    for j in 0..chunk_count {
        let mut sum = BigUint::zero();
        for (i, share) in parsed.iter().enumerate() {
            let origin = &share.points[j];

            // Basis polynomial at x = 0, accumulated as separate numerator
            // and denominator products.
            let mut numerator = BigUint::one();
            let mut denominator = BigUint::one();
            for (k, other) in parsed.iter().enumerate() {
                if k == i {
                    continue;
                }
                let current = &other.points[j].x;
                numerator = field::mul(&numerator, &field::sub(&zero, current));
                denominator = field::mul(&denominator, &field::sub(&origin.x, current));
            }

            let term = field::mul(
                &field::mul(&origin.y, &numerator),
                &field::inverse(&denominator),
            );
            sum = field::add(&sum, &term);
        }
        elements.push(sum);
    }

    Ok(bytes::decode_secret(&elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sss::split::split_secret;
    use rand::seq::SliceRandom;

    fn random_secret(len: usize) -> Vec<u8> {
        // High bit of each chunk cleared so every chunk fits the field.
        let mut secret: Vec<u8> = (0..len).map(|_| rand::random()).collect();
        for chunk_start in (0..len).step_by(32) {
            secret[chunk_start] &= 0x7F;
        }
        secret
    }

    #[test]
    fn test_round_trip_with_minimum_subset() {
        let mut rng = rand::thread_rng();
        let secret = random_secret(64);
        let shares = split_secret(3, 5, &secret, &mut rng).unwrap();

        let mut subset = shares.clone();
        subset.shuffle(&mut rng);
        subset.truncate(3);
        assert_eq!(combine_secret(&subset).unwrap(), secret);
    }

    #[test]
    fn test_superset_yields_identical_secret() {
        let mut rng = rand::thread_rng();
        let secret = random_secret(32);
        let shares = split_secret(2, 6, &secret, &mut rng).unwrap();

        let from_minimum = combine_secret(&shares[..2]).unwrap();
        let from_all = combine_secret(&shares).unwrap();
        assert_eq!(from_minimum, secret);
        assert_eq!(from_all, from_minimum);
    }

    #[test]
    fn test_below_threshold_does_not_reconstruct() {
        let mut rng = rand::thread_rng();
        let secret = random_secret(32);
        let shares = split_secret(3, 5, &secret, &mut rng).unwrap();

        // Structural sanity, not a security proof: two of three-minimum
        // shares interpolate to some wrong value.
        let wrong = combine_secret(&shares[..2]).unwrap();
        assert_ne!(wrong, secret);
    }

    #[test]
    fn test_round_trip_across_thresholds() {
        let mut rng = rand::thread_rng();
        let secret = random_secret(96);
        for (minimum, shares) in [(1, 1), (1, 4), (2, 3), (4, 4), (5, 9)] {
            let buffers = split_secret(minimum, shares, &secret, &mut rng).unwrap();
            let recovered = combine_secret(&buffers[..minimum]).unwrap();
            assert_eq!(recovered, secret, "minimum={minimum} shares={shares}");
        }
    }

    #[test]
    fn test_rejects_empty_share_set() {
        assert_eq!(combine_secret(&[]), Err(SssError::EmptyShareSet));
    }

    #[test]
    fn test_rejects_malformed_share() {
        let mut rng = rand::thread_rng();
        let secret = random_secret(32);
        let mut shares = split_secret(2, 3, &secret, &mut rng).unwrap();
        shares[1].truncate(63);
        assert_eq!(combine_secret(&shares), Err(SssError::InvalidShare));
    }

    #[test]
    fn test_rejects_mismatched_chunk_counts() {
        let mut rng = rand::thread_rng();
        let one_chunk = split_secret(2, 2, &random_secret(32), &mut rng).unwrap();
        let two_chunks = split_secret(2, 2, &random_secret(64), &mut rng).unwrap();

        let mixed = vec![one_chunk[0].clone(), two_chunks[0].clone()];
        assert_eq!(combine_secret(&mixed), Err(SssError::InconsistentShareSet));
    }
}
