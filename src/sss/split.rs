//! Secret splitting.
//!
//! One polynomial of degree `minimum - 1` per 32-byte secret chunk, its
//! constant term the chunk value. Each share gets one fresh x-coordinate,
//! reused across every chunk's polynomial, and carries the resulting
//! `(x, y)` points serialized 64 bytes per chunk.

use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

use super::{
    polynomial,
    scalar::ScalarPool,
    share::{Share, SharePoint},
    SssError,
};
use crate::field::bytes;

/// Splits `secret` into `shares` buffers, any `minimum` of which
/// reconstruct it.
///
/// # Arguments
/// * `minimum` - threshold number of shares required for reconstruction.
/// * `shares` - total number of shares to produce.
/// * `secret` - secret bytes; a final partial chunk is left zero-padded,
///   so callers whose secret length is not a multiple of 32 must track the
///   original length to truncate after reconstruction.
/// * `rng` - cryptographic randomness for coefficients and x-coordinates.
///
/// # Errors
/// * `InvalidThreshold` if `minimum` or `shares` is below 1, or
///   `minimum > shares`.
/// * `SecretOutOfField` if a 32-byte chunk does not fit below the modulus.
pub fn split_secret<R: Rng + CryptoRng + ?Sized>(
    minimum: usize,
    shares: usize,
    secret: &[u8],
    rng: &mut R,
) -> Result<Vec<Vec<u8>>, SssError> {
    if minimum < 1 || shares < 1 || minimum > shares {
        return Err(SssError::InvalidThreshold);
    }

    let chunks = bytes::encode_secret(secret).map_err(|_| SssError::SecretOutOfField)?;

    // One scalar pool per call: x-coordinates and coefficients drawn from it
    // are pairwise distinct, and 0 stays reserved for the secret itself.
    let mut pool = ScalarPool::new();
    let polynomials: Vec<Vec<BigUint>> = chunks
        .into_iter()
        .map(|chunk| polynomial::random(chunk, minimum - 1, &mut pool, rng))
        .collect();

    let mut buffers = Vec::with_capacity(shares);
    for i in 0..shares {
        let x = pool.draw(rng);
        let mut points = Vec::with_capacity(polynomials.len());
        for (j, coeffs) in polynomials.iter().enumerate() {
            let y = polynomial::evaluate(coeffs, &x);
            log::debug!(
                "share {i} chunk {j}: x={} ({}B) y={} ({}B)",
                hex::encode(x.to_bytes_be()),
                x.to_bytes_be().len(),
                hex::encode(y.to_bytes_be()),
                y.to_bytes_be().len(),
            );
            points.push(SharePoint { x: x.clone(), y });
        }
        let buffer = Share { points }.to_bytes();
        log::trace!("share {i} buffer is {}B", buffer.len());
        buffers.push(buffer);
    }

    Ok(buffers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_minimum_above_share_count() {
        let mut rng = rand::thread_rng();
        assert_eq!(
            split_secret(5, 3, &[0u8; 32], &mut rng),
            Err(SssError::InvalidThreshold)
        );
    }

    #[test]
    fn test_rejects_zero_arguments() {
        let mut rng = rand::thread_rng();
        assert_eq!(
            split_secret(0, 3, &[0u8; 32], &mut rng),
            Err(SssError::InvalidThreshold)
        );
        assert_eq!(
            split_secret(1, 0, &[0u8; 32], &mut rng),
            Err(SssError::InvalidThreshold)
        );
        assert_eq!(
            split_secret(0, 0, &[0u8; 32], &mut rng),
            Err(SssError::InvalidThreshold)
        );
    }

    #[test]
    fn test_rejects_out_of_field_secret() {
        let mut rng = rand::thread_rng();
        assert_eq!(
            split_secret(2, 3, &[0xFF; 32], &mut rng),
            Err(SssError::SecretOutOfField)
        );
    }

    #[test]
    fn test_zero_secret_produces_distinct_nonzero_x() {
        let mut rng = rand::thread_rng();
        let buffers = split_secret(3, 5, &[0u8; 32], &mut rng).unwrap();
        assert_eq!(buffers.len(), 5);

        let mut xs = HashSet::new();
        for buffer in &buffers {
            assert_eq!(buffer.len(), 64);
            let x = &buffer[..32];
            assert_ne!(x, &[0u8; 32][..], "x = 0 is reserved for the secret");
            assert!(xs.insert(x.to_vec()), "x-coordinates must be distinct");
        }
    }

    #[test]
    fn test_share_reuses_one_x_across_chunks() {
        let mut rng = rand::thread_rng();
        let buffers = split_secret(2, 2, &[7u8; 96], &mut rng).unwrap();
        for buffer in &buffers {
            assert_eq!(buffer.len(), 3 * 64);
            let first_x = &buffer[..32];
            assert_eq!(&buffer[64..96], first_x);
            assert_eq!(&buffer[128..160], first_x);
        }
    }

    #[test]
    fn test_minimum_one_shares_carry_secret_directly() {
        // Degree-0 polynomials: y is the chunk itself for every x.
        let mut rng = rand::thread_rng();
        let secret = [0x5Au8; 32];
        let buffers = split_secret(1, 4, &secret, &mut rng).unwrap();
        for buffer in &buffers {
            assert_eq!(&buffer[32..64], &secret);
        }
    }
}
