//! Textual share representation.
//!
//! Share buffers are opaque bytes; at the outer boundary each one is
//! rendered independently as URL-safe, padding-free base64. The transform
//! is a thin wrapper: it never inspects share contents, and decoding
//! failures are reported before any validation or arithmetic runs.

use rand::{CryptoRng, Rng};

use crate::sss::{combine::combine_secret, split::split_secret, SssError};

/// Splits `secret` and returns each share as a URL-safe base64 string.
///
/// See [`split_secret`] for argument semantics and errors.
pub fn split_to_strings<R: Rng + CryptoRng + ?Sized>(
    minimum: usize,
    shares: usize,
    secret: &[u8],
    rng: &mut R,
) -> Result<Vec<String>, SssError> {
    let buffers = split_secret(minimum, shares, secret, rng)?;
    Ok(buffers
        .iter()
        .map(|buffer| base64::encode_config(buffer, base64::URL_SAFE_NO_PAD))
        .collect())
}

/// Decodes textual shares and reconstructs the secret.
///
/// # Errors
/// * `InvalidShareEncoding` if any string is not valid URL-safe base64.
/// * Everything [`combine_secret`] reports.
pub fn combine_from_strings(shares: &[String]) -> Result<Vec<u8>, SssError> {
    let mut buffers = Vec::with_capacity(shares.len());
    for share in shares {
        let buffer = base64::decode_config(share, base64::URL_SAFE_NO_PAD)
            .map_err(|_| SssError::InvalidShareEncoding)?;
        buffers.push(buffer);
    }
    combine_secret(&buffers)
}
