//! Byte <-> field-element codec.
//!
//! A secret is partitioned into consecutive 32-byte chunks, each chunk read
//! as a big-endian integer. A short final chunk is the low-order bytes of
//! its element (implicit left zero-padding). Decoding always emits full
//! 32-byte chunks, so the output length is a multiple of 32: callers whose
//! secret length is not must track the original length externally to
//! truncate after reconstruction.

use core::fmt;

use num_bigint::BigUint;
use zeroize::Zeroizing;

use super::PRIME;

/// Serialized width of one field element, in bytes.
pub const ELEMENT_BYTES: usize = 32;

/// Errors raised while mapping bytes into the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A 32-byte chunk, read as an integer, is not below the field modulus.
    /// Possible because the prime sits slightly below 2^256.
    ChunkExceedsModulus,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::ChunkExceedsModulus => {
                write!(f, "secret chunk does not fit below the field modulus")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Splits a secret into field elements, one per 32-byte chunk.
///
/// Rejects any chunk whose integer value is `>= p`; arithmetic on such a
/// value would silently reduce it and corrupt the round trip.
pub fn encode_secret(secret: &[u8]) -> Result<Vec<BigUint>, CodecError> {
    let mut elements = Vec::with_capacity(secret.len().div_ceil(ELEMENT_BYTES));
    for chunk in secret.chunks(ELEMENT_BYTES) {
        let value = if chunk.len() == ELEMENT_BYTES {
            BigUint::from_bytes_be(chunk)
        } else {
            // Pad through a scratch buffer that is wiped on drop.
            let mut padded = Zeroizing::new([0u8; ELEMENT_BYTES]);
            padded[ELEMENT_BYTES - chunk.len()..].copy_from_slice(chunk);
            BigUint::from_bytes_be(&padded[..])
        };
        if value >= *PRIME {
            return Err(CodecError::ChunkExceedsModulus);
        }
        elements.push(value);
    }
    Ok(elements)
}

/// Reassembles field elements into bytes, 32 per element, chunk order kept.
pub fn decode_secret(elements: &[BigUint]) -> Vec<u8> {
    let mut out = Vec::with_capacity(elements.len() * ELEMENT_BYTES);
    for element in elements {
        out.extend_from_slice(&to_fixed_bytes(element));
    }
    out
}

/// Fixed-width big-endian encoding, left zero-padded to 32 bytes.
pub fn to_fixed_bytes(value: &BigUint) -> [u8; ELEMENT_BYTES] {
    let raw = value.to_bytes_be();
    let mut out = [0u8; ELEMENT_BYTES];
    out[ELEMENT_BYTES - raw.len()..].copy_from_slice(&raw);
    out
}
