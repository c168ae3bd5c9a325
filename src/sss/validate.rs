//! Structural and range checks on raw share buffers.

use num_bigint::BigUint;

use crate::field::{bytes::ELEMENT_BYTES, PRIME};

/// Checks whether a raw buffer is a well-formed share.
///
/// Requirements:
/// - length is a multiple of 64 (one `x || y` pair per secret chunk);
/// - every 32-byte component, x and y alike, parses strictly below the
///   field modulus.
///
/// Any violation invalidates the whole share; combination must then fail
/// rather than proceed with truncated or reduced values.
pub fn is_valid(buffer: &[u8]) -> bool {
    if buffer.len() % (2 * ELEMENT_BYTES) != 0 {
        return false;
    }
    buffer
        .chunks_exact(ELEMENT_BYTES)
        .all(|component| BigUint::from_bytes_be(component) < *PRIME)
}
