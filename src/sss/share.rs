//! Parsed share representation and its wire layout.
//!
//! A share is an ordered sequence of `(x, y)` points, one per secret chunk.
//! On the wire each point is `x || y`, both fixed 32-byte big-endian, so a
//! share buffer is 64 bytes per chunk with chunk order preserved. The same
//! x-coordinate appears in every point of a freshly split share; the parsed
//! form keeps per-point coordinates because combination reads them per chunk.
//!
//! `Debug` redacts y-coordinates: x identifies a share, y is secret-bearing.

use core::fmt;

use num_bigint::BigUint;

use super::{validate, SssError};
use crate::field::bytes;

/// One interpolation point.
#[derive(Clone, PartialEq, Eq)]
pub struct SharePoint {
    pub x: BigUint,
    pub y: BigUint,
}

/// A parsed share: one point per secret chunk.
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    pub points: Vec<SharePoint>,
}

impl Share {
    /// Number of secret chunks this share covers.
    pub fn chunk_count(&self) -> usize {
        self.points.len()
    }

    /// Serializes to the 64-byte-per-point wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.points.len() * 2 * bytes::ELEMENT_BYTES);
        for point in &self.points {
            buf.extend_from_slice(&bytes::to_fixed_bytes(&point.x));
            buf.extend_from_slice(&bytes::to_fixed_bytes(&point.y));
        }
        buf
    }

    /// Parses a raw share buffer, validating structure and range first.
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, SssError> {
        if !validate::is_valid(buffer) {
            return Err(SssError::InvalidShare);
        }
        let points = buffer
            .chunks_exact(2 * bytes::ELEMENT_BYTES)
            .map(|pair| SharePoint {
                x: BigUint::from_bytes_be(&pair[..bytes::ELEMENT_BYTES]),
                y: BigUint::from_bytes_be(&pair[bytes::ELEMENT_BYTES..]),
            })
            .collect();
        Ok(Self { points })
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("chunks", &self.points.len())
            .field("points", &"***SENSITIVE***")
            .finish()
    }
}
