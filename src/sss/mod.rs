//! Shamir's Secret Sharing: splitting, combination, validation.
//!
//! # Components
//! - `share`: the parsed form of a share and its 64-byte-per-point wire layout.
//! - `scalar`: random nonzero field elements with per-run uniqueness.
//! - `polynomial`: random polynomial construction and Horner evaluation.
//! - `split`: secret -> N share buffers.
//! - `combine`: share buffers -> secret, via Lagrange interpolation at x = 0.
//! - `validate`: structural and range checks on raw share buffers.
//!
//! All validation happens before any field arithmetic; the arithmetic itself
//! is total and never fails. One deliberate gap: combining fewer than the
//! configured minimum of shares produces a wrong secret, not an error. The
//! share format carries no threshold metadata, so insufficiency cannot be
//! detected here.

use core::fmt;

pub mod combine;
pub(crate) mod polynomial;
pub(crate) mod scalar;
pub mod share;
pub mod split;
pub mod validate;

/// Errors for secret splitting and combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SssError {
    /// `minimum` or `shares` below 1, or `minimum` greater than `shares`.
    InvalidThreshold,
    /// A textual share is not valid URL-safe base64.
    InvalidShareEncoding,
    /// A share buffer is malformed: length not a multiple of 64, or a
    /// 32-byte component outside `[0, p)`.
    InvalidShare,
    /// Shares disagree on the number of secret chunks.
    InconsistentShareSet,
    /// No shares were provided for combination.
    EmptyShareSet,
    /// A 32-byte secret chunk does not fit below the field modulus.
    SecretOutOfField,
}

impl fmt::Display for SssError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SssError::InvalidThreshold => "minimum and shares must satisfy 1 <= minimum <= shares",
            SssError::InvalidShareEncoding => "share is not valid URL-safe base64",
            SssError::InvalidShare => "share buffer is malformed or out of field range",
            SssError::InconsistentShareSet => "shares disagree on chunk count",
            SssError::EmptyShareSet => "no shares were provided",
            SssError::SecretOutOfField => "secret chunk does not fit below the field modulus",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for SssError {}
