//! Shamir's Secret Sharing over a fixed 256-bit prime field.
//!
//! A secret is split into `shares` fragments such that any `minimum` of them
//! reconstruct it exactly, while fewer reveal nothing. Secrets are encoded as
//! field elements in 32-byte chunks, hidden behind random polynomials of
//! degree `minimum - 1`, and recovered with Lagrange interpolation at x = 0.
//!
//! # Components
//! - `field`: modular arithmetic and the byte <-> field-element codec.
//! - `sss`: polynomial construction, splitting, combination, validation.
//! - `encoding`: URL-safe base64 textual representation of share buffers.
//!
//! Shares are opaque byte buffers: one `(x, y)` point per 32-byte secret
//! chunk, 64 bytes per point. Reconstruction with fewer than `minimum`
//! shares yields a deterministically wrong secret, not an error; callers
//! must track the threshold themselves.

pub mod encoding;
pub mod field;
pub mod sss;

pub use encoding::{combine_from_strings, split_to_strings};
pub use sss::{combine::combine_secret, split::split_secret, validate::is_valid, SssError};
