//! Error type for field and point decoding.

use thiserror::Error;

/// Errors returned when decoding field elements, scalars, or points from
/// their byte / hex representations. Arithmetic itself is total and never
/// returns these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// The encoding does not have the expected length.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The encoded value is not a canonical field element: either one of the
    /// top two bits of the final byte is set, or the 256-bit value is not
    /// strictly below the field modulus.
    #[error("value is not a canonical field element")]
    NonCanonical,

    /// The hex string could not be decoded.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
}
