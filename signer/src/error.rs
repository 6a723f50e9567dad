//! Error types for the signer.

use curve::CurveError;
use thiserror::Error;

/// Errors that can occur while building hash inputs, decoding key material,
/// or producing signatures.
///
/// Signature *verification* failure is not an error: `verify` is a boolean
/// predicate and returns `false` for any mismatch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignerError {
    /// A random-oracle input buffer overflowed its fixed capacity. This
    /// indicates a schema/capacity mismatch in the caller, surfaced as a
    /// recoverable error rather than an abort.
    #[error("random-oracle input {kind} capacity exceeded ({capacity})")]
    CapacityExceeded {
        kind: &'static str,
        capacity: usize,
    },

    /// The secret key is zero, which has no valid public key.
    #[error("secret key must be non-zero")]
    ZeroSecretKey,

    /// A memo longer than the fixed 32-byte schema slot.
    #[error("memo too long: {len} bytes, limit {limit}")]
    MemoTooLong { len: usize, limit: usize },

    /// Every deterministic nonce candidate produced zero or the identity
    /// point. Not reachable for real key material.
    #[error("exhausted nonce derivation attempts")]
    NonceExhausted,

    /// A field, scalar, or key failed to decode.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
