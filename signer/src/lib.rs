//! Schnorr signer for transactions over the Pallas curve.
//!
//! This library implements the hardware-signer protocol stack:
//! - Poseidon sponge hashing over the base field, in two fixed variants
//! - A random-oracle input builder producing bit-exact wire pre-images
//! - Deterministic Schnorr signatures with an even-y ephemeral point
//! - Key handling with base58-check addresses
//!
//! # Example
//!
//! ```
//! use signer::{HashVariant, Keypair, NetworkId, Transaction, sign, verify};
//!
//! let sender = Keypair::from_seed(b"example wallet", 0).unwrap();
//! let receiver = Keypair::from_seed(b"example wallet", 1).unwrap();
//!
//! let tx = Transaction::payment(
//!     sender.public().compress(),
//!     receiver.public().compress(),
//!     1_000_000_000, // amount
//!     10_000_000,    // fee
//!     0,             // nonce
//! )
//! .memo("rent")
//! .unwrap();
//!
//! let sig = sign(&sender, &tx, NetworkId::Testnet, HashVariant::Legacy).unwrap();
//! assert!(verify(&sig, sender.public(), &tx, NetworkId::Testnet, HashVariant::Legacy));
//! ```
//!
//! Signatures are deterministic: the ephemeral scalar is derived by hashing
//! the secret key with the message and network, never from randomness, so
//! the same inputs always reproduce the same signature.

mod error;
mod keys;
mod params;
mod poseidon;
mod roinput;
mod signature;
mod transaction;

#[cfg(test)]
mod tests;

pub use error::SignerError;
pub use keys::{address, Keypair};
pub use poseidon::{hash_input, HashVariant, NetworkId, Sponge};
pub use roinput::ROInput;
pub use signature::{sign, verify, Signature};
pub use transaction::{Transaction, MEMO_BYTES, TX_BIT_COUNT, TX_FIELD_COUNT};
