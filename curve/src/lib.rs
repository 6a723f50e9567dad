//! Elliptic curve and field arithmetic for the Pallas signing curve.
//!
//! This crate provides the two 255-bit prime fields (the base field `Fp` and
//! the scalar field `Fq`, both held in 4x64-limb Montgomery form), affine and
//! Jacobian-projective curve points with the full group law, scalar
//! multiplication, and the byte/hex codecs used at the serialization
//! boundary. The curve is y^2 = x^3 + 5 over Fp with a prime group order
//! equal to the Fq modulus and cofactor 1.

mod affine;
mod arith;
mod error;
mod fp;
mod fq;
mod group;
mod projective;
mod random;

pub use affine::{Affine, Compressed};
pub use error::CurveError;
pub use fp::Fp;
pub use fq::Fq;
pub use group::{Group, ScalarBits};
pub use projective::Projective;
pub use random::RandomField;

