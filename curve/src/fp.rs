//! Base field of the curve. p = 2^254 + 45560315531419706090280762371685220353
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::arith;
use crate::error::CurveError;

/// Base field element, the coordinate field of the curve.
/// Represented in Montgomery form with [u64; 4].
#[derive(Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fp {
    /// Montgomery form: value * R mod p, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus: p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001
const MODULUS: [u64; 4] = [
    0x992d30ed00000001,
    0x224698fc094cf91b,
    0x0000000000000000,
    0x4000000000000000,
];

// R = 2^256 mod p (Montgomery parameter)
const R: [u64; 4] = [
    0x34786d38fffffffd,
    0x992c350be41914ad,
    0xffffffffffffffff,
    0x3fffffffffffffff,
];

// R^2 = 2^512 mod p (for Montgomery conversion)
const R2: [u64; 4] = [
    0x8c78ecb30000000f,
    0xd7d30dbd8b0de0e7,
    0x7797a99bc3c95d18,
    0x096d41af7b9cb714,
];

// -p^{-1} mod 2^64 (Montgomery parameter)
const INV: u64 = 0x992d30ecffffffff;

impl Fp {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Fp { limbs: [0, 0, 0, 0] };

    /// One element (in Montgomery form: R mod p)
    pub const ONE: Self = Fp { limbs: R };

    /// Number of bytes in the canonical encoding.
    pub const NUM_BYTES: usize = 32;

    /// Create a field element from a u64 value.
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::from_raw([val, 0, 0, 0])
    }

    /// Wrap limbs that are already in canonical Montgomery form.
    ///
    /// Used for compile-time constant tables (round keys, MDS matrices,
    /// curve constants). The caller must supply the Montgomery representative
    /// of a canonical value; no reduction is performed.
    #[inline]
    pub const fn from_montgomery_limbs(limbs: [u64; 4]) -> Self {
        Fp { limbs }
    }

    /// Convert from Montgomery form to the canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        // Multiply by 1 to get out of Montgomery form
        arith::mont_mul(&self.limbs, &[1, 0, 0, 0], &MODULUS, INV)
    }

    /// Build a field element from canonical little-endian limbs, rejecting
    /// values that are not strictly below the modulus.
    #[inline]
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if arith::is_canonical(&limbs, &MODULUS) {
            Some(Self::from_raw(limbs))
        } else {
            None
        }
    }

    #[inline]
    fn from_raw(limbs: [u64; 4]) -> Self {
        Fp {
            limbs: arith::mont_mul(&limbs, &R2, &MODULUS, INV),
        }
    }

    /// Check if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Parity of the canonical (non-Montgomery) representative.
    /// Used for point compression.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    /// Squaring.
    #[inline]
    pub fn square(&self) -> Self {
        Fp {
            limbs: arith::mont_mul(&self.limbs, &self.limbs, &MODULUS, INV),
        }
    }

    /// Exponentiation by a small public exponent, square-and-multiply from
    /// the most significant set bit. An exponent of zero yields one.
    pub fn pow(&self, e: u64) -> Self {
        if e == 0 {
            return Self::ONE;
        }
        let mut result = *self;
        let top = 63 - e.leading_zeros();
        for i in (0..top).rev() {
            result = result.square();
            if (e >> i) & 1 == 1 {
                result *= *self;
            }
        }
        result
    }

    /// Compute the multiplicative inverse using Fermat's little theorem.
    ///
    /// The inverse of zero is undefined; this returns zero for zero input,
    /// so callers that cannot rule out zero must use [`Fp::try_inverse`].
    pub fn inverse(&self) -> Self {
        // a^{p-2}
        let exp = arith::sub_mod(&MODULUS, &[2, 0, 0, 0], &MODULUS);
        if self.is_zero() {
            return Self::ZERO;
        }
        Fp {
            limbs: arith::pow_vartime(&self.limbs, &exp, &R, &MODULUS, INV),
        }
    }

    /// Checked inverse: `None` for the additive identity.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.inverse())
        }
    }

    /// Branch-free conditional move: `a` if `choice`, else `b`.
    #[inline]
    pub fn select(choice: bool, a: &Self, b: &Self) -> Self {
        Fp {
            limbs: arith::select(choice, &a.limbs, &b.limbs),
        }
    }

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut bytes = [0u8; 32];
        for (i, &limb) in canonical.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Decode from 32 little-endian bytes.
    ///
    /// Rejects encodings with either of the top two bits of the final byte
    /// set (the cheap canonical-range gate: values must be below 2^254) and
    /// encodings of values not strictly below the modulus.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != Self::NUM_BYTES {
            return Err(CurveError::InvalidLength {
                expected: Self::NUM_BYTES,
                actual: bytes.len(),
            });
        }
        if bytes[31] & 0xc0 != 0 {
            return Err(CurveError::NonCanonical);
        }
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut chunk = [0u8; 8];
            chunk.copy_from_slice(&bytes[i * 8..(i + 1) * 8]);
            *limb = u64::from_le_bytes(chunk);
        }
        Self::from_canonical_limbs(limbs).ok_or(CurveError::NonCanonical)
    }

    /// Canonical little-endian hex encoding (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from 64 little-endian hex characters.
    pub fn from_hex(s: &str) -> Result<Self, CurveError> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// The field modulus as an arbitrary-precision integer.
    pub fn order() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// The canonical representative as an arbitrary-precision integer.
    pub fn as_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_bytes())
    }
}

impl Distribution<Fp> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp {
        let mut bytes: [u8; 32] = rng.random();
        // Mask to 254 bits; everything below 2^254 is canonical.
        bytes[31] &= 0x3f;

        let limbs = [
            u64::from_le_bytes(bytes[0..8].try_into().unwrap()),
            u64::from_le_bytes(bytes[8..16].try_into().unwrap()),
            u64::from_le_bytes(bytes[16..24].try_into().unwrap()),
            u64::from_le_bytes(bytes[24..32].try_into().unwrap()),
        ];

        Fp::from_raw(limbs)
    }
}

// Arithmetic operations
impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fp {
            limbs: arith::add_mod(&self.limbs, &rhs.limbs, &MODULUS),
        }
    }
}

impl AddAssign for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fp {
            limbs: arith::sub_mod(&self.limbs, &rhs.limbs, &MODULUS),
        }
    }
}

impl SubAssign for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fp {
            limbs: arith::neg_mod(&self.limbs, &MODULUS),
        }
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fp {
            limbs: arith::mont_mul(&self.limbs, &rhs.limbs, &MODULUS, INV),
        }
    }
}

impl MulAssign for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Fp {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Fp {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Fp {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fp {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

// Display and Debug
impl Display for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for Fp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self)
    }
}

impl Hash for Fp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}
