//! Scalar field of the curve, q = 2^254 + 45560315531506369815346746415080538113.
//!
//! q is the prime order of the curve group; scalars, private keys, and the
//! signature response all live here. Same Montgomery-form representation as
//! [`Fp`](crate::Fp), with its own modulus and constants; conversion between
//! the two fields only happens through canonical integer limbs.

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
use crate::group::ScalarBits;
use crate::Fp;

/// Scalar field element.
/// Represented in Montgomery form with [u64; 4].
#[derive(Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fq {
    /// Montgomery form: value * R mod q, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus: q = 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001
const MODULUS: [u64; 4] = [
    0x8c46eb2100000001,
    0x224698fc0994a8dd,
    0x0000000000000000,
    0x4000000000000000,
];

// R = 2^256 mod q (Montgomery parameter)
const R: [u64; 4] = [
    0x5b2b3e9cfffffffd,
    0x992c350be3420567,
    0xffffffffffffffff,
    0x3fffffffffffffff,
];

// R^2 = 2^512 mod q (for Montgomery conversion)
const R2: [u64; 4] = [
    0xfc9678ff0000000f,
    0x67bb433d891a16e3,
    0x7fae231004ccf590,
    0x096d41af7ccfdaa9,
];

// -q^{-1} mod 2^64 (Montgomery parameter)
const INV: u64 = 0x8c46eb20ffffffff;

impl Fq {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = Fq { limbs: [0, 0, 0, 0] };

    /// One element (in Montgomery form: R mod q)
    pub const ONE: Self = Fq { limbs: R };

    /// Number of bytes in the canonical encoding.
    pub const NUM_BYTES: usize = 32;

    /// Number of significant bits in a scalar.
    pub const NUM_BITS: usize = 255;

    /// Create a scalar from a u64 value.
    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Self::from_raw([val, 0, 0, 0])
    }

    /// Wrap limbs that are already in canonical Montgomery form.
    #[inline]
    pub const fn from_montgomery_limbs(limbs: [u64; 4]) -> Self {
        Fq { limbs }
    }

    /// Convert from Montgomery form to the canonical little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        arith::mont_mul(&self.limbs, &[1, 0, 0, 0], &MODULUS, INV)
    }

    /// Build a scalar from canonical little-endian limbs, rejecting values
    /// that are not strictly below the group order.
    #[inline]
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        if arith::is_canonical(&limbs, &MODULUS) {
            Some(Self::from_raw(limbs))
        } else {
            None
        }
    }

    /// Reinterpret a base-field element as a scalar through its canonical
    /// integer form. Total: p < q, so every base-field value is a canonical
    /// scalar. This is how sponge digests become challenge scalars.
    #[inline]
    pub fn from_base_field(f: &Fp) -> Self {
        Self::from_raw(f.to_canonical_limbs())
    }

    #[inline]
    fn from_raw(limbs: [u64; 4]) -> Self {
        Fq {
            limbs: arith::mont_mul(&limbs, &R2, &MODULUS, INV),
        }
    }

    /// Check if this scalar is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Parity of the canonical (non-Montgomery) representative.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    /// Squaring.
    #[inline]
    pub fn square(&self) -> Self {
        Fq {
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
    /// Returns zero for zero input; see [`Fq::try_inverse`].
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let exp = arith::sub_mod(&MODULUS, &[2, 0, 0, 0], &MODULUS);
        Fq {
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

    /// Canonical 32-byte little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut bytes = [0u8; 32];
        for (i, &limb) in canonical.iter().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Decode from 32 little-endian bytes, with the same canonical-range
    /// gate as the base field (top two bits of the final byte must be clear).
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

    /// Canonical 32-byte big-endian encoding. Private key material uses this
    /// byte order, unlike the little-endian field encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Decode from 32 big-endian bytes (the private-key convention).
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != Self::NUM_BYTES {
            return Err(CurveError::InvalidLength {
                expected: Self::NUM_BYTES,
                actual: bytes.len(),
            });
        }
        let mut le = [0u8; 32];
        for (i, &b) in bytes.iter().enumerate() {
            le[31 - i] = b;
        }
        Self::from_bytes(&le)
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

    /// The group order as an arbitrary-precision integer.
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

impl ScalarBits for Fq {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

impl Distribution<Fq> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fq {
        let mut bytes: [u8; 32] = rng.random();
        // Mask to 254 bits; everything below 2^254 is canonical.
        bytes[31] &= 0x3f;

        let limbs = [
            u64::from_le_bytes(bytes[0..8].try_into().unwrap()),
            u64::from_le_bytes(bytes[8..16].try_into().unwrap()),
            u64::from_le_bytes(bytes[16..24].try_into().unwrap()),
            u64::from_le_bytes(bytes[24..32].try_into().unwrap()),
        ];

        Fq::from_raw(limbs)
    }
}

// Arithmetic operations
impl Add for Fq {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Fq {
            limbs: arith::add_mod(&self.limbs, &rhs.limbs, &MODULUS),
        }
    }
}

impl AddAssign for Fq {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fq {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Fq {
            limbs: arith::sub_mod(&self.limbs, &rhs.limbs, &MODULUS),
        }
    }
}

impl SubAssign for Fq {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Fq {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Fq {
            limbs: arith::neg_mod(&self.limbs, &MODULUS),
        }
    }
}

impl Mul for Fq {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Fq {
            limbs: arith::mont_mul(&self.limbs, &rhs.limbs, &MODULUS, INV),
        }
    }
}

impl MulAssign for Fq {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Fq {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Fq {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Fq {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fq {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

// Display and Debug
impl Display for Fq {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for Fq {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fq({})", self)
    }
}

impl Hash for Fq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::RandomField;

    #[test]
    fn zero_one() {
        assert_eq!(Fq::ZERO + Fq::ZERO, Fq::ZERO);
        assert_eq!(Fq::ONE * Fq::ONE, Fq::ONE);
        assert_eq!(Fq::ZERO * Fq::ONE, Fq::ZERO);
    }

    #[test]
    fn small_arithmetic() {
        let a = Fq::from_u64(11);
        let b = Fq::from_u64(31);
        assert_eq!(a + b, Fq::from_u64(42));
        assert_eq!(b - a, Fq::from_u64(20));
        assert_eq!(a * b, Fq::from_u64(341));
    }

    #[test]
    fn the_two_moduli_differ() {
        assert_ne!(Fq::order(), Fp::order());
        // p < q: every base-field value reinterprets into the scalar field
        assert!(Fp::order() < Fq::order());
    }

    #[test]
    fn base_field_reinterpretation() {
        let f = Fp::from_u64(123456789);
        assert_eq!(Fq::from_base_field(&f), Fq::from_u64(123456789));

        // -1 in Fp is p - 1, which is a valid scalar below q
        let minus_one = -Fp::ONE;
        let as_scalar = Fq::from_base_field(&minus_one);
        assert_eq!(as_scalar.as_biguint(), Fp::order() - 1u32);
    }

    #[test]
    fn inverse_roundtrip() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..16 {
            let a = Fq::random(&mut rng);
            if !a.is_zero() {
                assert_eq!(a * a.inverse(), Fq::ONE);
            }
        }
        assert_eq!(Fq::ZERO.try_inverse(), None);
    }

    #[test]
    fn big_endian_roundtrip() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..16 {
            let a = Fq::random(&mut rng);
            let be = a.to_bytes_be();
            let mut le = a.to_bytes();
            le.reverse();
            assert_eq!(be, le);
            assert_eq!(Fq::from_bytes_be(&be).unwrap(), a);
        }
    }

    #[test]
    fn from_bytes_rejects_high_bits() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xc0;
        assert_eq!(Fq::from_bytes(&bytes), Err(CurveError::NonCanonical));
        // same gate on the big-endian side sits in the leading byte
        let mut be = [0u8; 32];
        be[0] = 0x40;
        assert_eq!(Fq::from_bytes_be(&be), Err(CurveError::NonCanonical));
    }

    #[test]
    fn scalar_bits_match_canonical_limbs() {
        let a = Fq::from_u64(0xffee_ddcc_bbaa_0099);
        assert_eq!(a.to_u64_limbs(), [0xffee_ddcc_bbaa_0099, 0, 0, 0]);
    }

    fn arb_fq() -> impl Strategy<Value = Fq> {
        any::<[u8; 32]>().prop_map(|mut bytes| {
            bytes[31] &= 0x3f;
            Fq::from_bytes(&bytes).unwrap()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_mul_commutes(a in arb_fq(), b in arb_fq()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn prop_add_assoc(a in arb_fq(), b in arb_fq(), c in arb_fq()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn prop_encode_roundtrip(a in arb_fq()) {
            prop_assert_eq!(Fq::from_bytes(&a.to_bytes()).unwrap(), a);
            prop_assert_eq!(Fq::from_hex(&a.to_hex()).unwrap(), a);
        }
    }
}
