use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::affine::{Affine, B};
use crate::{Fp, Fq, Group};

/// Point in Jacobian projective coordinates (X : Y : Z), representing the
/// affine point (X/Z^2, Y/Z^3). Z = 0 encodes the identity.
///
/// Equality derived on this type is coordinate-exact: two different
/// Z-scalings of the same affine point compare unequal. Normalize through
/// [`Projective::to_affine`] before comparing points from different
/// computation paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projective {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

impl Projective {
    /// The identity element: any (X : Y : 0); (1 : 1 : 0) is used so the
    /// doubling formula stays well-defined on it.
    pub const IDENTITY: Self = Projective {
        x: Fp::ONE,
        y: Fp::ONE,
        z: Fp::ZERO,
    };

    /// Create a new projective point.
    pub fn new(x: Fp, y: Fp, z: Fp) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the identity element.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates with one field inversion; the identity
    /// maps to the (0, 0) sentinel without inverting.
    pub fn to_affine(&self) -> Affine {
        if self.is_identity() {
            return Affine::IDENTITY;
        }

        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;

        Affine::new(self.x * z_inv2, self.y * z_inv3)
    }

    /// Convert from affine coordinates (Z = 1; the sentinel maps to the
    /// identity).
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_identity() {
            return Self::IDENTITY;
        }

        Projective::new(point.x, point.y, Fp::ONE)
    }

    /// Check if a point is on the curve: Y^2 = X^3 + b*Z^6 in Jacobian
    /// coordinates. The identity always passes.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        let z2 = self.z.square();
        let z6 = z2.square() * z2;

        y2 == x3 + B * z6
    }

    /// The fixed generator.
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling, a = 0 Jacobian formula. The identity doubles to the
    /// identity (Z3 = 2*Y*Z = 0).
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        // D = 2*((X + B)^2 - A - C)
        let d = {
            let t = (self.x + b).square() - a - c;
            t + t
        };
        let e = a + a + a;
        let f = e.square();

        let x3 = f - (d + d);
        let c8 = {
            let c2 = c + c;
            let c4 = c2 + c2;
            c4 + c4
        };
        let y3 = e * (d - x3) - c8;
        let z3 = {
            let yz = self.y * self.z;
            yz + yz
        };

        Projective::new(x3, y3, z3)
    }

    /// General Jacobian addition.
    ///
    /// Equal points are detected after Z-scaling (U1 = U2, S1 = S2), so two
    /// representations of the same affine point with different Z are routed
    /// to `double`, and P + (-P) yields the identity regardless of scaling.
    pub fn add_points(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - u1;
        let i = {
            let h2 = h + h;
            h2.square()
        };
        let j = h * i;
        let r = {
            let t = s2 - s1;
            t + t
        };
        let v = u1 * i;

        let x3 = r.square() - j - (v + v);
        let y3 = {
            let s1j = s1 * j;
            r * (v - x3) - (s1j + s1j)
        };
        let z3 = ((self.z + other.z).square() - z1z1 - z2z2) * h;

        Projective::new(x3, y3, z3)
    }

    /// Mixed addition with an affine-embedded operand (Z2 = 1). Same
    /// identity short-circuits and equal/opposite detection as `add_points`.
    pub fn mixed_add(&self, other: &Affine) -> Self {
        if other.is_identity() {
            return *self;
        }
        if self.is_identity() {
            return Self::from_affine(other);
        }

        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let s2 = other.y * self.z * z1z1;

        if self.x == u2 {
            return if self.y == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let h = u2 - self.x;
        let hh = h.square();
        let i = {
            let hh2 = hh + hh;
            hh2 + hh2
        };
        let j = h * i;
        let r = {
            let t = s2 - self.y;
            t + t
        };
        let v = self.x * i;

        let x3 = r.square() - j - (v + v);
        let y3 = {
            let yj = self.y * j;
            r * (v - x3) - (yj + yj)
        };
        let z3 = (self.z + h).square() - z1z1 - hh;

        Projective::new(x3, y3, z3)
    }

    /// Negate a point by flipping Y.
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Projective::new(self.x, -self.y, self.z)
    }
}

impl Group for Projective {
    type Scalar = Fq;

    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_identity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn conditional_select(choice: bool, a: &Self, b: &Self) -> Self {
        Projective {
            x: Fp::select(choice, &a.x, &b.x),
            y: Fp::select(choice, &a.y, &b.y),
            z: Fp::select(choice, &a.z, &b.z),
        }
    }
}

impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_points(&other)
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add<Affine> for Projective {
    type Output = Self;

    fn add(self, other: Affine) -> Self {
        self.mixed_add(&other)
    }
}

impl Mul<Fq> for Projective {
    type Output = Self;

    fn mul(self, scalar: Fq) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&Fq> for Projective {
    type Output = Self;

    fn mul(self, scalar: &Fq) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Mul<Projective> for Fq {
    type Output = Projective;

    fn mul(self, point: Projective) -> Projective {
        <Projective as Group>::scalar_mul(&point, &self)
    }
}

// Conversions
impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl From<&Projective> for Affine {
    fn from(point: &Projective) -> Self {
        point.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::RandomField;

    #[test]
    fn identity() {
        let inf = Projective::IDENTITY;
        assert!(inf.is_identity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.double(), inf);
        assert_eq!(inf.to_affine(), Affine::IDENTITY);
    }

    #[test]
    fn generator_on_curve() {
        let g = Projective::generator();
        assert!(g.is_on_curve(), "generator point is not on the curve");
        assert!(!g.is_identity());
    }

    #[test]
    fn conversion_roundtrip() {
        let affine = Affine::generator();
        let projective = Projective::from_affine(&affine);
        assert_eq!(projective.to_affine(), affine);

        // also through a non-trivial Z
        let doubled = projective.double() + projective;
        assert!(doubled.is_on_curve());
        let back = Projective::from_affine(&doubled.to_affine());
        assert_eq!(back.to_affine(), doubled.to_affine());
    }

    #[test]
    fn addition_with_identity() {
        let g = Projective::generator();
        let inf = Projective::IDENTITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert_eq!(inf + inf, inf);
    }

    #[test]
    fn doubling_matches_addition() {
        let g = Projective::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "doubled point is not on the curve");
        assert_eq!((g + g).to_affine(), g2.to_affine());
    }

    #[test]
    fn equal_points_detected_under_differing_z() {
        let g = Projective::generator();
        // 3G with Z != 1, versus 3G with Z = 1
        let three_g = g.double() + g;
        let normalized = Projective::from_affine(&three_g.to_affine());
        assert_ne!(three_g, normalized); // coordinate-exact inequality
        let sum = three_g + normalized;
        assert_eq!(sum.to_affine(), three_g.double().to_affine());
    }

    #[test]
    fn opposite_points_cancel_under_differing_z() {
        let g = Projective::generator();
        let five_g = g.mul_u64(5);
        let neg = Projective::from_affine(&five_g.to_affine()).negate();
        assert!((five_g + neg).is_identity());
    }

    #[test]
    fn mixed_addition_consistency() {
        let g = Projective::generator();
        let p = g.mul_u64(7);
        let q = g.mul_u64(11);
        let q_affine = q.to_affine();

        assert_eq!(p.mixed_add(&q_affine).to_affine(), (p + q).to_affine());
        assert_eq!(
            Projective::IDENTITY.mixed_add(&q_affine).to_affine(),
            q.to_affine()
        );
        assert_eq!(p.mixed_add(&Affine::IDENTITY), p);
        // doubling path
        let p_affine = p.to_affine();
        assert_eq!(
            p.mixed_add(&p_affine).to_affine(),
            p.double().to_affine()
        );
        // cancellation path
        assert!(p.mixed_add(&p_affine.negate()).is_identity());
    }

    #[test]
    fn addition_commutes_and_associates() {
        let g = Projective::generator();
        let p = g.mul_u64(3);
        let q = g.mul_u64(5);
        let r = g.mul_u64(9);

        assert_eq!((p + q).to_affine(), (q + p).to_affine());
        assert_eq!(((p + q) + r).to_affine(), (p + (q + r)).to_affine());
    }

    #[test]
    fn scalar_mul_small_values() {
        let g = Projective::generator();
        assert!(g.scalar_mul(&Fq::ZERO).is_identity());
        assert_eq!(g.scalar_mul(&Fq::ONE).to_affine(), g.to_affine());

        let five = g.scalar_mul(&Fq::from_u64(5));
        let expected = g + g + g + g + g;
        assert_eq!(five.to_affine(), expected.to_affine());
        assert!(five.is_on_curve());
    }

    #[test]
    fn scalar_mul_of_identity() {
        let k = Fq::from_u64(123456);
        assert!(Projective::IDENTITY.scalar_mul(&k).is_identity());
    }

    #[test]
    fn scalar_mul_distributes_over_scalar_addition() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Projective::generator();
        let k1 = Fq::random(&mut rng);
        let k2 = Fq::random(&mut rng);

        let left = g.scalar_mul(&(k1 + k2));
        let right = g.scalar_mul(&k1) + g.scalar_mul(&k2);
        assert_eq!(left.to_affine(), right.to_affine());
    }

    #[test]
    fn scalar_mul_composes() {
        let mut rng = StdRng::seed_from_u64(8);
        let g = Projective::generator();
        let k1 = Fq::random(&mut rng);
        let k2 = Fq::random(&mut rng);

        let left = g.scalar_mul(&(k1 * k2));
        let right = g.scalar_mul(&k1).scalar_mul(&k2);
        assert_eq!(left.to_affine(), right.to_affine());
    }

    #[test]
    fn scalar_mul_of_negated_scalar() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = Projective::generator();
        let k = Fq::random(&mut rng);

        let left = g.scalar_mul(&(-k));
        let right = g.scalar_mul(&k).negate();
        assert_eq!(left.to_affine(), right.to_affine());
    }

    #[test]
    fn group_order_annihilates() {
        // q * G = identity: q = 0 in Fq, and the ladder reads canonical bits
        let g = Projective::generator();
        let q_minus_one = -Fq::ONE;
        let almost = g.scalar_mul(&q_minus_one);
        assert!((almost + g).is_identity());
    }

    #[test]
    fn mul_u64_matches_scalar_mul() {
        let g = Projective::generator();
        let n = 424242u64;
        assert_eq!(
            g.mul_u64(n).to_affine(),
            g.scalar_mul(&Fq::from_u64(n)).to_affine()
        );
    }
}
