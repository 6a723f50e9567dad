// E(Fp) : y^2 = x^3 + 5
// E generator point: (1 : 0x1b74b5a30a12937c53dfa9f06378ee548f655bd4333d477119cf7a23caed2abb : 1)
// Curve prime order q: 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001 (255 bits)
// Curve cofactor: 1

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::Fp;

/// Curve coefficient b = 5 (a = 0), in Montgomery form.
pub(crate) const B: Fp = Fp::from_montgomery_limbs([
    0xa1a55e68ffffffed,
    0x74c2a54b4f4982f3,
    0xfffffffffffffffd,
    0x3fffffffffffffff,
]);

// Generator x = 1 (Montgomery form of 1 is R)
const GENERATOR_X: Fp = Fp::from_montgomery_limbs([
    0x34786d38fffffffd,
    0x992c350be41914ad,
    0xffffffffffffffff,
    0x3fffffffffffffff,
]);

// Generator y = sqrt(6), the root ending in ...caed2abb
const GENERATOR_Y: Fp = Fp::from_montgomery_limbs([
    0x2f474795455d409d,
    0xb443b9b74b8255d9,
    0x270c412f2c9a5d66,
    0x08e00f71ba43dd6b,
]);

/// Affine point on the elliptic curve.
///
/// (0, 0) is the sentinel for the identity element. It is unambiguous: with
/// b = 5 and a = 0 the origin never satisfies the curve equation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: Fp,
    /// The y-coordinate of the point
    pub y: Fp,
}

/// An affine point compressed to its x-coordinate and the parity of y;
/// the serialized form of public keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compressed {
    pub x: Fp,
    pub is_odd: bool,
}

impl Affine {
    /// The identity element, encoded by the (0, 0) sentinel.
    pub const IDENTITY: Self = Affine {
        x: Fp::ZERO,
        y: Fp::ZERO,
    };

    /// Create a new affine point. The curve equation is not checked here;
    /// use [`Affine::is_on_curve`].
    pub fn new(x: Fp, y: Fp) -> Self {
        Affine { x, y }
    }

    /// The fixed generator of the prime-order group.
    pub fn generator() -> Self {
        Affine {
            x: GENERATOR_X,
            y: GENERATOR_Y,
        }
    }

    /// Check if this point is the identity element.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Check if a point is on the curve: y^2 = x^3 + b.
    /// The identity sentinel always passes.
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;

        y2 == x3 + B
    }

    /// Negate a point by flipping y.
    pub fn negate(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        Affine {
            x: self.x,
            y: -self.y,
        }
    }

    /// Compress to the x-coordinate and the parity of y.
    pub fn compress(&self) -> Compressed {
        Compressed {
            x: self.x,
            is_odd: self.y.is_odd(),
        }
    }

    /// Rebuild an affine point from its coordinates, rejecting off-curve
    /// inputs (the identity sentinel is accepted).
    pub fn from_coordinates(x: Fp, y: Fp) -> Result<Self, CurveError> {
        let point = Affine { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_sentinel() {
        let id = Affine::IDENTITY;
        assert!(id.is_identity());
        assert!(id.is_on_curve());
        assert_eq!(id.negate(), id);
    }

    #[test]
    fn generator_on_curve() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "generator point is not on the curve");
        assert!(!g.is_identity());
    }

    #[test]
    fn generator_x_is_one() {
        assert_eq!(Affine::generator().x, Fp::ONE);
    }

    #[test]
    fn perturbed_point_rejected() {
        let g = Affine::generator();
        let bad = Affine::new(g.x + Fp::ONE, g.y);
        assert!(!bad.is_on_curve());
        assert!(Affine::from_coordinates(bad.x, bad.y).is_err());
        assert!(Affine::from_coordinates(g.x, g.y).is_ok());
    }

    #[test]
    fn negation_stays_on_curve() {
        let g = Affine::generator();
        let neg = g.negate();
        assert!(neg.is_on_curve());
        assert_eq!(neg.negate(), g);
        assert_ne!(neg, g);
    }

    #[test]
    fn compression_parity() {
        let g = Affine::generator();
        let c = g.compress();
        assert_eq!(c.x, g.x);
        assert_eq!(c.is_odd, g.y.is_odd());
        // negation flips parity (y != 0 for points on this curve)
        assert_ne!(g.negate().compress().is_odd, c.is_odd);
    }
}
