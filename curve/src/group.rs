use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Access to the canonical little-endian limb representation of a scalar,
/// the seam between the scalar field and the group law.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Branch-free choice between two group elements: `a` if `choice`,
    /// else `b`.
    fn conditional_select(choice: bool, a: &Self, b: &Self) -> Self;

    /// Scalar multiplication by a uniform-structure ladder.
    ///
    /// Walks all 255 scalar bits from the most significant down; every
    /// iteration doubles, computes the sum, and keeps one of the two by
    /// conditional select rather than branching on the bit value. A zero
    /// scalar or the identity point yields the identity.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let limbs = scalar.to_u64_limbs();
        let mut acc = Self::identity();

        for i in (0..255).rev() {
            acc = acc.double();
            let sum = acc + *self;
            let bit = (limbs[i / 64] >> (i % 64)) & 1 == 1;
            acc = Self::conditional_select(bit, &sum, &acc);
        }

        acc
    }

    /// Multiply the fixed generator.
    fn mul_generator(scalar: &Self::Scalar) -> Self {
        Self::generator().scalar_mul(scalar)
    }

    /// Multiplication by a small public integer (test and tooling helper).
    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }

        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}
