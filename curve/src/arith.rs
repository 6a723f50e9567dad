//! Shared 4x64-limb arithmetic used by both field instantiations.
//!
//! Values are little-endian limb arrays. All helpers take the modulus (and,
//! where needed, the Montgomery constant) explicitly so that `Fp` and `Fq`
//! can share one implementation without being cross-assignable.

/// Carrying addition.
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Borrowing subtraction.
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Raw 256-bit subtraction, ignoring the final borrow.
#[inline]
const fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, _) = borrowing_sub(a[3], b[3], borrow);
    [r0, r1, r2, r3]
}

/// True iff a < m, i.e. a is the canonical representative.
#[inline]
pub(crate) const fn is_canonical(a: &[u64; 4], m: &[u64; 4]) -> bool {
    let (_, borrow) = a[0].overflowing_sub(m[0]);
    let (_, borrow) = borrowing_sub(a[1], m[1], borrow);
    let (_, borrow) = borrowing_sub(a[2], m[2], borrow);
    let (_, borrow) = borrowing_sub(a[3], m[3], borrow);
    borrow
}

/// Add two canonical values mod m.
#[inline]
pub(crate) const fn add_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);
    let r = [r0, r1, r2, r3];

    if carry || !is_canonical(&r, m) {
        sub_limbs(&r, m)
    } else {
        r
    }
}

/// Subtract two canonical values mod m.
#[inline]
pub(crate) const fn sub_mod(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(m[0]);
        let (r1, carry) = carrying_add(r1, m[1], carry);
        let (r2, carry) = carrying_add(r2, m[2], carry);
        let (r3, _) = carrying_add(r3, m[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Negate a canonical value mod m; zero maps to zero.
#[inline]
pub(crate) const fn neg_mod(a: &[u64; 4], m: &[u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(m, a, m)
}

/// Word-by-word Montgomery multiplication: (a * b * R^{-1}) mod m, R = 2^256.
///
/// `inv` is -m^{-1} mod 2^64. Both inputs must be canonical; the result is
/// canonical. For moduli below 2^255 the intermediate product plus the
/// reduction additions stay below 2^512, so no carry escapes the buffer and
/// a single conditional subtraction suffices.
pub(crate) fn mont_mul(a: &[u64; 4], b: &[u64; 4], m: &[u64; 4], inv: u64) -> [u64; 4] {
    // Schoolbook a * b into a 512-bit buffer
    let mut t = [0u64; 8];
    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    // Montgomery reduction
    for i in 0..4 {
        let k = t[i].wrapping_mul(inv);
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (k as u128) * (m[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    let r = [t[4], t[5], t[6], t[7]];
    if is_canonical(&r, m) {
        r
    } else {
        sub_limbs(&r, m)
    }
}

/// Variable-time exponentiation in the Montgomery domain.
///
/// `base` and the result are Montgomery representatives; `one` is the
/// Montgomery form of 1 (R mod m). The exponent is a plain little-endian
/// integer, processed least significant bit first.
pub(crate) fn pow_vartime(
    base: &[u64; 4],
    exp: &[u64; 4],
    one: &[u64; 4],
    m: &[u64; 4],
    inv: u64,
) -> [u64; 4] {
    let mut result = *one;
    let mut acc = *base;

    for &limb in exp.iter() {
        let mut remaining = limb;
        for _ in 0..64 {
            if remaining & 1 == 1 {
                result = mont_mul(&result, &acc, m, inv);
            }
            acc = mont_mul(&acc, &acc, m, inv);
            remaining >>= 1;
        }
    }

    result
}

/// Single-word conditional move over a limb array: `a` if `choice`, else `b`.
/// Branch-free, mirroring the cmovznz primitive of generated field code.
#[inline]
pub(crate) fn select(choice: bool, a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mask = (choice as u64).wrapping_neg();
    [
        (a[0] & mask) | (b[0] & !mask),
        (a[1] & mask) | (b[1] & !mask),
        (a[2] & mask) | (b[2] & !mask),
        (a[3] & mask) | (b[3] & !mask),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small prime 2^61 - 1 embedded in the limb representation is enough to
    // exercise the carry paths of add/sub.
    const M: [u64; 4] = [0x1fffffffffffffff, 0, 0, 0];

    #[test]
    fn add_sub_roundtrip() {
        let a = [0x1ffffffffffffff0, 0, 0, 0];
        let b = [0x123, 0, 0, 0];
        let s = add_mod(&a, &b, &M);
        assert!(is_canonical(&s, &M));
        assert_eq!(sub_mod(&s, &b, &M), a);
    }

    #[test]
    fn neg_zero_is_zero() {
        assert_eq!(neg_mod(&[0, 0, 0, 0], &M), [0, 0, 0, 0]);
    }

    #[test]
    fn select_picks_sides() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        assert_eq!(select(true, &a, &b), a);
        assert_eq!(select(false, &a, &b), b);
    }
}
