//! Random-oracle input builder.
//!
//! An [`ROInput`] holds the ordered pre-image of a protocol hash as two
//! parallel streams: whole base-field elements and individual bits. Insertion
//! order is the wire format; every writer must append in the fixed schema
//! order for signatures to stay compatible.
//!
//! Capacities are fixed at construction. Appending past either capacity is a
//! schema mismatch and reported as a recoverable error rather than a panic,
//! so callers on constrained targets can surface it.

use curve::{Fp, Fq, ScalarBits};

use crate::error::SignerError;

// Bits per packed chunk. One below the 255-bit field size so every chunk is
// guaranteed canonical.
const CHUNK_BITS: usize = 254;

/// Ordered field/bit pre-image fed to the sponge.
#[derive(Clone, Debug)]
pub struct ROInput {
    fields: Vec<Fp>,
    bits: Vec<bool>,
    field_capacity: usize,
    bit_capacity: usize,
}

impl ROInput {
    /// Create an empty input sized for a known schema.
    pub fn with_capacity(field_capacity: usize, bit_capacity: usize) -> Self {
        ROInput {
            fields: Vec::with_capacity(field_capacity),
            bits: Vec::with_capacity(bit_capacity),
            field_capacity,
            bit_capacity,
        }
    }

    /// Append a full field element to the field stream.
    pub fn add_field(&mut self, field: Fp) -> Result<(), SignerError> {
        if self.fields.len() == self.field_capacity {
            return Err(SignerError::CapacityExceeded {
                kind: "field",
                capacity: self.field_capacity,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Append a single bit to the bit stream.
    pub fn add_bit(&mut self, bit: bool) -> Result<(), SignerError> {
        if self.bits.len() == self.bit_capacity {
            return Err(SignerError::CapacityExceeded {
                kind: "bit",
                capacity: self.bit_capacity,
            });
        }
        self.bits.push(bit);
        Ok(())
    }

    /// Append the full 255-bit little-endian expansion of a scalar.
    pub fn add_scalar(&mut self, scalar: &Fq) -> Result<(), SignerError> {
        let limbs = scalar.to_u64_limbs();
        for i in 0..Fq::NUM_BITS {
            self.add_bit((limbs[i / 64] >> (i % 64)) & 1 == 1)?;
        }
        Ok(())
    }

    /// Append bytes, least-significant bit first within each byte.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<(), SignerError> {
        for &byte in bytes {
            for i in 0..8 {
                self.add_bit((byte >> i) & 1 == 1)?;
            }
        }
        Ok(())
    }

    /// Append a 32-bit integer as 32 bits, least-significant first.
    pub fn add_u32(&mut self, value: u32) -> Result<(), SignerError> {
        for i in 0..32 {
            self.add_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// Append a 64-bit integer as 64 bits, least-significant first.
    pub fn add_u64(&mut self, value: u64) -> Result<(), SignerError> {
        for i in 0..64 {
            self.add_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    pub fn fields(&self) -> &[Fp] {
        &self.fields
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pack the bit stream into field elements, 254 bits per chunk, with the
    /// first-appended bit of each chunk most significant.
    pub fn packed_bits(&self) -> Vec<Fp> {
        self.bits
            .chunks(CHUNK_BITS)
            .map(|chunk| {
                let mut acc = Fp::ZERO;
                for &bit in chunk {
                    acc = acc + acc;
                    if bit {
                        acc += Fp::ONE;
                    }
                }
                acc
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_pack_first_appended_most_significant() {
        let mut input = ROInput::with_capacity(0, 8);
        for bit in [true, false, true] {
            input.add_bit(bit).unwrap();
        }
        let packed = input.packed_bits();
        assert_eq!(packed, vec![Fp::from_u64(0b101)]);
    }

    #[test]
    fn bytes_append_lsb_first() {
        let mut input = ROInput::with_capacity(0, 8);
        input.add_bytes(&[0x01]).unwrap();
        // the set bit was appended first, so it lands at the top of the chunk
        assert_eq!(input.packed_bits(), vec![Fp::from_u64(0x80)]);
    }

    #[test]
    fn u64_appends_lsb_first() {
        let mut input = ROInput::with_capacity(0, 64);
        input.add_u64(3).unwrap();
        assert_eq!(input.bit_len(), 64);
        // bits [1,1,0..0] read MSB-first give 0b11 << 62
        assert_eq!(input.packed_bits(), vec![Fp::from_u64(3 << 62)]);
    }

    #[test]
    fn scalar_expands_to_255_bits() {
        let mut input = ROInput::with_capacity(0, 255);
        input.add_scalar(&Fq::ONE).unwrap();
        assert_eq!(input.bit_len(), 255);

        // bit 0 leads the first 254-bit chunk, so it contributes 2^253; the
        // one leftover bit forms a zero second chunk
        let packed = input.packed_bits();
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0], Fp::from_u64(2).pow(253));
        assert_eq!(packed[1], Fp::ZERO);
    }

    #[test]
    fn field_capacity_is_enforced() {
        let mut input = ROInput::with_capacity(1, 0);
        input.add_field(Fp::ONE).unwrap();
        let err = input.add_field(Fp::ONE).unwrap_err();
        assert!(matches!(
            err,
            SignerError::CapacityExceeded {
                kind: "field",
                capacity: 1
            }
        ));
    }

    #[test]
    fn bit_capacity_is_enforced_mid_batch() {
        let mut input = ROInput::with_capacity(0, 10);
        let err = input.add_u32(0).unwrap_err();
        assert!(matches!(
            err,
            SignerError::CapacityExceeded {
                kind: "bit",
                capacity: 10
            }
        ));
    }

    #[test]
    fn insertion_order_changes_packing() {
        let mut a = ROInput::with_capacity(0, 2);
        a.add_bit(true).unwrap();
        a.add_bit(false).unwrap();

        let mut b = ROInput::with_capacity(0, 2);
        b.add_bit(false).unwrap();
        b.add_bit(true).unwrap();

        assert_ne!(a.packed_bits(), b.packed_bits());
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        let input = ROInput::with_capacity(4, 4);
        assert!(input.fields().is_empty());
        assert!(input.packed_bits().is_empty());
    }
}
