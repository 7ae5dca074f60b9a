//! Bit-level codec for labels
//!
//! Every character becomes 8 bits, most significant bit first, so a label of
//! length L maps to a vector of exactly 8 × L bits.

mod flip;

pub use flip::{generate_variants, VariantSet};

use crate::error::{BitsquatError, Result};
use crate::types::Label;

/// Bits per encoded character
pub const BYTE: usize = 8;

/// Ordered sequence of bits, MSB first per character
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    /// Create an all-zero vector of the given length
    pub fn zeroed(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<bool> {
        self.bits.get(position).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Complement the bit at `position`. Returns false if out of range.
    pub fn flip(&mut self, position: usize) -> bool {
        match self.bits.get_mut(position) {
            Some(bit) => {
                *bit = !*bit;
                true
            }
            None => false,
        }
    }

    /// Number of positions at which two vectors differ
    pub fn hamming_distance(&self, other: &BitVector) -> usize {
        let differing = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count();
        differing + self.len().abs_diff(other.len())
    }

    /// Parse a string of '0' and '1' characters
    pub fn from_bit_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(BitsquatError::internal(format!(
                    "invalid bit {:?} at position {}",
                    other, i
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(|bits| Self { bits })
    }
}

impl std::fmt::Display for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Write the 8-bit MSB-first representation of `byte` into `out`
fn write_byte(byte: u8, out: &mut [bool]) {
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (byte >> (BYTE - 1 - i)) & 1 == 1;
    }
}

/// Read 8 MSB-first bits back into a byte
fn read_byte(bits: &[bool]) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
}

/// Encode a label into its bit representation
pub fn encode(label: &Label) -> BitVector {
    let mut out = BitVector::zeroed(label.char_len() * BYTE);
    for (chunk, byte) in out.bits.chunks_exact_mut(BYTE).zip(label.bytes()) {
        write_byte(byte, chunk);
    }
    out
}

/// Decode a bit vector back into a label of `length` characters
pub fn decode(bits: &BitVector, length: usize) -> Result<Label> {
    let expected = length
        .checked_mul(BYTE)
        .ok_or_else(|| BitsquatError::invalid_length(usize::MAX, bits.len()))?;
    if bits.len() % BYTE != 0 || bits.len() != expected {
        return Err(BitsquatError::invalid_length(expected, bits.len()));
    }

    let bytes: Vec<u8> = bits.bits.chunks_exact(BYTE).map(read_byte).collect();
    Ok(Label::from_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> Label {
        Label::new(s).unwrap()
    }

    #[test]
    fn test_encode_msb_first() {
        let bits = encode(&label("ab"));
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.to_string(), "0110000101100010");
    }

    #[test]
    fn test_encode_empty() {
        let bits = encode(&label(""));
        assert!(bits.is_empty());
        assert_eq!(decode(&bits, 0).unwrap().as_str(), "");
    }

    #[test]
    fn test_round_trip_all_bytes() {
        let all: Vec<u8> = (0..=255u8).collect();
        let original = Label::from_bytes(&all);
        let bits = encode(&original);
        assert_eq!(bits.len(), 256 * BYTE);
        assert_eq!(decode(&bits, 256).unwrap(), original);
    }

    #[test]
    fn test_round_trip_domains() {
        for s in ["google", "com", "co.uk", "x", "paypal-login", "A1z9"] {
            let l = label(s);
            assert_eq!(decode(&encode(&l), l.char_len()).unwrap(), l);
        }
    }

    #[test]
    fn test_decode_rejects_partial_byte() {
        let bits = BitVector::from_bit_str("0110000").unwrap();
        assert_eq!(
            decode(&bits, 1).unwrap_err(),
            BitsquatError::invalid_length(8, 7)
        );
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        let bits = encode(&label("ab"));
        assert_eq!(
            decode(&bits, 3).unwrap_err(),
            BitsquatError::invalid_length(24, 16)
        );
    }

    #[test]
    fn test_decode_rejects_overflowing_length() {
        assert_eq!(
            decode(&BitVector::default(), usize::MAX).unwrap_err(),
            BitsquatError::invalid_length(usize::MAX, 0)
        );
        assert!(decode(&encode(&label("ab")), usize::MAX / BYTE + 1).is_err());
    }

    #[test]
    fn test_flip_and_hamming() {
        let original = encode(&label("a"));
        let mut flipped = original.clone();
        assert!(flipped.flip(1));
        assert_eq!(flipped.to_string(), "00100001");
        assert_eq!(original.hamming_distance(&flipped), 1);
        assert!(!flipped.flip(8));
    }

    #[test]
    fn test_from_bit_str_rejects_garbage() {
        assert!(BitVector::from_bit_str("01x1").is_err());
    }
}
