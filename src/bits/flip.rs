//! Single-bit flip generator

use super::{decode, BitVector};
use crate::error::Result;
use crate::types::{FlipMode, Label};

/// The original bit vector followed by one single-flip variant per position
///
/// Always holds `len(bits) + 1` entries. Entry 0 is the unmodified input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    mode: FlipMode,
    variants: Vec<BitVector>,
}

impl VariantSet {
    /// Build the variant set for `bits` using the given flip mode
    pub fn generate(bits: &BitVector, mode: FlipMode) -> Self {
        let n = bits.len();
        let mut variants = vec![bits.clone(); n + 1];

        for (index, variant) in variants.iter_mut().enumerate().skip(1) {
            if let Some(position) = Self::position_for(mode, n, index) {
                variant.flip(position);
            }
        }

        Self { mode, variants }
    }

    /// Bit position flipped in entry `index`, if it lies inside the vector
    fn position_for(mode: FlipMode, len: usize, index: usize) -> Option<usize> {
        if index == 0 || index > len {
            return None;
        }
        let position = match mode {
            FlipMode::Reference => index,
            FlipMode::Strict => index - 1,
        };
        (position < len).then_some(position)
    }

    /// Bit position that entry `index` differs from the original at
    pub fn flipped_position(&self, index: usize) -> Option<usize> {
        let len = self.variants.first().map_or(0, BitVector::len);
        Self::position_for(self.mode, len, index)
    }

    pub fn mode(&self) -> FlipMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BitVector> {
        self.variants.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BitVector> {
        self.variants.iter()
    }

    /// Decode every entry back into a label of `length` characters
    pub fn decode_all(&self, length: usize) -> Result<Vec<Label>> {
        self.variants.iter().map(|bits| decode(bits, length)).collect()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a BitVector;
    type IntoIter = std::slice::Iter<'a, BitVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generate the reference variant set for `bits`
pub fn generate_variants(bits: &BitVector) -> VariantSet {
    VariantSet::generate(bits, FlipMode::Reference)
}
