//! Bitboard implementation for fast line matching

use super::{Pos, TOTAL_CELLS};

/// One bit per cell of the 4x4x4 cube.
/// Bit `i` corresponds to `Pos::from_index(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build a bitboard from a list of positions
    pub fn from_positions(positions: &[Pos]) -> Self {
        let mut bb = Self::new();
        for &pos in positions {
            bb.set(pos);
        }
        bb
    }

    /// Raw bit pattern
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Check if every cell is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == u64::MAX
    }

    /// Number of cells set in both bitboards
    #[inline]
    pub fn overlap(&self, other: Bitboard) -> u32 {
        (self.bits & other.bits).count_ones()
    }

    /// True if every bit of `mask` is also set here
    #[inline]
    pub fn contains_all(&self, mask: Bitboard) -> bool {
        self.bits & mask.bits == mask.bits
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// Iterate over set bit positions in ascending index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }

    /// Iterate over unset bit positions in ascending index order
    pub fn iter_zeros(&self) -> BitboardIter {
        BitboardIter { bits: !self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
