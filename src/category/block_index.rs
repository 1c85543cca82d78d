//! Block-partitioned membership index.
//!
//! The 16-bit code space is cut into 256 windows of 256 code points. Each
//! window is stored as one of:
//! - `Empty`: no member in the window
//! - `Full`: every code point in the window is a member
//! - `Partial`: a 256-bit vector
//!
//! A lookup is `blocks[code >> 8]` followed by at most one bit test, no matter
//! how many ranges the class has. Large scripts and whole unassigned areas end
//! up as `Full` blocks and never touch a bit vector.

use std::fmt;

use super::range_set::RangeSet;

/// Number of blocks covering the 16-bit code space.
pub const BLOCK_COUNT: usize = 256;

/// Code points per block.
pub const BLOCK_SIZE: usize = 256;

const WORDS: usize = BLOCK_SIZE / 64;
const ALL_SET: [u64; WORDS] = [u64::MAX; WORDS];

/// One 256-code-point window of a [`BlockIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Empty,
    Full,
    Partial([u64; WORDS]),
}

impl Block {
    /// Test the code point at `offset` within this block.
    #[inline]
    pub fn contains(&self, offset: u8) -> bool {
        match self {
            Block::Empty => false,
            Block::Full => true,
            Block::Partial(bits) => {
                let offset = usize::from(offset);
                bits[offset >> 6] & (1u64 << (offset & 63)) != 0
            }
        }
    }

    /// Number of members in this block.
    pub fn count(&self) -> usize {
        match self {
            Block::Empty => 0,
            Block::Full => BLOCK_SIZE,
            Block::Partial(bits) => bits.iter().map(|w| w.count_ones() as usize).sum(),
        }
    }

    fn from_bits(bits: Option<[u64; WORDS]>) -> Self {
        match bits {
            None => Block::Empty,
            Some(bits) if bits == ALL_SET => Block::Full,
            Some(bits) => Block::Partial(bits),
        }
    }
}

/// Set bits `from..=to` of a block's bit vector.
fn set_bits(bits: &mut [u64; WORDS], from: u8, to: u8) {
    let (from, to) = (usize::from(from), usize::from(to));
    for word in (from >> 6)..=(to >> 6) {
        let lo = if word == from >> 6 { from & 63 } else { 0 };
        let hi = if word == to >> 6 { to & 63 } else { 63 };
        bits[word] |= (u64::MAX >> (63 - (hi - lo))) << lo;
    }
}

/// O(1) membership index derived from a [`RangeSet`].
///
/// Blocks are canonical (untouched windows are `Empty`, saturated ones
/// `Full`), so two indexes are equal exactly when they cover the same code
/// points.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BlockIndex {
    /// Always `BLOCK_COUNT` long.
    blocks: Box<[Block]>,
}

impl BlockIndex {
    pub fn build(set: &RangeSet) -> Self {
        let mut bits: Vec<Option<[u64; WORDS]>> = vec![None; BLOCK_COUNT];

        for range in set.ranges() {
            let lo_block = usize::from(range.lo >> 8);
            let hi_block = usize::from(range.hi >> 8);
            let lo_offset = (range.lo & 0xFF) as u8;
            let hi_offset = (range.hi & 0xFF) as u8;

            if lo_block == hi_block {
                set_bits(
                    bits[lo_block].get_or_insert([0; WORDS]),
                    lo_offset,
                    hi_offset,
                );
                continue;
            }

            set_bits(bits[lo_block].get_or_insert([0; WORDS]), lo_offset, 0xFF);
            for block in &mut bits[lo_block + 1..hi_block] {
                *block = Some(ALL_SET);
            }
            set_bits(bits[hi_block].get_or_insert([0; WORDS]), 0, hi_offset);
        }

        Self {
            blocks: bits.into_iter().map(Block::from_bits).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        self.blocks[usize::from(code >> 8)].contains((code & 0xFF) as u8)
    }

    /// The block covering `n << 8 ..= (n << 8) | 0xFF`.
    #[inline]
    pub fn block(&self, n: u8) -> &Block {
        &self.blocks[usize::from(n)]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Total number of members; matches [`RangeSet::len`] of the source.
    pub fn count(&self) -> usize {
        self.blocks.iter().map(Block::count).sum()
    }

    pub fn full_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| matches!(b, Block::Full)).count()
    }

    pub fn partial_blocks(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Partial(_)))
            .count()
    }
}

impl fmt::Debug for BlockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockIndex")
            .field("full", &self.full_blocks())
            .field("partial", &self.partial_blocks())
            .field("count", &self.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CodePointRange;

    fn index(ranges: &[(u16, u16)]) -> (RangeSet, BlockIndex) {
        let set = RangeSet::from_ranges(
            "test",
            ranges
                .iter()
                .map(|&(lo, hi)| CodePointRange::new(lo, hi))
                .collect(),
        )
        .unwrap();
        let index = BlockIndex::build(&set);
        (set, index)
    }

    fn assert_agrees(set: &RangeSet, index: &BlockIndex) {
        for code in 0..=u16::MAX {
            assert_eq!(
                index.contains(code),
                set.contains(code),
                "mismatch at {:#06x}",
                code
            );
        }
        assert_eq!(index.count(), set.len());
    }

    #[test]
    fn test_set_bits() {
        let mut bits = [0u64; WORDS];
        set_bits(&mut bits, 0, 0);
        assert_eq!(bits, [1, 0, 0, 0]);

        let mut bits = [0u64; WORDS];
        set_bits(&mut bits, 60, 70);
        assert_eq!(bits[0], 0xF000_0000_0000_0000);
        assert_eq!(bits[1], 0x7F);

        let mut bits = [0u64; WORDS];
        set_bits(&mut bits, 0, 255);
        assert_eq!(bits, ALL_SET);

        let mut bits = [0u64; WORDS];
        set_bits(&mut bits, 255, 255);
        assert_eq!(bits, [0, 0, 0, 1 << 63]);
    }

    #[test]
    fn test_empty_index() {
        let (set, index) = index(&[]);
        assert!(index.blocks().iter().all(|b| *b == Block::Empty));
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_within_one_block() {
        let (set, index) = index(&[(0x41, 0x5A), (0x61, 0x7A)]);
        assert!(matches!(index.block(0), Block::Partial(_)));
        assert_eq!(*index.block(1), Block::Empty);
        assert!(index.contains(0x41));
        assert!(!index.contains(0x40));
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_spanning_blocks() {
        // Starts on a block boundary and ends inside block 0x9F.
        let (set, index) = index(&[(0x4E00, 0x9FCC)]);
        assert!(matches!(index.block(0x4D), Block::Empty));
        assert!(matches!(index.block(0x4E), Block::Full));
        assert!(matches!(index.block(0x50), Block::Full));
        assert!(matches!(index.block(0x9F), Block::Partial(_)));
        assert_eq!(index.full_blocks(), 0x9F - 0x4E);
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_partial_edges_of_span() {
        let (set, index) = index(&[(0x12F0, 0x1410)]);
        assert!(matches!(index.block(0x12), Block::Partial(_)));
        assert!(matches!(index.block(0x13), Block::Full));
        assert!(matches!(index.block(0x14), Block::Partial(_)));
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_collapses_to_full() {
        // Two ranges that together saturate block 0x01.
        let (set, index) = index(&[(0x100, 0x17F), (0x180, 0x1FF)]);
        assert_eq!(*index.block(1), Block::Full);
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_whole_space() {
        let (set, index) = index(&[(0, 0xFFFF)]);
        assert!(index.blocks().iter().all(|b| *b == Block::Full));
        assert_eq!(index.count(), 0x10000);
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_extremes() {
        let (set, index) = index(&[(0, 0), (0xFFFF, 0xFFFF)]);
        assert!(index.contains(0));
        assert!(index.contains(0xFFFF));
        assert!(!index.contains(1));
        assert!(!index.contains(0xFFFE));
        assert_agrees(&set, &index);
    }

    #[test]
    fn test_equality_is_set_equality() {
        let (_, split) = index(&[(1, 2), (3, 4)]);
        let (_, joined) = index(&[(1, 4)]);
        assert_eq!(split, joined);
        let (_, other) = index(&[(1, 5)]);
        assert_ne!(split, other);
    }
}
