//! Character classes decoded from the compressed tables.
//!
//! A class goes through three stages, each one built from the previous and
//! never modified afterwards:
//!
//! - `EncodedClass`: the literal delta dictionary and symbol string
//! - `RangeSet`: the decoded, sorted, disjoint inclusive ranges
//! - `BlockIndex`: 256 blocks of 256 code points for O(1) membership
//!
//! `Category` bundles a `RangeSet` with its `BlockIndex` and is what the
//! registry hands out.

mod block_index;
mod decoder;
mod range_set;

pub use block_index::{Block, BlockIndex, BLOCK_COUNT, BLOCK_SIZE};
pub use decoder::EncodedClass;
pub use range_set::{CodePointRange, RangeSet};

use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::Result;

/// A named character class with O(1) membership.
///
/// Equality and hashing compare the set of member code points, not the
/// table the class was decoded from: two classes built from different
/// literals compare equal when they cover the same code points.
#[derive(Clone)]
pub struct Category {
    name: &'static str,
    ranges: RangeSet,
    index: BlockIndex,
}

impl Category {
    /// Decode a literal table and index it.
    pub fn from_encoded(encoded: &EncodedClass) -> Result<Self> {
        let ranges = encoded.decode()?;
        Ok(Self::from_ranges(encoded.name(), ranges))
    }

    /// Index an already decoded range set.
    pub fn from_ranges(name: &'static str, ranges: RangeSet) -> Self {
        let index = BlockIndex::build(&ranges);
        debug!(
            "category {}: {} ranges, {} code points, {} full / {} partial blocks",
            name,
            ranges.ranges().len(),
            ranges.len(),
            index.full_blocks(),
            index.partial_blocks()
        );
        Self {
            name,
            ranges,
            index,
        }
    }

    /// The tag this class was built under, e.g. `"Lu"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Membership test through the block index.
    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        self.index.contains(code)
    }

    /// Membership test for a `char`; anything above `U+FFFF` is never a member.
    #[inline]
    pub fn contains_char(&self, c: char) -> bool {
        match u16::try_from(u32::from(c)) {
            Ok(code) => self.index.contains(code),
            Err(_) => false,
        }
    }

    /// Number of member code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &RangeSet {
        &self.ranges
    }

    pub fn index(&self) -> &BlockIndex {
        &self.index
    }

    /// Every member in ascending order. Meant for diagnostics and tests.
    pub fn contents(&self) -> Vec<u16> {
        self.ranges.contents()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("name", &self.name)
            .field("ranges", &self.ranges.ranges().len())
            .field("len", &self.ranges.len())
            .finish()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.ranges)
    }
}

#[cfg(test)]
mod tests;
