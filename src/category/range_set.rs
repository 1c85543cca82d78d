//! Sorted, disjoint inclusive code-point ranges.

use std::fmt;

use crate::{CategoryError, Result};

/// An inclusive range `[lo, hi]` of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointRange {
    pub lo: u16,
    pub hi: u16,
}

impl CodePointRange {
    #[inline]
    pub const fn new(lo: u16, hi: u16) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, code: u16) -> bool {
        self.lo <= code && code <= self.hi
    }

    /// Number of code points covered; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.hi - self.lo) + 1
    }
}

/// The decoded ranges of one class.
///
/// Ranges are sorted and disjoint (`lo <= hi < next.lo`). Adjacent ranges are
/// not merged, so equality here is structural: two sets covering the same
/// code points with different splits compare unequal. Compare
/// [`Category`](super::Category) values for set equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RangeSet {
    ranges: Vec<CodePointRange>,
    len: usize,
}

impl RangeSet {
    /// Build from ranges, checking they are sorted and disjoint.
    pub fn from_ranges(name: &'static str, ranges: Vec<CodePointRange>) -> Result<Self> {
        let mut len = 0;
        let mut previous: Option<u16> = None;
        for (i, range) in ranges.iter().enumerate() {
            if range.hi < range.lo {
                return Err(CategoryError::NonMonotonic {
                    class: name,
                    offset: 2 * i + 1,
                    previous: range.lo,
                    boundary: range.hi,
                });
            }
            if let Some(prev) = previous {
                if range.lo <= prev {
                    return Err(CategoryError::NonMonotonic {
                        class: name,
                        offset: 2 * i,
                        previous: prev,
                        boundary: range.lo,
                    });
                }
            }
            len += range.len();
            previous = Some(range.hi);
        }
        Ok(Self { ranges, len })
    }

    /// The decoder has already validated the ranges and summed their lengths.
    pub(super) fn from_sorted(ranges: Vec<CodePointRange>, len: usize) -> Self {
        Self { ranges, len }
    }

    /// Linear scan over the ranges.
    ///
    /// This is the reference answer the block index is built from; matching
    /// goes through [`BlockIndex::contains`](super::BlockIndex::contains).
    pub fn contains(&self, code: u16) -> bool {
        for range in &self.ranges {
            if code < range.lo {
                return false;
            }
            if code <= range.hi {
                return true;
            }
        }
        false
    }

    #[inline]
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    /// Total number of member code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ranges.iter().flat_map(|r| r.lo..=r.hi)
    }

    /// Every member in ascending order.
    pub fn contents(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if range.lo == range.hi {
                write!(f, "{:04X}", range.lo)?;
            } else {
                write!(f, "{:04X}-{:04X}", range.lo, range.hi)?;
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> RangeSet {
        RangeSet::from_ranges(
            "latin",
            vec![
                CodePointRange::new(0x41, 0x5A),
                CodePointRange::new(0x61, 0x7A),
                CodePointRange::new(0xAA, 0xAA),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_contains() {
        let set = latin();
        assert!(set.contains(u16::from(b'A')));
        assert!(set.contains(u16::from(b'Z')));
        assert!(set.contains(u16::from(b'q')));
        assert!(set.contains(0xAA));
        assert!(!set.contains(u16::from(b'@')));
        assert!(!set.contains(u16::from(b'[')));
        assert!(!set.contains(0xAB));
        assert!(!set.contains(0xFFFF));
        assert!(!RangeSet::default().contains(0));
    }

    #[test]
    fn test_len_and_contents() {
        let set = latin();
        assert_eq!(set.len(), 26 + 26 + 1);
        let contents = set.contents();
        assert_eq!(contents.len(), set.len());
        assert_eq!(contents[0], 0x41);
        assert_eq!(contents[26], 0x61);
        assert_eq!(*contents.last().unwrap(), 0xAA);
        assert!(contents.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_range_len() {
        let set = RangeSet::from_ranges("all", vec![CodePointRange::new(0, 0xFFFF)]).unwrap();
        assert_eq!(set.len(), 0x10000);
        assert!(set.contains(0));
        assert!(set.contains(0xFFFF));
    }

    #[test]
    fn test_rejects_overlap() {
        let err = RangeSet::from_ranges(
            "bad",
            vec![CodePointRange::new(1, 5), CodePointRange::new(5, 9)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CategoryError::NonMonotonic {
                class: "bad",
                offset: 2,
                previous: 5,
                boundary: 5,
            }
        );
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = RangeSet::from_ranges("bad", vec![CodePointRange::new(9, 1)]).unwrap_err();
        assert!(matches!(err, CategoryError::NonMonotonic { offset: 1, .. }));
    }

    #[test]
    fn test_structural_equality() {
        let split = RangeSet::from_ranges(
            "split",
            vec![CodePointRange::new(1, 2), CodePointRange::new(3, 4)],
        )
        .unwrap();
        let joined = RangeSet::from_ranges("joined", vec![CodePointRange::new(1, 4)]).unwrap();
        assert_eq!(split.contents(), joined.contents());
        assert_ne!(split, joined);
    }

    #[test]
    fn test_display() {
        assert_eq!(latin().to_string(), "[0041-005A, 0061-007A, 00AA]");
    }
}
