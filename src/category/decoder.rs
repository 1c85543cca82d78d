//! Decoding of the compressed range tables.
//!
//! Range boundaries of a Unicode class cluster tightly, so instead of storing
//! each boundary the tables store the gap to the previous one. The distinct
//! gaps of a class go into a small dictionary and the class itself becomes a
//! string of one-character references into it.
//!
//! # Format
//!
//! ```text
//! directory: [0, 31, 32, 96]     data: " !#\""
//!
//! symbol  ' '  '!'  '#'  '"'
//! index    0    1    3    2        (code point - 32)
//! delta    0   31   96   32
//! pos      0   31  127  159        (running sum)
//!          lo   hi   lo   hi   =>  [0x00-0x1F, 0x7F-0x9F]
//! ```
//!
//! Even positions open a range, odd positions close it, both inclusive. An
//! odd-length sequence ends with a terminator boundary that closes nothing
//! and is dropped.

use log::trace;

use super::range_set::{CodePointRange, RangeSet};
use crate::{CategoryError, Result};

/// Offset subtracted from a data symbol to get its directory index.
const SYMBOL_BASE: u32 = 32;

/// One class as it is stored in the program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedClass {
    name: &'static str,
    directory: &'static [u16],
    data: &'static str,
}

impl EncodedClass {
    pub const fn new(name: &'static str, directory: &'static [u16], data: &'static str) -> Self {
        Self {
            name,
            directory,
            data,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn directory(&self) -> &'static [u16] {
        self.directory
    }

    #[inline]
    pub fn data(&self) -> &'static str {
        self.data
    }

    /// Decode into the raw boundary sequence, terminator included.
    pub fn boundaries(&self) -> Result<Vec<u16>> {
        let mut out = Vec::with_capacity(self.data.len());
        let mut pos: u32 = 0;
        for (offset, symbol) in self.data.chars().enumerate() {
            pos += u32::from(self.delta(offset, symbol)?);
            let boundary = u16::try_from(pos).map_err(|_| CategoryError::Overflow {
                class: self.name,
                offset,
            })?;
            out.push(boundary);
        }
        Ok(out)
    }

    /// Decode into a validated range set.
    ///
    /// Fails if a symbol is missing from the directory, if the running sum
    /// leaves the 16-bit space, or if a range does not start strictly after
    /// the previous one ends.
    pub fn decode(&self) -> Result<RangeSet> {
        let mut ranges = Vec::with_capacity(self.data.len() / 2);
        let mut len = 0usize;
        let mut last_hi: Option<u16> = None;
        let mut open: Option<(usize, u16)> = None;
        let mut pos: u32 = 0;

        for (offset, symbol) in self.data.chars().enumerate() {
            pos += u32::from(self.delta(offset, symbol)?);
            let boundary = u16::try_from(pos).map_err(|_| CategoryError::Overflow {
                class: self.name,
                offset,
            })?;

            match open.take() {
                None => open = Some((offset, boundary)),
                Some((lo_offset, lo)) => {
                    // Deltas are unsigned so hi >= lo always holds; only the
                    // gap to the previous range needs checking.
                    if let Some(previous) = last_hi {
                        if lo <= previous {
                            return Err(CategoryError::NonMonotonic {
                                class: self.name,
                                offset: lo_offset,
                                previous,
                                boundary: lo,
                            });
                        }
                    }
                    let range = CodePointRange::new(lo, boundary);
                    len += range.len();
                    ranges.push(range);
                    last_hi = Some(boundary);
                }
            }
        }

        if let Some((offset, terminator)) = open {
            trace!(
                "class {}: dropping terminator {:#06x} at offset {}",
                self.name,
                terminator,
                offset
            );
        }

        Ok(RangeSet::from_sorted(ranges, len))
    }

    fn delta(&self, offset: usize, symbol: char) -> Result<u16> {
        u32::from(symbol)
            .checked_sub(SYMBOL_BASE)
            .and_then(|i| self.directory.get(i as usize))
            .copied()
            .ok_or(CategoryError::UnknownSymbol {
                class: self.name,
                offset,
                symbol,
            })
    }
}
