//! regcat: Unicode character classes for a regular-expression engine
//!
//! Every class (`Lu`, `Nd`, identifier characters, horizontal whitespace, ...)
//! ships as a compressed literal table that is decoded once into a sorted list
//! of inclusive ranges and then indexed into 256 blocks of 256 code points, so
//! a membership test is a single array access plus at most one bit test.
//!
//! ```
//! use regcat::Registry;
//!
//! let registry = Registry::new().unwrap();
//! let nd = registry.lookup("Nd").unwrap();
//! assert!(nd.contains_char('7'));
//! assert!(!nd.contains_char('x'));
//!
//! assert_eq!(regcat::case_fold('A'), 'a');
//! assert_eq!(regcat::match_bracket('('), ')');
//! ```
//!
//! Only the Basic Multilingual Plane is covered: code points are `u16`, and the
//! `char` adapters treat anything above `U+FFFF` as a member of no class.

pub mod category;
mod char_map;
mod folding;
mod predicate;
mod registry;
pub mod tables;

use std::fmt;

pub use category::{Block, BlockIndex, Category, CodePointRange, EncodedClass, RangeSet};
pub use char_map::CharMap;
pub use folding::{
    case_fold, case_up, fold_eq, match_bracket, reverse_bracket_equal, reverse_equal,
    reverse_with_brackets, Folding,
};
pub use predicate::{Operands, Predicate, PredicateCache};
pub use registry::Registry;

/// Errors raised while building the tables.
///
/// All of them mean the compiled-in data is inconsistent. None can happen at
/// query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// A data symbol has no entry in the class's delta dictionary.
    UnknownSymbol {
        class: &'static str,
        offset: usize,
        symbol: char,
    },
    /// Accumulated deltas ran past `0xFFFF`.
    Overflow { class: &'static str, offset: usize },
    /// A boundary does not keep the ranges sorted and disjoint.
    NonMonotonic {
        class: &'static str,
        offset: usize,
        previous: u16,
        boundary: u16,
    },
    /// Parallel key/value arrays of different lengths.
    LengthMismatch { keys: usize, values: usize },
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::UnknownSymbol {
                class,
                offset,
                symbol,
            } => write!(
                f,
                "class {}: symbol {:?} at offset {} has no directory entry",
                class, symbol, offset
            ),
            CategoryError::Overflow { class, offset } => {
                write!(f, "class {}: boundary at offset {} exceeds 0xFFFF", class, offset)
            }
            CategoryError::NonMonotonic {
                class,
                offset,
                previous,
                boundary,
            } => write!(
                f,
                "class {}: boundary {:#06x} at offset {} does not follow {:#06x}",
                class, boundary, offset, previous
            ),
            CategoryError::LengthMismatch { keys, values } => {
                write!(f, "char map has {} keys but {} values", keys, values)
            }
        }
    }
}

impl std::error::Error for CategoryError {}

/// Result alias used by every constructor in this crate.
pub type Result<T> = std::result::Result<T, CategoryError>;
