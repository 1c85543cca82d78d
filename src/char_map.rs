//! Fixed bidirectional code-point map built from parallel literal arrays.

use rustc_hash::FxHashMap;

use crate::{CategoryError, Result};

/// A read-only map between two parallel arrays of code points.
///
/// `keys[i]` maps to `values[i]` and back. When either side repeats, the first
/// pairing wins in that direction, so the literal arrays list preferred
/// pairings first.
#[derive(Debug, Clone, Default)]
pub struct CharMap {
    forward: FxHashMap<u16, u16>,
    backward: FxHashMap<u16, u16>,
}

impl CharMap {
    pub fn new(keys: &[u16], values: &[u16]) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(CategoryError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self::from_parallel(keys, values))
    }

    /// Build from arrays whose lengths are already known to match.
    pub(crate) fn from_parallel(keys: &[u16], values: &[u16]) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        let mut forward = FxHashMap::default();
        let mut backward = FxHashMap::default();
        forward.reserve(keys.len());
        backward.reserve(values.len());
        for (&key, &value) in keys.iter().zip(values) {
            forward.entry(key).or_insert(value);
            backward.entry(value).or_insert(key);
        }
        Self { forward, backward }
    }

    /// Value paired with `key`, if any.
    #[inline]
    pub fn get(&self, key: u16) -> Option<u16> {
        self.forward.get(&key).copied()
    }

    /// Key paired with `value`, if any.
    #[inline]
    pub fn get_key(&self, value: u16) -> Option<u16> {
        self.backward.get(&value).copied()
    }

    #[inline]
    pub fn contains_key(&self, key: u16) -> bool {
        self.forward.contains_key(&key)
    }

    #[inline]
    pub fn contains_value(&self, value: u16) -> bool {
        self.backward.contains_key(&value)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
