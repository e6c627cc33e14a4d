//! Solution representation for the knapsack.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const WORD_BITS: usize = 64;

/// A selection of items: one flag per item, `true` meaning included.
///
/// Solutions are values. Operations that produce a different selection
/// return a new `Solution` and leave `self` untouched.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Solution {
    flags: Vec<bool>,
}

impl Solution {
    /// Create an empty selection over `n` items.
    pub fn new(n: usize) -> Self {
        Solution {
            flags: vec![false; n],
        }
    }

    /// Create a solution from explicit flags.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Solution { flags }
    }

    /// Parse a string of `0`/`1` digits. Returns `None` on any other character.
    pub fn from_bits(bits: &str) -> Option<Self> {
        bits.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(Solution::from_flags)
    }

    /// Number of items this selection ranges over.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check if the selection ranges over zero items.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether item `index` is included.
    pub fn is_selected(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// The raw flags in item order.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Indices of the included items, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &selected)| selected)
            .map(|(i, _)| i)
    }

    /// Number of included items.
    pub fn selected_count(&self) -> usize {
        self.flags.iter().filter(|&&selected| selected).count()
    }

    /// A copy of this solution with flag `index` inverted.
    pub fn flipped(&self, index: usize) -> Solution {
        let mut flags = self.flags.clone();
        flags[index] = !flags[index];
        Solution { flags }
    }

    /// Number of positions at which the two selections differ.
    pub fn hamming_distance(&self, other: &Solution) -> usize {
        debug_assert_eq!(self.len(), other.len());
        self.flags
            .iter()
            .zip(&other.flags)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Packed encoding used for tabu membership tests.
    pub fn signature(&self) -> Signature {
        let mut words = vec![0u64; self.flags.len().div_ceil(WORD_BITS)];
        for i in self.selected_indices() {
            words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
        Signature {
            len: self.flags.len(),
            words,
        }
    }

    /// The selection as a string of `0`/`1` digits in item order.
    pub fn to_bits(&self) -> String {
        self.flags
            .iter()
            .map(|&selected| if selected { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bits())
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solution({})", self.to_bits())
    }
}

impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bits())
    }
}

impl<'de> Deserialize<'de> for Solution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = String::deserialize(deserializer)?;
        Solution::from_bits(&bits)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid selection '{bits}'")))
    }
}

/// Canonical, order-preserving encoding of a [`Solution`].
///
/// Two signatures are equal exactly when the selections they were derived
/// from are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    len: usize,
    words: Vec<u64>,
}

impl Signature {
    /// Number of items encoded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the signature encodes zero items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
