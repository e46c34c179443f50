//! The three chord indices an encoding produces.

use core::fmt;
use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::TRIPLE_LEN;
use crate::radix::{from_base_x, to_base_x};
use crate::Result;

/// First, second and third chord, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChordIndexTriple([usize; TRIPLE_LEN]);

impl ChordIndexTriple {
    pub const fn new(indices: [usize; TRIPLE_LEN]) -> Self {
        Self(indices)
    }

    /// Write `value` as exactly three base-`base` digits.
    pub fn from_value(value: u64, base: u64) -> Result<Self> {
        let digits = to_base_x(value, base, Some(TRIPLE_LEN))?;
        let mut indices = [0; TRIPLE_LEN];
        for (slot, digit) in indices.iter_mut().zip(digits) {
            *slot = digit as usize;
        }
        Ok(Self(indices))
    }

    /// The value whose base-`base` digits these are.
    pub fn value(&self, base: u64) -> Result<u64> {
        let digits = self.0.map(|i| i as u64);
        from_base_x(&digits, base)
    }

    pub const fn indices(&self) -> [usize; TRIPLE_LEN] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// True if every index is below `n`.
    pub fn fits(&self, n: usize) -> bool {
        self.0.iter().all(|&i| i < n)
    }
}

impl Index<usize> for ChordIndexTriple {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.0[i]
    }
}

impl From<ChordIndexTriple> for [usize; TRIPLE_LEN] {
    fn from(triple: ChordIndexTriple) -> Self {
        triple.0
    }
}

impl fmt::Display for ChordIndexTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}
