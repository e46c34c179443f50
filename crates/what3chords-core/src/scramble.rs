//! Fixed bit permutation over the payload.
//!
//! An alternative to the guarded swaps: every bit moves, nothing is
//! validated, and the inverse is exact for every input. The standard table
//! deals the digit bits out column by column (every digit's high bit, then
//! every middle bit, then every low bit) and reverses the region bits at
//! the end.

use crate::config::PAYLOAD_BITS;
use crate::payload::PayloadBits;
use crate::{Error, Result};

/// `STANDARD_SOURCES[i]` is the input position that lands at output `i`.
const STANDARD_SOURCES: [usize; PAYLOAD_BITS] = [
    7, 10, 13, 16, 19, 22, 25, 28, 31, //
    8, 11, 14, 17, 20, 23, 26, 29, 32, //
    9, 12, 15, 18, 21, 24, 27, 30, 33, //
    6, 5, 4, 3, 2, 1, 0,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPermutation {
    sources: [usize; PAYLOAD_BITS],
    targets: [usize; PAYLOAD_BITS],
}

impl Default for BitPermutation {
    fn default() -> Self {
        Self::standard()
    }
}

impl BitPermutation {
    pub fn standard() -> Self {
        Self {
            sources: STANDARD_SOURCES,
            targets: invert(&STANDARD_SOURCES),
        }
    }

    /// Fails unless `sources` uses every position exactly once.
    pub fn new(sources: [usize; PAYLOAD_BITS]) -> Result<Self> {
        let mut seen = [false; PAYLOAD_BITS];
        for &s in &sources {
            if s >= PAYLOAD_BITS || seen[s] {
                return Err(Error::InvalidConfig(format!(
                    "bit permutation repeats or exceeds position {s}"
                )));
            }
            seen[s] = true;
        }
        Ok(Self {
            sources,
            targets: invert(&sources),
        })
    }

    pub fn sources(&self) -> &[usize; PAYLOAD_BITS] {
        &self.sources
    }

    pub fn forward(&self, payload: PayloadBits) -> PayloadBits {
        gather(payload, &self.sources)
    }

    pub fn inverse(&self, payload: PayloadBits) -> PayloadBits {
        gather(payload, &self.targets)
    }
}

fn invert(sources: &[usize; PAYLOAD_BITS]) -> [usize; PAYLOAD_BITS] {
    let mut targets = [0; PAYLOAD_BITS];
    for (out, &src) in sources.iter().enumerate() {
        targets[src] = out;
    }
    targets
}

fn gather(payload: PayloadBits, sources: &[usize; PAYLOAD_BITS]) -> PayloadBits {
    let raw = sources
        .iter()
        .fold(0u64, |acc, &src| (acc << 1) | u64::from(payload.bit_at(src)));
    debug_assert!(raw >> PAYLOAD_BITS == 0, "gathered more than {PAYLOAD_BITS} bits");
    PayloadBits::from_raw_masked(raw)
}
