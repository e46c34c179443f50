//! The decodable slice of a hierarchical cell index.
//!
//! A payload is [`PAYLOAD_BITS`] wide and addressed most-significant bit
//! first, matching the textual bit-string form: position 0 is the leftmost
//! character. Layout: a 7-bit region number followed by one 3-bit base-7
//! digit per resolution level.

use core::fmt;
use core::str::FromStr;

use crate::config::{
    DIGIT_BITS, H3_RESOLUTION, MAX_REGION, PAYLOAD_BITS, PAYLOAD_OFFSET, REGION_BITS,
};
use crate::{Error, Result};

const RESOLUTION: usize = H3_RESOLUTION as usize;
const PAYLOAD_MASK: u64 = (1 << PAYLOAD_BITS) - 1;
const DIGIT_MASK: u64 = (1 << DIGIT_BITS) - 1;

/// Digit value marking "no child cell".
pub const NO_CHILD: u8 = 0b111;

/// Start of the extra 3-bit window the swap guard rejects when it reads `111`.
pub const SWAP_GUARD_OFFSET: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadBits(u64);

impl PayloadBits {
    pub const WIDTH: usize = PAYLOAD_BITS;

    /// Returns `None` if `raw` has bits set above [`Self::WIDTH`].
    pub const fn from_raw(raw: u64) -> Option<Self> {
        if raw & !PAYLOAD_MASK != 0 {
            return None;
        }
        Some(Self(raw))
    }

    /// Slice the payload out of a full 64-bit cell index.
    pub const fn from_cell_index(index: u64) -> Self {
        Self((index >> (64 - PAYLOAD_OFFSET - PAYLOAD_BITS)) & PAYLOAD_MASK)
    }

    /// Assemble a payload from a region number and its digits.
    ///
    /// Only representability is checked (region < 128, digits < 8); use
    /// [`is_valid`](Self::is_valid) for cell validity.
    pub fn from_parts(region: u64, digits: &[u8; RESOLUTION]) -> Result<Self> {
        if region >= 1 << REGION_BITS {
            return Err(Error::InvalidRegion(region));
        }
        let mut raw = region;
        for (position, &value) in digits.iter().enumerate() {
            if u64::from(value) > DIGIT_MASK {
                return Err(Error::InvalidCellDigit { position, value });
            }
            raw = (raw << DIGIT_BITS) | u64::from(value);
        }
        Ok(Self(raw))
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Bit at `position`, counted from the left. `None` past [`Self::WIDTH`].
    pub fn bit(self, position: usize) -> Option<bool> {
        (position < Self::WIDTH).then(|| self.bit_at(position))
    }

    /// Copy with the bits at `a` and `b` exchanged. `None` if either
    /// position is past [`Self::WIDTH`].
    pub fn swapped(self, a: usize, b: usize) -> Option<Self> {
        (a < Self::WIDTH && b < Self::WIDTH).then(|| self.swapped_at(a, b))
    }

    /// Callers guarantee `position < WIDTH`.
    pub(crate) fn bit_at(self, position: usize) -> bool {
        debug_assert!(position < Self::WIDTH);
        (self.0 >> (Self::WIDTH - 1 - position)) & 1 == 1
    }

    /// Callers guarantee both positions are below `WIDTH`.
    pub(crate) fn swapped_at(self, a: usize, b: usize) -> Self {
        if self.bit_at(a) == self.bit_at(b) {
            return self;
        }
        let mask = (1 << (Self::WIDTH - 1 - a)) | (1 << (Self::WIDTH - 1 - b));
        Self(self.0 ^ mask)
    }

    /// Keep only the low [`Self::WIDTH`] bits of `raw`.
    pub(crate) const fn from_raw_masked(raw: u64) -> Self {
        Self(raw & PAYLOAD_MASK)
    }

    pub const fn region(self) -> u64 {
        self.0 >> (DIGIT_BITS * RESOLUTION)
    }

    /// Digit `level` (0 = coarsest). May be [`NO_CHILD`]; `None` past the
    /// last level.
    pub fn digit(self, level: usize) -> Option<u8> {
        (level < RESOLUTION).then(|| self.digit_at(level))
    }

    fn digit_at(self, level: usize) -> u8 {
        let shift = DIGIT_BITS * (RESOLUTION - 1 - level);
        ((self.0 >> shift) & DIGIT_MASK) as u8
    }

    pub fn digits(self) -> [u8; RESOLUTION] {
        let mut digits = [0; RESOLUTION];
        for (level, slot) in digits.iter_mut().enumerate() {
            *slot = self.digit_at(level);
        }
        digits
    }

    /// The 3-bit window at [`SWAP_GUARD_OFFSET`], one bit into the first
    /// digit group.
    fn guard_window(self) -> u64 {
        (self.0 >> (Self::WIDTH - SWAP_GUARD_OFFSET - DIGIT_BITS)) & DIGIT_MASK
    }

    /// True if the region is a real top-level cell, no digit is the
    /// "no child" sentinel, and the window at [`SWAP_GUARD_OFFSET`] is not
    /// `111`.
    ///
    /// The window straddles the first two digits, so it rejects some real
    /// cells (first digit 3, second digit 4 or more). Swaps guarded by this
    /// check are never applied to those cells.
    pub fn is_valid(self) -> bool {
        self.region() <= MAX_REGION
            && self.digits().iter().all(|&d| d != NO_CHILD)
            && self.guard_window() != u64::from(NO_CHILD)
    }
}

impl fmt::Display for PayloadBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.0, width = Self::WIDTH)
    }
}

impl FromStr for PayloadBits {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != Self::WIDTH || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(Error::MalformedPayload(s.to_string()));
        }
        u64::from_str_radix(s, 2)
            .map(Self)
            .map_err(|_| Error::MalformedPayload(s.to_string()))
    }
}

/// Whether `bits` is a structurally valid payload string: the right width,
/// only `0`/`1`, region at most 121, no `111` digit group and no `111` at
/// bits 8..11.
///
/// ```
/// use what3chords_core::is_valid_hierarchical_payload;
///
/// assert!(is_valid_hierarchical_payload("0010100000110000100000101000000011"));
/// assert!(!is_valid_hierarchical_payload("1111010000000000000000000000000000"));
/// ```
pub fn is_valid_hierarchical_payload(bits: &str) -> bool {
    bits.parse::<PayloadBits>()
        .map(PayloadBits::is_valid)
        .unwrap_or(false)
}
