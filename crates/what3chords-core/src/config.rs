//! Encoder configuration.
//!
//! All constants the encoders use live here. Configs are plain values:
//! build one, `validate()` it (encoders do this on construction), and it
//! never changes afterwards.

use serde::{Deserialize, Serialize};

use crate::bitswap::BitSwapSpec;
use crate::{Error, Result};

/// Latitude bound of the Web Mercator projection, in degrees.
pub const WEB_MERC_LIMIT: f64 = 85.051129;

/// Longitude bound, in degrees.
pub const LON_LIMIT: f64 = 180.0;

/// The only hierarchical resolution this crate decodes.
pub const H3_RESOLUTION: u8 = 9;

/// Bits of the 64-bit cell index that precede the payload.
pub const PAYLOAD_OFFSET: usize = 12;

pub const REGION_BITS: usize = 7;

pub const DIGIT_BITS: usize = 3;

/// Region digit plus one base-7 digit per resolution level.
pub const PAYLOAD_BITS: usize = REGION_BITS + DIGIT_BITS * H3_RESOLUTION as usize;

/// Highest region number that denotes a real top-level cell.
pub const MAX_REGION: u64 = 121;

/// Every encoding produces this many chord indices.
pub const TRIPLE_LEN: usize = 3;

/// Chord table size addressed by the direct scheme.
pub const N_CHORDS_DIRECT: u64 = 2141;

/// Chord table size addressed by the hierarchical scheme.
pub const N_CHORDS_HIERARCHICAL: u64 = 1692;

/// What to do when a value needs more than [`TRIPLE_LEN`] digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the leading digits (drop the low ones until three remain).
    #[default]
    Truncate,
    /// Keep the low digits (reduce modulo `n_chords^3`).
    Wrap,
    /// Fail with [`Error::DigitOverflow`].
    Reject,
}

/// Configuration for the direct lat/lon scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectConfig {
    /// Grid cells along the longitude axis.
    pub lon_res: u64,
    /// Grid cells along the latitude axis.
    pub lat_res: u64,
    /// Arnold's cat iterations.
    pub cat_shuffles: u32,
    pub n_chords: u64,
    /// Latitude bound the grid spans, symmetric around the equator.
    pub lat_limit: f64,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            lon_res: 130_400,
            lat_res: 65_200,
            cat_shuffles: 15,
            n_chords: N_CHORDS_DIRECT,
            lat_limit: WEB_MERC_LIMIT,
        }
    }
}

impl DirectConfig {
    pub fn validate(&self) -> Result<()> {
        if self.lon_res == 0 || self.lat_res == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid resolution {}x{} must be non-zero",
                self.lon_res, self.lat_res
            )));
        }
        if self.n_chords < 2 {
            return Err(Error::InvalidConfig(format!(
                "n_chords {} must be at least 2",
                self.n_chords
            )));
        }
        if !(self.lat_limit > 0.0 && self.lat_limit <= 90.0) {
            return Err(Error::InvalidConfig(format!(
                "lat_limit {} out of range (0-90 degrees)",
                self.lat_limit
            )));
        }

        // Largest linear index is lon_res + lat_res * lon_res; it has to fit
        // in three digits.
        let max_index = self
            .lat_res
            .checked_mul(self.lon_res)
            .and_then(|v| v.checked_add(self.lon_res));
        let capacity = self.n_chords.checked_pow(TRIPLE_LEN as u32);
        match (max_index, capacity) {
            (Some(max), Some(cap)) if max >= cap => Err(Error::InvalidConfig(format!(
                "grid of {}x{} does not fit in {} base-{} digits",
                self.lon_res, self.lat_res, TRIPLE_LEN, self.n_chords
            ))),
            (None, _) => Err(Error::InvalidConfig(format!(
                "grid of {}x{} overflows a 64-bit index",
                self.lon_res, self.lat_res
            ))),
            _ => Ok(()),
        }
    }
}

/// Configuration for the hierarchical cell scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchicalConfig {
    pub n_chords: u64,
    pub swaps: BitSwapSpec,
    pub overflow: OverflowPolicy,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            n_chords: N_CHORDS_HIERARCHICAL,
            swaps: BitSwapSpec::standard(),
            overflow: OverflowPolicy::Truncate,
        }
    }
}

impl HierarchicalConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n_chords < 2 {
            return Err(Error::InvalidConfig(format!(
                "n_chords {} must be at least 2",
                self.n_chords
            )));
        }
        if self.n_chords.checked_pow(TRIPLE_LEN as u32).is_none() {
            return Err(Error::InvalidConfig(format!(
                "n_chords {} overflows a 64-bit index",
                self.n_chords
            )));
        }
        Ok(())
    }

    /// Number of distinct triples this config can address.
    pub(crate) fn capacity(&self) -> u64 {
        self.n_chords.saturating_pow(TRIPLE_LEN as u32)
    }
}

/// Both schemes' settings in one place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub direct: DirectConfig,
    pub hierarchical: HierarchicalConfig,
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<()> {
        self.direct.validate()?;
        self.hierarchical.validate()
    }
}
