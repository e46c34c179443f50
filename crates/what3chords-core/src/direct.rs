//! Direct lat/lon scheme.
//!
//! Snap the coordinate to an integer grid, scatter the grid cell with
//! Arnold's cat map, linearise, and write the result as three base-N
//! digits. One-way and lossy: distinct coordinates can share a triple.

use tracing::{debug, trace};

use crate::cat_map::shuffle;
use crate::config::{DirectConfig, LON_LIMIT, TRIPLE_LEN};
use crate::{ChordIndexTriple, Coordinate, Error, Result};

/// Map `x` from `[xmin, xmax]` onto `[mn, mx]`.
///
/// Evaluated as `mn + (mx - mn) * (x - xmin) / (xmax - xmin)` so results are
/// reproducible to the bit.
#[inline]
pub fn rescale(x: f64, xmin: f64, xmax: f64, mn: f64, mx: f64) -> f64 {
    mn + (mx - mn) * (x - xmin) / (xmax - xmin)
}

/// Encoder for the direct scheme. Immutable once built.
#[derive(Debug, Clone)]
pub struct DirectEncoder {
    config: DirectConfig,
}

impl Default for DirectEncoder {
    fn default() -> Self {
        Self {
            config: DirectConfig::default(),
        }
    }
}

impl DirectEncoder {
    pub fn new(config: DirectConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            lon_res = config.lon_res,
            lat_res = config.lat_res,
            cat_shuffles = config.cat_shuffles,
            n_chords = config.n_chords,
            "direct encoder ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &DirectConfig {
        &self.config
    }

    /// Grid cell containing `coordinate`, before shuffling.
    pub fn grid_cell(&self, coordinate: Coordinate) -> Result<(u64, u64)> {
        let (lon, lat) = (coordinate.lon(), coordinate.lat());
        let limit = self.config.lat_limit;
        if lat.abs() > limit {
            return Err(Error::CoordinateOutOfRange { lon, lat });
        }

        let x = rescale(lon, -LON_LIMIT, LON_LIMIT, 0.0, self.config.lon_res as f64);
        let y = rescale(lat, -limit, limit, 0.0, self.config.lat_res as f64);
        Ok((x.round() as u64, y.round() as u64))
    }

    /// Grid cell after Arnold's cat scattering.
    pub fn shuffled_cell(&self, coordinate: Coordinate) -> Result<(u64, u64)> {
        let (x, y) = self.grid_cell(coordinate)?;
        let lon_res = self.config.lon_res as f64;
        let lat_res = self.config.lat_res as f64;

        let unit = (
            rescale(x as f64, 0.0, lon_res, 0.0, 1.0),
            rescale(y as f64, 0.0, lat_res, 0.0, 1.0),
        );
        let (u, v) = shuffle(unit, self.config.cat_shuffles);

        Ok((
            rescale(u, 0.0, 1.0, 0.0, lon_res).round() as u64,
            rescale(v, 0.0, 1.0, 0.0, lat_res).round() as u64,
        ))
    }

    /// Row-major index of the shuffled cell: `x + y * lon_res`.
    pub fn linear_index(&self, coordinate: Coordinate) -> Result<u64> {
        let (x, y) = self.shuffled_cell(coordinate)?;
        Ok(x + y * self.config.lon_res)
    }

    pub fn encode(&self, coordinate: Coordinate) -> Result<ChordIndexTriple> {
        let index = self.linear_index(coordinate)?;
        let triple = ChordIndexTriple::from_value(index, self.config.n_chords)?;
        trace!(
            lon = coordinate.lon(),
            lat = coordinate.lat(),
            index,
            %triple,
            "direct code"
        );
        debug_assert!(triple.fits(self.config.n_chords as usize));
        debug_assert_eq!(triple.indices().len(), TRIPLE_LEN);
        Ok(triple)
    }
}

/// Encode with the default direct constants.
///
/// ```
/// use what3chords_core::{encode_direct, Coordinate};
///
/// let triple = encode_direct(Coordinate::new(0.0, 0.0).unwrap()).unwrap();
/// assert_eq!(triple.indices(), [927, 862, 1971]);
/// ```
pub fn encode_direct(coordinate: Coordinate) -> Result<ChordIndexTriple> {
    DirectEncoder::default().encode(coordinate)
}
