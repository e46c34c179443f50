//! Seam for the external hierarchical spatial index.
//!
//! This crate never computes cells itself. Anything that can answer
//! "which resolution-`r` cell contains (lat, lon)" as a hex string can be
//! plugged in, including a plain closure.

use crate::Result;

pub trait CellIndexer {
    /// Hex index of the cell containing the point at `resolution`.
    fn cell_index(&self, lat: f64, lon: f64, resolution: u8) -> Result<String>;
}

impl<F> CellIndexer for F
where
    F: Fn(f64, f64, u8) -> Result<String>,
{
    fn cell_index(&self, lat: f64, lon: f64, resolution: u8) -> Result<String> {
        self(lat, lon, resolution)
    }
}

#[cfg(feature = "h3o")]
pub use self::h3::H3oIndexer;

#[cfg(feature = "h3o")]
mod h3 {
    use super::CellIndexer;
    use crate::{Error, Result};
    use h3o::{LatLng, Resolution};

    /// [`CellIndexer`] backed by the `h3o` crate.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct H3oIndexer;

    impl CellIndexer for H3oIndexer {
        fn cell_index(&self, lat: f64, lon: f64, resolution: u8) -> Result<String> {
            let resolution =
                Resolution::try_from(resolution).map_err(|e| Error::Indexer(e.to_string()))?;
            let point = LatLng::new(lat, lon).map_err(|e| Error::Indexer(e.to_string()))?;
            Ok(format!("{:016x}", u64::from(point.to_cell(resolution))))
        }
    }

}
