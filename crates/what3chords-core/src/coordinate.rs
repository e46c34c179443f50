//! Geographic input type.

use serde::{Deserialize, Serialize};

use crate::config::{LON_LIMIT, WEB_MERC_LIMIT};
use crate::{Error, Result};

/// A longitude/latitude pair inside the Web Mercator square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lon: f64,
    lat: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.lon, raw.lat)
    }
}

impl Coordinate {
    /// Fails if either component is non-finite, `|lon| > 180` or
    /// `|lat| > 85.051129`.
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        let in_range = lon.is_finite()
            && lat.is_finite()
            && lon.abs() <= LON_LIMIT
            && lat.abs() <= WEB_MERC_LIMIT;
        if !in_range {
            return Err(Error::CoordinateOutOfRange { lon, lat });
        }
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}
