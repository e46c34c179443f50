//! Coordinate to progression, end to end.

use serde::{Deserialize, Serialize};
use tracing::debug;
use what3chords_chords::{ChordTable, Progression};
use what3chords_core::config::H3_RESOLUTION;
use what3chords_core::{
    CellIndexer, ChordIndexTriple, Coordinate, DirectEncoder, HierarchicalDecoder,
};

use crate::{ChordLocatorBuilder, Result};

/// Which encoding picks the chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Direct,
    #[default]
    Hierarchical,
}

/// Both codes for one coordinate, plus the cell the hierarchical one came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedCodes {
    pub coordinate: Coordinate,
    pub cell: String,
    pub direct: ChordIndexTriple,
    pub hierarchical: ChordIndexTriple,
}

impl LocatedCodes {
    pub fn for_scheme(&self, scheme: Scheme) -> ChordIndexTriple {
        match scheme {
            Scheme::Direct => self.direct,
            Scheme::Hierarchical => self.hierarchical,
        }
    }
}

/// Encoders, cell indexer and chord table wired together.
///
/// # Example
///
/// ```
/// use what3chords::prelude::*;
/// use what3chords::core::Result as CoreResult;
///
/// let indexer = |_lat: f64, _lon: f64, _res: u8| -> CoreResult<String> {
///     Ok("8928308280fffff".to_string())
/// };
/// let table: ChordTable = (0..2141)
///     .map(|i| ChordRecord {
///         name: format!("chord {i}"),
///         midi: vec![40, 47, 52],
///         frets: "022000".into(),
///         capo: 0,
///         fingers: "023000".into(),
///     })
///     .collect();
///
/// let locator = ChordLocator::builder(indexer).table(table).build()?;
/// let progression = locator.locate(Coordinate::new(-122.41, 37.77)?)?;
/// assert_eq!(progression.names(), ["chord 283", "chord 1118", "chord 176"]);
/// # Ok::<(), what3chords::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChordLocator<I> {
    pub(crate) direct: DirectEncoder,
    pub(crate) hierarchical: HierarchicalDecoder,
    pub(crate) indexer: I,
    pub(crate) table: ChordTable,
    pub(crate) scheme: Scheme,
}

impl<I: CellIndexer> ChordLocator<I> {
    pub fn builder(indexer: I) -> ChordLocatorBuilder<I> {
        ChordLocatorBuilder::new(indexer)
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn table(&self) -> &ChordTable {
        &self.table
    }

    pub fn direct(&self) -> &DirectEncoder {
        &self.direct
    }

    pub fn hierarchical(&self) -> &HierarchicalDecoder {
        &self.hierarchical
    }

    /// Hex index of the resolution-9 cell containing `coordinate`.
    pub fn cell(&self, coordinate: Coordinate) -> Result<String> {
        Ok(self
            .indexer
            .cell_index(coordinate.lat(), coordinate.lon(), H3_RESOLUTION)?)
    }

    /// Code from the active scheme only.
    pub fn code(&self, coordinate: Coordinate) -> Result<ChordIndexTriple> {
        match self.scheme {
            Scheme::Direct => Ok(self.direct.encode(coordinate)?),
            Scheme::Hierarchical => Ok(self.hierarchical.encode(&self.cell(coordinate)?)?),
        }
    }

    /// Both codes, for comparing the schemes.
    pub fn codes(&self, coordinate: Coordinate) -> Result<LocatedCodes> {
        let cell = self.cell(coordinate)?;
        let codes = LocatedCodes {
            coordinate,
            direct: self.direct.encode(coordinate)?,
            hierarchical: self.hierarchical.encode(&cell)?,
            cell,
        };
        debug!(
            "LatLon code: {} H3 code: {} ({})",
            codes.direct, codes.hierarchical, codes.cell
        );
        Ok(codes)
    }

    /// The progression the active scheme assigns to `coordinate`.
    pub fn locate(&self, coordinate: Coordinate) -> Result<Progression<'_>> {
        let triple = self.code(coordinate)?;
        Ok(self.table.progression(triple)?)
    }
}
