//! Builder for configuring and constructing a `ChordLocator`.

use what3chords_chords::ChordTable;
use what3chords_core::{CellIndexer, DirectEncoder, EncoderConfig, HierarchicalDecoder};

use crate::{ChordLocator, Result, Scheme};

/// The indexer is required up front; everything else has a default. The
/// chord table must be supplied before `build()`, which checks it covers
/// every index the selected scheme can produce.
///
/// # Example
///
/// ```ignore
/// use what3chords::prelude::*;
///
/// let locator = ChordLocator::builder(H3oIndexer)
///     .scheme(Scheme::Direct)
///     .table(table)
///     .build()?;
/// ```
pub struct ChordLocatorBuilder<I> {
    indexer: I,
    config: EncoderConfig,
    table: ChordTable,
    scheme: Scheme,
}

impl<I: CellIndexer> ChordLocatorBuilder<I> {
    pub fn new(indexer: I) -> Self {
        Self {
            indexer,
            config: EncoderConfig::default(),
            table: ChordTable::default(),
            scheme: Scheme::default(),
        }
    }

    /// Default: [`Scheme::Hierarchical`]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(mut self, table: ChordTable) -> Self {
        self.table = table;
        self
    }

    pub fn build(self) -> Result<ChordLocator<I>> {
        self.config.validate()?;

        let required = match self.scheme {
            Scheme::Direct => self.config.direct.n_chords,
            Scheme::Hierarchical => self.config.hierarchical.n_chords,
        };
        self.table.ensure_covers(required)?;

        Ok(ChordLocator {
            direct: DirectEncoder::new(self.config.direct)?,
            hierarchical: HierarchicalDecoder::new(self.config.hierarchical)?,
            indexer: self.indexer,
            table: self.table,
            scheme: self.scheme,
        })
    }
}
