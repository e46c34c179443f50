//! Read-only chord table and progression lookup.

use tracing::debug;
use what3chords_core::config::TRIPLE_LEN;
use what3chords_core::ChordIndexTriple;

use crate::record::{ChordRecord, ChordVariant};
use crate::{Error, Result};

/// Ordered chord records, indexed from 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordTable {
    records: Vec<ChordRecord>,
}

impl ChordTable {
    pub fn new(records: Vec<ChordRecord>) -> Self {
        Self { records }
    }

    /// Flatten variants into one table: variants in the given order, each
    /// variant's positions in order.
    pub fn from_variants<'a>(variants: impl IntoIterator<Item = &'a ChordVariant>) -> Self {
        let records: Vec<_> = variants.into_iter().flat_map(|v| v.records()).collect();
        debug!("Flattened chord table: {} records", records.len());
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ChordRecord> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn records(&self) -> &[ChordRecord] {
        &self.records
    }

    /// Check the table covers every index a scheme with `n_chords` can emit.
    pub fn ensure_covers(&self, n_chords: u64) -> Result<()> {
        let required = usize::try_from(n_chords).unwrap_or(usize::MAX);
        if self.records.len() < required {
            return Err(Error::TableTooSmall {
                len: self.records.len(),
                required,
            });
        }
        Ok(())
    }

    pub fn progression(&self, triple: ChordIndexTriple) -> Result<Progression<'_>> {
        let [a, b, c] = triple.indices();
        Ok(Progression {
            indices: triple,
            chords: [self.get(a)?, self.get(b)?, self.get(c)?],
        })
    }
}

impl FromIterator<ChordRecord> for ChordTable {
    fn from_iter<I: IntoIterator<Item = ChordRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The three chords a location plays, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression<'a> {
    pub indices: ChordIndexTriple,
    pub chords: [&'a ChordRecord; TRIPLE_LEN],
}

impl<'a> Progression<'a> {
    pub fn names(&self) -> [&'a str; TRIPLE_LEN] {
        self.chords.map(|c| c.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ChordRecord> + '_ {
        self.chords.iter().copied()
    }
}
