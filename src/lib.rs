//! # what3chords
//!
//! Click anywhere on the map, hear three chords that belong to that spot.
//!
//! ## Architecture
//!
//! what3chords is an umbrella crate that coordinates:
//! - **what3chords-core** - Coordinate-to-index encoding (direct grid scheme,
//!   hierarchical cell scheme, bit swaps, numeral-base conversion)
//! - **what3chords-chords** - Chord records, table lookup, MIDI note helpers
//!
//! ## Quick Start
//!
//! ```ignore
//! use what3chords::prelude::*;
//!
//! let locator = ChordLocator::builder(H3oIndexer)
//!     .table(table)
//!     .build()?;
//!
//! let progression = locator.locate(Coordinate::new(-0.1276, 51.5072)?)?;
//! for chord in progression.iter() {
//!     println!("{} {}", chord.name, chord.frets);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `h3o` - Cell indexer backed by the `h3o` crate

/// Re-export of what3chords-core for direct access
pub use what3chords_core as core;

/// Re-export of what3chords-chords for direct access
pub use what3chords_chords as chords;

// Encoding
pub use what3chords_core::{
    encode_direct, encode_hierarchical, is_valid_hierarchical_payload, to_base_x, BitSwapSpec,
    CellIndexer, ChordIndexTriple, Coordinate, DirectConfig, DirectEncoder, EncoderConfig,
    HierarchicalConfig, HierarchicalDecoder, OverflowPolicy,
};

#[cfg(feature = "h3o")]
pub use what3chords_core::H3oIndexer;

// Chords
pub use what3chords_chords::{ChordRecord, ChordTable, Progression};

mod error;
pub use error::{Error, Result};

mod builder;
mod locator;

pub use builder::ChordLocatorBuilder;
pub use locator::{ChordLocator, LocatedCodes, Scheme};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{ChordLocator, ChordLocatorBuilder, LocatedCodes, Scheme};

    pub use crate::core::{ChordIndexTriple, Coordinate, EncoderConfig};

    pub use crate::chords::{ChordRecord, ChordTable, Progression};

    pub use crate::core::CellIndexer;

    #[cfg(feature = "h3o")]
    pub use crate::core::H3oIndexer;
}
