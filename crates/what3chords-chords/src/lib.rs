//! Chord records and lookup for what3chords.
//!
//! The encoders in `what3chords-core` produce index triples; this crate
//! owns the table those indices point into.
//!
//! - [`ChordRecord`]: name, MIDI notes, fret/finger patterns, capo
//! - [`ChordVariant`] / [`ChordPosition`]: raw chord-library data, flattened
//!   into records in a fixed order
//! - [`ChordTable`]: read-only table, [`Progression`] lookup
//! - [`note`]: MIDI note names and frequencies
//!
//! Loading the table from disk is left to the host application; build a
//! [`ChordTable`] from whatever source it uses.

pub mod error;
pub use error::{Error, Result};

pub mod note;
mod record;
mod table;

pub use note::{note_name, note_to_hz};
pub use record::{ChordPosition, ChordRecord, ChordVariant};
pub use table::{ChordTable, Progression};
