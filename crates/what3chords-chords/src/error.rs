//! Error types for chord table lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Chord index {index} out of range (table has {len} chords)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Chord table has {len} chords, scheme needs {required}")]
    TableTooSmall { len: usize, required: usize },

    #[error("Invalid MIDI note: {0}. Must be between 0 and 127")]
    InvalidNote(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
