//! Centralized error type for the what3chords umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] what3chords_core::Error),

    #[error("Chords: {0}")]
    Chords(#[from] what3chords_chords::Error),
}

impl Error {
    /// Encoding failure family, if this came from an encoder.
    pub fn kind(&self) -> Option<what3chords_core::ErrorKind> {
        match self {
            Error::Core(e) => Some(e.kind()),
            Error::Chords(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
