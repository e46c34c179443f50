//! Error types for what3chords-core.

use thiserror::Error;

/// The two failure families a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric precondition was violated: numeral base, digit count,
    /// coordinate range or configuration.
    Domain,
    /// A hierarchical index or payload does not describe a real cell.
    MalformedIndex,
}

/// Error type for what3chords-core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid numeral base: {0}. Must be at least 2")]
    InvalidBase(u64),

    #[error("Invalid digit count: {0}. Must be at least 1")]
    InvalidDigitCount(usize),

    #[error("{value} does not fit in {digits} base-{base} digits")]
    DigitOverflow { value: u64, base: u64, digits: usize },

    #[error("Digit {digit} out of range for base {base}")]
    InvalidDigit { digit: u64, base: u64 },

    #[error("{digits} base-{base} digits overflow a 64-bit value")]
    ValueOverflow { base: u64, digits: usize },

    #[error("Alphabet has {len} symbols, base {base} needs at least that many")]
    AlphabetTooShort { len: usize, base: u64 },

    #[error("Coordinate out of range: lon={lon}, lat={lat}")]
    CoordinateOutOfRange { lon: f64, lat: f64 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Malformed hierarchical index: {0:?}")]
    MalformedIndex(String),

    #[error("Malformed payload bits: {0:?}")]
    MalformedPayload(String),

    #[error("Invalid region: {0}. Must be between 0 and 121")]
    InvalidRegion(u64),

    #[error("Invalid cell digit at position {position}: {value}. Must be between 0 and 6")]
    InvalidCellDigit { position: usize, value: u8 },

    #[error("Cell indexer: {0}")]
    Indexer(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidBase(_)
            | Error::InvalidDigitCount(_)
            | Error::DigitOverflow { .. }
            | Error::InvalidDigit { .. }
            | Error::ValueOverflow { .. }
            | Error::AlphabetTooShort { .. }
            | Error::CoordinateOutOfRange { .. }
            | Error::InvalidConfig(_) => ErrorKind::Domain,

            Error::MalformedIndex(_)
            | Error::MalformedPayload(_)
            | Error::InvalidRegion(_)
            | Error::InvalidCellDigit { .. }
            | Error::Indexer(_) => ErrorKind::MalformedIndex,
        }
    }
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
