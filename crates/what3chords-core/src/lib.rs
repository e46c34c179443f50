//! Coordinate-to-chord index encoding.
//!
//! Turns a point on the map into three indices into a chord table. Two
//! independent schemes:
//!
//! - **Direct** ([`DirectEncoder`]): snap to a 130400 x 65200 grid, scatter
//!   with Arnold's cat map, write the cell number as three base-2141 digits.
//! - **Hierarchical** ([`HierarchicalDecoder`]): take the resolution-9
//!   hierarchical cell index, scramble its region and base-7 digits with
//!   validity-guarded bit swaps, write the value as three base-1692 digits.
//!
//! Everything here is pure and bounded; encoders are immutable values that
//! can be shared across threads freely.
//!
//! # Example
//!
//! ```
//! use what3chords_core::{encode_direct, encode_hierarchical, Coordinate};
//!
//! let direct = encode_direct(Coordinate::new(0.0, 0.0)?)?;
//! assert_eq!(direct.indices(), [927, 862, 1971]);
//!
//! let cell = encode_hierarchical("8928308280fffff")?;
//! assert_eq!(cell.indices(), [283, 1118, 176]);
//! # Ok::<(), what3chords_core::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `h3o` - [`CellIndexer`] implementation backed by the `h3o` crate

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod config;
pub use config::{DirectConfig, EncoderConfig, HierarchicalConfig, OverflowPolicy};

mod coordinate;
mod triple;
pub use coordinate::Coordinate;
pub use triple::ChordIndexTriple;

// Algorithms
pub mod bitswap;
pub mod cat_map;
pub mod cell;
pub mod direct;
pub mod hierarchical;
pub mod payload;
pub mod radix;
pub mod scramble;

pub use bitswap::{BitSwapSpec, Direction, SwapOutcome, SwapPair, SwapStep, SwapTrace};
pub use cell::CellIndexer;
pub use direct::{encode_direct, DirectEncoder};
pub use hierarchical::{encode_hierarchical, HierarchicalDecoder};
pub use payload::{is_valid_hierarchical_payload, PayloadBits};
pub use radix::to_base_x;
pub use scramble::BitPermutation;

#[cfg(feature = "h3o")]
pub use cell::H3oIndexer;
