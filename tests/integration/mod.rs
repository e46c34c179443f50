//! Integration test modules for what3chords
//!
//! - locator: builder, schemes, error propagation
//! - encoding: regression fixtures and cross-scheme properties
//! - chords: fingering data to table to progression

pub mod chords;
pub mod locator;
