//! Test helpers and fixtures for what3chords integration tests
//!
//! No test here touches a real spatial index. Cells come from fake
//! indexers so the hierarchical expectations stay pinned to known hex
//! strings.

#![allow(dead_code)]

use what3chords::core::{Error as CoreError, Result as CoreResult};
use what3chords::prelude::*;

/// A resolution-9 cell with a known code: `[283, 1118, 176]`.
pub const SF_CELL: &str = "8928308280fffff";

/// Region 121 cell whose decimal exceeds `1692^3`.
pub const OVERFLOW_CELL: &str = "089f20000203ffff";

/// Synthetic table of `n` records named `"chord {i}"`.
pub fn test_table(n: usize) -> ChordTable {
    (0..n)
        .map(|i| ChordRecord {
            name: format!("chord {i}"),
            midi: vec![40 + (i % 12) as u8, 47, 52],
            frets: "022000".into(),
            capo: 0,
            fingers: "023000".into(),
        })
        .collect()
}

/// Table large enough for either scheme.
pub fn full_table() -> ChordTable {
    test_table(2141)
}

/// Indexer that answers every query with the same cell.
pub fn fixed_indexer(cell: &'static str) -> impl Fn(f64, f64, u8) -> CoreResult<String> {
    move |_lat, _lon, _res| Ok(cell.to_string())
}

/// Indexer that always fails, as a backend would for an unsupported point.
pub fn failing_indexer(_lat: f64, _lon: f64, _res: u8) -> CoreResult<String> {
    Err(CoreError::Indexer("no cell".into()))
}

/// Locator over [`fixed_indexer`] with the default (hierarchical) scheme.
pub fn test_locator(cell: &'static str) -> ChordLocator<impl CellIndexer> {
    ChordLocator::builder(fixed_indexer(cell))
        .table(full_table())
        .build()
        .expect("Failed to create test locator")
}

/// Route encoder logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn coord(lon: f64, lat: f64) -> Coordinate {
    Coordinate::new(lon, lat).expect("test coordinate in range")
}
