//! Locator integration tests
//!
//! Builder validation, scheme selection, and how indexer and table
//! failures surface through the umbrella error.

use what3chords::core::{ErrorKind, Result as CoreResult};
use what3chords::prelude::*;
use what3chords::{chords, core, Error, OverflowPolicy};

use crate::helpers::*;

// =============================================================================
// Builder
// =============================================================================

#[test]
fn test_builder_defaults_to_hierarchical() {
    let locator = test_locator(SF_CELL);
    assert_eq!(locator.scheme(), Scheme::Hierarchical);
    assert_eq!(locator.table().len(), 2141);
}

#[test]
fn test_builder_requires_table() {
    let result = ChordLocator::builder(fixed_indexer(SF_CELL)).build();
    assert!(matches!(
        result,
        Err(Error::Chords(chords::Error::TableTooSmall {
            len: 0,
            required: 1692
        }))
    ));
}

#[test]
fn test_table_size_depends_on_scheme() {
    // Enough for the hierarchical base, not for the direct one.
    let hierarchical = ChordLocator::builder(fixed_indexer(SF_CELL))
        .table(test_table(1692))
        .build();
    assert!(hierarchical.is_ok());

    let direct = ChordLocator::builder(fixed_indexer(SF_CELL))
        .scheme(Scheme::Direct)
        .table(test_table(1692))
        .build();
    assert!(matches!(
        direct,
        Err(Error::Chords(chords::Error::TableTooSmall {
            len: 1692,
            required: 2141
        }))
    ));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let mut config = EncoderConfig::default();
    config.direct.n_chords = 1;

    let err = ChordLocator::builder(fixed_indexer(SF_CELL))
        .config(config)
        .table(full_table())
        .build()
        .err()
        .expect("config with base 1 must be rejected");
    assert!(matches!(err, Error::Core(core::Error::InvalidConfig(_))));
    assert_eq!(err.kind(), Some(ErrorKind::Domain));
}

#[test]
fn test_builder_rejects_grid_too_large() {
    let mut config = EncoderConfig::default();
    config.direct.lon_res = 1_000_000;
    config.direct.lat_res = 1_000_000;

    let result = ChordLocator::builder(fixed_indexer(SF_CELL))
        .config(config)
        .table(full_table())
        .build();
    assert!(result.is_err());
}

// =============================================================================
// Schemes
// =============================================================================

#[test]
fn test_hierarchical_locate() {
    let locator = test_locator(SF_CELL);
    let progression = locator.locate(coord(-122.4194, 37.7749)).unwrap();

    assert_eq!(progression.indices.indices(), [283, 1118, 176]);
    assert_eq!(progression.names(), ["chord 283", "chord 1118", "chord 176"]);
}

#[test]
fn test_direct_locate() {
    let locator = ChordLocator::builder(fixed_indexer(SF_CELL))
        .scheme(Scheme::Direct)
        .table(full_table())
        .build()
        .unwrap();

    let progression = locator.locate(coord(-122.4194, 37.7749)).unwrap();
    assert_eq!(progression.indices.indices(), [655, 395, 703]);
    assert_eq!(progression.names(), ["chord 655", "chord 395", "chord 703"]);
}

#[test]
fn test_direct_scheme_never_queries_indexer() {
    let locator = ChordLocator::builder(failing_indexer)
        .scheme(Scheme::Direct)
        .table(full_table())
        .build()
        .unwrap();

    let triple = locator.code(coord(0.0, 0.0)).unwrap();
    assert_eq!(triple.indices(), [927, 862, 1971]);
}

#[test]
fn test_codes_reports_both_schemes() {
    init_tracing();
    let locator = test_locator(SF_CELL);
    let codes = locator.codes(coord(2.3522, 48.8566)).unwrap();

    assert_eq!(codes.cell, SF_CELL);
    assert_eq!(codes.direct.indices(), [1312, 209, 1207]);
    assert_eq!(codes.hierarchical.indices(), [283, 1118, 176]);
    assert_eq!(codes.for_scheme(Scheme::Direct), codes.direct);
    assert_eq!(codes.for_scheme(Scheme::Hierarchical), codes.hierarchical);
}

#[test]
fn test_codes_serialize() {
    let locator = test_locator(SF_CELL);
    let codes = locator.codes(coord(0.0, 0.0)).unwrap();
    let json = serde_json::to_value(&codes).unwrap();

    assert_eq!(json["direct"], serde_json::json!([927, 862, 1971]));
    assert_eq!(json["hierarchical"], serde_json::json!([283, 1118, 176]));
    assert_eq!(json["cell"], SF_CELL);
}

#[test]
fn test_scheme_from_config_file() {
    let scheme: Scheme = serde_json::from_str("\"direct\"").unwrap();
    assert_eq!(scheme, Scheme::Direct);
    assert!(serde_json::from_str::<Scheme>("\"latlon\"").is_err());
}

// =============================================================================
// Indexer
// =============================================================================

#[test]
fn test_indexer_receives_lat_lon_and_resolution_nine() {
    let indexer = |lat: f64, lon: f64, res: u8| -> CoreResult<String> {
        assert_eq!(lat, 48.8566);
        assert_eq!(lon, 2.3522);
        assert_eq!(res, 9);
        Ok(SF_CELL.to_string())
    };
    let locator = ChordLocator::builder(indexer)
        .table(full_table())
        .build()
        .unwrap();

    assert_eq!(locator.cell(coord(2.3522, 48.8566)).unwrap(), SF_CELL);
}

#[test]
fn test_indexer_failure_propagates() {
    let locator = ChordLocator::builder(failing_indexer)
        .table(full_table())
        .build()
        .unwrap();

    let err = locator.locate(coord(0.0, 0.0)).unwrap_err();
    assert!(matches!(err, Error::Core(core::Error::Indexer(_))));
    assert_eq!(err.kind(), Some(ErrorKind::MalformedIndex));
}

#[test]
fn test_malformed_cell_from_indexer() {
    let locator = test_locator("not-a-cell");
    let err = locator.locate(coord(0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MalformedIndex));
}

// =============================================================================
// Overflow policy
// =============================================================================

#[test]
fn test_overflow_keeps_leading_digits_by_default() {
    let locator = test_locator(OVERFLOW_CELL);
    let triple = locator.code(coord(0.0, 0.0)).unwrap();
    assert_eq!(triple.indices(), [1, 13, 947]);
}

#[test]
fn test_overflow_wrap_policy() {
    let mut config = EncoderConfig::default();
    config.hierarchical.overflow = OverflowPolicy::Wrap;

    let locator = ChordLocator::builder(fixed_indexer(OVERFLOW_CELL))
        .config(config)
        .table(full_table())
        .build()
        .unwrap();

    let triple = locator.code(coord(0.0, 0.0)).unwrap();
    assert_eq!(triple.indices(), [13, 947, 1101]);
}

#[test]
fn test_overflow_reject_policy() {
    let mut config = EncoderConfig::default();
    config.hierarchical.overflow = OverflowPolicy::Reject;

    let locator = ChordLocator::builder(fixed_indexer(OVERFLOW_CELL))
        .config(config)
        .table(full_table())
        .build()
        .unwrap();

    let err = locator.code(coord(0.0, 0.0)).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Domain));

    // The direct scheme is unaffected.
    assert!(locator.direct().encode(coord(0.0, 0.0)).is_ok());
}
