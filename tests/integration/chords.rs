//! Chord table integration tests
//!
//! Published fingering data in, flattened records and progressions out.

use approx::assert_relative_eq;
use what3chords::chords::{note_name, ChordVariant};
use what3chords::prelude::*;

use crate::helpers::*;

const FINGERINGS: &str = r#"[
    {
        "key": "C",
        "suffix": "major",
        "positions": [
            { "frets": [-1, 3, 2, 0, 1, 0], "fingers": [0, 3, 2, 0, 1, 0],
              "midi": [48, 52, 55, 60, 64] },
            { "frets": [1, 3, 3, 2, 1, 1], "fingers": [1, 3, 4, 2, 1, 1],
              "baseFret": 8, "capo": true, "midi": [48, 55, 60, 64, 67, 72] }
        ]
    },
    {
        "key": "G",
        "suffix": "7",
        "positions": [
            { "frets": [3, 2, 0, 0, 0, 1], "fingers": [3, 2, 0, 0, 0, 1],
              "midi": [43, 47, 50, 55, 59, 65] }
        ]
    }
]"#;

fn variants() -> Vec<ChordVariant> {
    serde_json::from_str(FINGERINGS).unwrap()
}

#[test]
fn test_table_from_fingering_data() {
    let table = ChordTable::from_variants(&variants());
    let names: Vec<_> = table.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Cmajor v1", "Cmajor v2", "G7 v1"]);

    let barre = table.get(1).unwrap();
    assert_eq!(barre.frets, "133211");
    assert_eq!(barre.capo, 8);

    let open = table.get(0).unwrap();
    assert_eq!(open.frets, "X32010");
    assert_eq!(open.capo, 0);
    assert_eq!(open.fingers, "032010");
}

#[test]
fn test_progression_from_fingering_data() {
    let table = ChordTable::from_variants(&variants());
    let progression = table
        .progression(ChordIndexTriple::new([2, 0, 2]))
        .unwrap();
    assert_eq!(progression.names(), ["G7 v1", "Cmajor v1", "G7 v1"]);
}

#[test]
fn test_record_notes() {
    let table = ChordTable::from_variants(&variants());
    let g7 = table.get(2).unwrap();

    assert_eq!(
        g7.note_names().unwrap(),
        ["G2", "B2", "D3", "G3", "B3", "F4"]
    );
    assert_relative_eq!(g7.frequencies()[0], 98.0, epsilon = 0.01);
    assert_eq!(note_name(69).unwrap(), "A4");
}

#[test]
fn test_locator_over_loaded_table() {
    // Real fingerings first, synthetic padding after.
    let table: ChordTable = ChordTable::from_variants(&variants())
        .records()
        .iter()
        .cloned()
        .chain(test_table(1692).records()[3..].iter().cloned())
        .collect();

    let locator = ChordLocator::builder(fixed_indexer(SF_CELL))
        .table(table)
        .build()
        .unwrap();
    let progression = locator.locate(coord(0.0, 0.0)).unwrap();
    assert_eq!(progression.names(), ["chord 283", "chord 1118", "chord 176"]);
    assert_eq!(locator.table().get(0).unwrap().name, "Cmajor v1");
}
