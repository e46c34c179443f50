//! Chord records and the raw fingering data they are built from.

use serde::{Deserialize, Serialize};

use crate::note::{note_name, note_to_hz};
use crate::Result;

/// One playable chord as the table stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordRecord {
    /// Display name, e.g. `"Amaj7 v2"`.
    pub name: String,
    /// Notes from the lowest string up.
    pub midi: Vec<u8>,
    /// One symbol per string: fret number, or `X` for a muted string.
    pub frets: String,
    /// Capo fret, 0 when no capo is used.
    pub capo: u8,
    pub fingers: String,
}

impl ChordRecord {
    pub fn note_names(&self) -> Result<Vec<String>> {
        self.midi.iter().map(|&m| note_name(m)).collect()
    }

    pub fn frequencies(&self) -> Vec<f32> {
        self.midi.iter().map(|&m| note_to_hz(m as f32)).collect()
    }
}

/// One fingering of a chord, as chord libraries publish it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordPosition {
    /// Per string; negative means muted.
    pub frets: Vec<i8>,
    pub fingers: Vec<u8>,
    #[serde(default = "default_base_fret")]
    pub base_fret: u8,
    #[serde(default)]
    pub capo: bool,
    pub midi: Vec<u8>,
}

fn default_base_fret() -> u8 {
    1
}

impl ChordPosition {
    pub fn fret_pattern(&self) -> String {
        self.frets
            .iter()
            .map(|&f| if f < 0 { "X".to_string() } else { f.to_string() })
            .collect()
    }

    pub fn capo_fret(&self) -> u8 {
        if self.capo {
            self.base_fret
        } else {
            0
        }
    }

    pub fn finger_pattern(&self) -> String {
        self.fingers.iter().map(|f| f.to_string()).collect()
    }
}

/// A chord (key + suffix) with all of its fingerings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordVariant {
    pub key: String,
    pub suffix: String,
    pub positions: Vec<ChordPosition>,
}

impl ChordVariant {
    /// One record per position, named `"{key}{suffix} v{n}"` with `n`
    /// counting from 1.
    pub fn records(&self) -> impl Iterator<Item = ChordRecord> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(move |(i, position)| ChordRecord {
                name: format!("{}{} v{}", self.key, self.suffix, i + 1),
                midi: position.midi.clone(),
                frets: position.fret_pattern(),
                capo: position.capo_fret(),
                fingers: position.finger_pattern(),
            })
    }
}
