//! MIDI note helpers.
//!
//! Names use scientific pitch notation with sharps: middle C (MIDI 60) is
//! `C4`, concert A (MIDI 69, 440 Hz) is `A4`.

use crate::{Error, Result};

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const MIDDLE_C: u8 = 60;
pub const CONCERT_A: u8 = 69;

/// 0-11, where 0 = C.
pub const fn pitch_class(midi: u8) -> u8 {
    midi % 12
}

/// Returns -1 to 9.
pub const fn octave(midi: u8) -> i8 {
    (midi / 12) as i8 - 1
}

/// Note name such as `C4` or `F#3`.
pub fn note_name(midi: u8) -> Result<String> {
    if midi > 127 {
        return Err(Error::InvalidNote(midi));
    }
    Ok(format!(
        "{}{}",
        PITCH_NAMES[pitch_class(midi) as usize],
        octave(midi)
    ))
}

/// Frequency in Hz (A4 = 440 Hz, equal temperament).
#[inline]
pub fn note_to_hz(note: f32) -> f32 {
    440.0 * libm::powf(2.0, (note - CONCERT_A as f32) / 12.0)
}
