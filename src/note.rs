// Copyright 2025 Temperament Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.
//
// See http://creativecommons.org/licenses/MIT/ for more information.

//! Note names, pitch classes and semitone arithmetic.
//!
//! Notes are written `<PitchClass><Octave>`, e.g. `"C#4"`. Numbering follows
//! the MIDI convention: C is the first pitch class of each octave and
//! `index = pitch_class + (octave + 1) * 12`, so A4 = 69 and C4 = 60.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Number of pitch classes per octave.
pub const PITCH_CLASSES: usize = 12;

/// Highest octave a note name can carry (one decimal digit).
pub const MAX_OCTAVE: u8 = 9;

/// Octave assumed by [`octave_of`] when a name cannot be parsed.
pub const DEFAULT_OCTAVE: u8 = 4;

/// One of the twelve chromatic pitch classes, starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    #[serde(rename = "C")]
    C,
    /// C sharp
    #[serde(rename = "C#")]
    CSharp,
    /// D
    #[serde(rename = "D")]
    D,
    /// D sharp
    #[serde(rename = "D#")]
    DSharp,
    /// E
    #[serde(rename = "E")]
    E,
    /// F
    #[serde(rename = "F")]
    F,
    /// F sharp
    #[serde(rename = "F#")]
    FSharp,
    /// G
    #[serde(rename = "G")]
    G,
    /// G sharp
    #[serde(rename = "G#")]
    GSharp,
    /// A
    #[serde(rename = "A")]
    A,
    /// A sharp
    #[serde(rename = "A#")]
    ASharp,
    /// B
    #[serde(rename = "B")]
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order.
    pub const ALL: [PitchClass; PITCH_CLASSES] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Position within the octave, C = 0 through B = 11.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % PITCH_CLASSES]
    }

    /// Sharp spelling, e.g. `"F#"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Letter plus optional sharp. E# and B# do not exist in this spelling.
    fn from_parts(letter: char, sharp: bool) -> Option<Self> {
        let natural = match letter {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return None,
        };
        match (natural, sharp) {
            (_, false) => Some(natural),
            (PitchClass::E | PitchClass::B, true) => None,
            (_, true) => Some(Self::from_index(natural.index() + 1)),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), None, None) => Self::from_parts(letter, false),
            (Some(letter), Some('#'), None) => Self::from_parts(letter, true),
            _ => None,
        };
        parsed.ok_or_else(|| TuningError::InvalidNoteName(s.to_string()))
    }
}

/// A pitch class in a specific octave, e.g. C#4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pitch_class: PitchClass,
    octave: u8,
}

impl NoteName {
    /// The reference pitch every frequency is derived from.
    pub const REFERENCE: NoteName = NoteName {
        pitch_class: PitchClass::A,
        octave: 4,
    };

    /// Creates a note, rejecting octaves that cannot be written with one digit.
    pub fn new(pitch_class: PitchClass, octave: u8) -> Result<Self, TuningError> {
        if octave > MAX_OCTAVE {
            return Err(TuningError::InvalidNoteName(format!("{pitch_class}{octave}")));
        }
        Ok(Self {
            pitch_class,
            octave,
        })
    }

    /// Pitch class of this note.
    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    /// Octave number, 4 being the octave of the reference pitch.
    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// MIDI-style absolute index (C4 = 60, A4 = 69).
    pub fn midi_index(&self) -> i32 {
        self.pitch_class.index() as i32 + (self.octave as i32 + 1) * PITCH_CLASSES as i32
    }

    /// Signed semitone distance from A4.
    pub fn semitone_offset_from_reference(&self) -> i32 {
        self.midi_index() - Self::REFERENCE.midi_index()
    }
}

impl Ord for NoteName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.midi_index().cmp(&other.midi_index())
    }
}

impl PartialOrd for NoteName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for NoteName {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note_name(s)
    }
}

/// Parses `<A-G>[#]<digit>` into a note name.
pub fn parse_note_name(s: &str) -> Result<NoteName, TuningError> {
    let invalid = || TuningError::InvalidNoteName(s.to_string());

    let mut chars = s.chars();
    let octave = chars
        .next_back()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(invalid)?;
    let pitch_class = chars.as_str().parse::<PitchClass>().map_err(|_| invalid())?;

    NoteName::new(pitch_class, octave as u8)
}

/// Signed semitone distance of a note string from A4.
pub fn semitone_offset_from_reference(note: &str) -> Result<i32, TuningError> {
    Ok(parse_note_name(note)?.semitone_offset_from_reference())
}

/// Pitch class part of a note string for display, or `""` if it does not parse.
pub fn base_name(note: &str) -> &'static str {
    parse_note_name(note)
        .map(|n| n.pitch_class().as_str())
        .unwrap_or("")
}

/// Octave part of a note string for display, or 4 if it does not parse.
pub fn octave_of(note: &str) -> u8 {
    parse_note_name(note)
        .map(|n| n.octave())
        .unwrap_or(DEFAULT_OCTAVE)
}

impl Serialize for NoteName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NoteName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
