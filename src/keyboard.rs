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

//! Keyboard population: a tuning table expanded over a range of notes.
//!
//! A [`Keyboard`] is an immutable snapshot. Changing the base frequency, the
//! tuning system or a single pitch class produces a new snapshot in which
//! every affected note has been recomputed; nothing is patched in place.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::frequency::table_frequency;
use crate::note::{NoteName, PitchClass, PITCH_CLASSES};
use crate::ratio::{parse_ratio_string, Ratio};
use crate::tuning::{generate_tuning_table, TuningParameter, TuningSystem, TuningTable};

/// Inclusive range of notes on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRange {
    low: NoteName,
    high: NoteName,
}

impl NoteRange {
    /// Creates a range, failing if `low` lies above `high`.
    pub fn new(low: NoteName, high: NoteName) -> Result<Self, TuningError> {
        if low > high {
            return Err(TuningError::InvalidRange {
                low: low.to_string(),
                high: high.to_string(),
            });
        }
        Ok(Self { low, high })
    }

    /// Lowest note.
    pub fn low(&self) -> NoteName {
        self.low
    }

    /// Highest note.
    pub fn high(&self) -> NoteName {
        self.high
    }

    /// Whether `note` lies within the range.
    pub fn contains(&self, note: &NoteName) -> bool {
        self.low <= *note && *note <= self.high
    }

    /// Octaves touched by the range, including partial edge octaves.
    pub fn octaves(&self) -> RangeInclusive<u8> {
        self.low.octave()..=self.high.octave()
    }
}

/// A2 to C6, the keyboard shown by default.
impl Default for NoteRange {
    fn default() -> Self {
        Self {
            low: NoteName::new(PitchClass::A, 2).unwrap_or(NoteName::REFERENCE),
            high: NoteName::new(PitchClass::C, 6).unwrap_or(NoteName::REFERENCE),
        }
    }
}

/// Everything known about one key, in the flat shape that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteConfiguration {
    /// Full note name, e.g. `"C#4"`.
    pub name: String,
    /// Pitch class, e.g. `"C#"`.
    pub base_name: String,
    /// Numerator of the pitch class ratio.
    pub ratio_numerator: u64,
    /// Denominator of the pitch class ratio.
    pub ratio_denominator: u64,
    /// Ratio for display, `"n/d"`.
    pub ratio: String,
    /// Cents above the tonic.
    pub cents: f64,
    /// Sounding frequency in Hz.
    pub frequency: f64,
}

impl NoteConfiguration {
    fn new(note: NoteName, parameter: &TuningParameter, frequency: f64) -> Self {
        Self {
            name: note.to_string(),
            base_name: note.pitch_class().to_string(),
            ratio_numerator: parameter.ratio.numerator(),
            ratio_denominator: parameter.ratio.denominator(),
            ratio: parameter.ratio.to_string(),
            cents: parameter.cents,
            frequency,
        }
    }

    /// Recovers the tuning parameter this entry was built from.
    pub fn parameter(&self) -> TuningParameter {
        let ratio = Ratio::new(self.ratio_numerator, self.ratio_denominator);
        if ratio.is_unison() {
            TuningParameter::from_cents(self.cents)
        } else {
            TuningParameter::from_ratio(ratio)
        }
    }
}

/// Every note in a range with its tuning and frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyboard {
    base_frequency: f64,
    table: TuningTable,
    range: NoteRange,
    notes: BTreeMap<NoteName, NoteConfiguration>,
}

/// Populates a keyboard for a named tuning system.
pub fn populate(
    base_frequency: f64,
    system: TuningSystem,
    range: NoteRange,
) -> Result<Keyboard, TuningError> {
    populate_with_table(base_frequency, generate_tuning_table(system), range)
}

/// Populates a keyboard from an explicit tuning table.
///
/// A4 always sounds at `base_frequency` exactly, whatever the table says.
pub fn populate_with_table(
    base_frequency: f64,
    table: TuningTable,
    range: NoteRange,
) -> Result<Keyboard, TuningError> {
    if !base_frequency.is_finite() || base_frequency <= 0.0 {
        return Err(TuningError::InvalidBaseFrequency(base_frequency));
    }

    let mut notes = BTreeMap::new();

    for octave in range.octaves() {
        for pitch_class in PitchClass::ALL {
            let note = match NoteName::new(pitch_class, octave) {
                Ok(note) => note,
                Err(e) => {
                    warn!("skipping {}{}: {}", pitch_class, octave, e);
                    continue;
                }
            };
            if !range.contains(&note) {
                continue;
            }

            let parameter = table.get(pitch_class);
            let frequency = if note == NoteName::REFERENCE {
                base_frequency
            } else {
                table_frequency(note, base_frequency, &table)
            };

            notes.insert(note, NoteConfiguration::new(note, parameter, frequency));
        }
    }

    debug!(
        "populated {} notes from {} to {} at A4 = {} Hz",
        notes.len(),
        range.low(),
        range.high(),
        base_frequency
    );

    Ok(Keyboard {
        base_frequency,
        table,
        range,
        notes,
    })
}

impl Keyboard {
    /// Rebuilds a keyboard from a persisted note map.
    ///
    /// The tuning table is recovered from the entries (the first entry seen
    /// for each pitch class wins, pitch classes absent from the map get their
    /// equal-tempered offset) and every frequency is recomputed, so the result
    /// is consistent even if the stored frequencies were stale.
    pub fn from_notes(
        base_frequency: f64,
        notes: &BTreeMap<String, NoteConfiguration>,
    ) -> Result<Self, TuningError> {
        let parsed = notes
            .iter()
            .map(|(key, config)| Ok((key.parse::<NoteName>()?, config)))
            .collect::<Result<BTreeMap<NoteName, &NoteConfiguration>, TuningError>>()?;

        let (Some((&low, _)), Some((&high, _))) = (parsed.first_key_value(), parsed.last_key_value()) else {
            return Err(TuningError::EmptyNoteMap);
        };

        let mut recovered: [Option<TuningParameter>; PITCH_CLASSES] = [None; PITCH_CLASSES];
        for (note, config) in &parsed {
            recovered[note.pitch_class().index()].get_or_insert_with(|| config.parameter());
        }
        let parameters = PitchClass::ALL.map(|pc| {
            recovered[pc.index()]
                .unwrap_or_else(|| TuningParameter::from_cents(100.0 * pc.index() as f64))
        });

        let table = TuningTable::from_parameters(PitchClass::C, parameters);
        populate_with_table(base_frequency, table, NoteRange::new(low, high)?)
    }

    /// Frequency of A4.
    pub fn base_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// The table the keyboard was populated from.
    pub fn table(&self) -> &TuningTable {
        &self.table
    }

    /// Range of notes on the keyboard.
    pub fn range(&self) -> NoteRange {
        self.range
    }

    /// Configuration of one note, if it is on the keyboard.
    pub fn get(&self, note: &NoteName) -> Option<&NoteConfiguration> {
        self.notes.get(note)
    }

    /// Frequency of one note, if it is on the keyboard.
    pub fn frequency(&self, note: &NoteName) -> Option<f64> {
        self.get(note).map(|config| config.frequency)
    }

    /// Notes in ascending pitch order.
    pub fn iter(&self) -> impl Iterator<Item = (&NoteName, &NoteConfiguration)> {
        self.notes.iter()
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// `true` if the range held no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The note map keyed by note-name strings, as it is persisted.
    pub fn to_notes_map(&self) -> BTreeMap<String, NoteConfiguration> {
        self.notes
            .iter()
            .map(|(note, config)| (note.to_string(), config.clone()))
            .collect()
    }

    /// Same tuning at a different base frequency.
    pub fn with_base_frequency(&self, base_frequency: f64) -> Result<Self, TuningError> {
        populate_with_table(base_frequency, self.table.clone(), self.range)
    }

    /// Same keyboard with one pitch class retuned to a typed ratio.
    ///
    /// The text is parsed leniently; anything unparseable becomes `1/1`.
    pub fn with_ratio(&self, pitch_class: PitchClass, text: &str) -> Self {
        let parameter = TuningParameter::from_ratio(parse_ratio_string(text));
        self.with_parameter(pitch_class, parameter)
    }

    /// Same keyboard with one pitch class retuned to a cents offset.
    pub fn with_cents(&self, pitch_class: PitchClass, cents: f64) -> Self {
        self.with_parameter(pitch_class, TuningParameter::from_cents(cents))
    }

    fn with_parameter(&self, pitch_class: PitchClass, parameter: TuningParameter) -> Self {
        let table = self.table.with_parameter(pitch_class, parameter);
        let mut notes = self.notes.clone();
        for (note, config) in notes.iter_mut().filter(|(n, _)| n.pitch_class() == pitch_class) {
            let frequency = if *note == NoteName::REFERENCE {
                self.base_frequency
            } else {
                table_frequency(*note, self.base_frequency, &table)
            };
            *config = NoteConfiguration::new(*note, table.get(pitch_class), frequency);
        }

        Self {
            base_frequency: self.base_frequency,
            table,
            range: self.range,
            notes,
        }
    }
}
