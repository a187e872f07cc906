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

//! Frequency calculation from a reference pitch and a tuning parameter.
//!
//! The reference frequency belongs to A4. The tonic of a table is placed
//! against it with the fixed equal-tempered relation (C4 = A4 * 2^(-9/12)),
//! the pitch class multiplier is applied above the tonic, and the result is
//! scaled by whole octaves. No rounding or clamping happens here.

use crate::error::TuningError;
use crate::note::{parse_note_name, NoteName, PitchClass, PITCH_CLASSES};
use crate::ratio::Ratio;
use crate::tuning::{TuningParameter, TuningTable};

/// Frequency of the tonic in the reference octave.
///
/// Derived from the reference with equal-tempered semitones, so the C tonic
/// of a 440 Hz reference sits at ~261.63 Hz.
pub fn tonic_frequency(reference_frequency: f64, tonic: PitchClass) -> f64 {
    let semitones = tonic.index() as i32 - NoteName::REFERENCE.pitch_class().index() as i32;
    reference_frequency * 2f64.powf(semitones as f64 / PITCH_CLASSES as f64)
}

/// Frequency of `note` given its pitch class parameter relative to `tonic`.
///
/// A4 in a table anchored at A returns `reference_frequency` untouched.
pub fn frequency_for(
    note: NoteName,
    reference_frequency: f64,
    parameter: &TuningParameter,
    tonic: PitchClass,
) -> f64 {
    if note == NoteName::REFERENCE && tonic == NoteName::REFERENCE.pitch_class() {
        return reference_frequency;
    }

    // Semitones above the tonic of the reference octave; pitch classes below
    // the tonic belong to the tonic of the previous octave.
    let above_tonic = note.semitone_offset_from_reference()
        + NoteName::REFERENCE.pitch_class().index() as i32
        - tonic.index() as i32;
    let octaves = above_tonic.div_euclid(PITCH_CLASSES as i32);

    tonic_frequency(reference_frequency, tonic) * parameter.multiplier() * 2f64.powi(octaves)
}

/// Frequency of `note` under a full tuning table.
pub fn table_frequency(note: NoteName, reference_frequency: f64, table: &TuningTable) -> f64 {
    frequency_for(
        note,
        reference_frequency,
        table.get(note.pitch_class()),
        table.tonic(),
    )
}

/// Frequency of a note string under a C-anchored parameter.
///
/// A non-trivial `ratio` is authoritative, otherwise `cents` drives the pitch.
/// Fails with [`TuningError::InvalidNoteName`] if `note` does not parse.
pub fn calculate_frequency(
    note: &str,
    reference_frequency: f64,
    ratio: Ratio,
    cents: f64,
) -> Result<f64, TuningError> {
    let note = parse_note_name(note)?;
    Ok(frequency_for(
        note,
        reference_frequency,
        &TuningParameter { ratio, cents },
        PitchClass::C,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{generate_tuning_table, TuningSystem};

    fn note(name: &str) -> NoteName {
        name.parse().unwrap()
    }

    #[test]
    fn test_tonic_frequency() {
        assert!((tonic_frequency(440.0, PitchClass::C) - 261.6256).abs() < 0.001);
        assert_eq!(tonic_frequency(440.0, PitchClass::A), 440.0);
    }

    #[test]
    fn test_equal_temperament() {
        let freq = calculate_frequency("C4", 440.0, Ratio::UNISON, 0.0).unwrap();
        assert!((freq - 261.63).abs() < 0.01);

        let freq = calculate_frequency("A4", 440.0, Ratio::UNISON, 900.0).unwrap();
        assert!((freq - 440.0).abs() < 1e-9);

        let freq = calculate_frequency("A3", 440.0, Ratio::UNISON, 900.0).unwrap();
        assert!((freq - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_wins_over_cents() {
        // A stale cents value must not matter once the ratio is non-trivial.
        let freq = calculate_frequency("G4", 440.0, Ratio::new(3, 2), 123.0).unwrap();
        assert!((freq - 261.6256 * 1.5).abs() < 0.001);
    }

    #[test]
    fn test_octave_doubling() {
        let fifth = TuningParameter::from_ratio(Ratio::new(3, 2));
        let g4 = frequency_for(note("G4"), 440.0, &fifth, PitchClass::C);
        let g5 = frequency_for(note("G5"), 440.0, &fifth, PitchClass::C);
        let g3 = frequency_for(note("G3"), 440.0, &fifth, PitchClass::C);
        assert!((g5 - 2.0 * g4).abs() < 1e-9);
        assert!((g3 - g4 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_a_tonic_passthrough() {
        let freq = frequency_for(note("A4"), 442.5, &TuningParameter::UNISON, PitchClass::A);
        assert_eq!(freq, 442.5);
    }

    #[test]
    fn test_pitch_classes_below_tonic_use_previous_octave() {
        // Minor third above A3, i.e. C4 in an A-anchored table.
        let minor_third = TuningParameter::from_ratio(Ratio::new(6, 5));
        let c4 = frequency_for(note("C4"), 440.0, &minor_third, PitchClass::A);
        assert!((c4 - 220.0 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_table_frequency() {
        let table = generate_tuning_table(TuningSystem::Just);
        let e4 = table_frequency(note("E4"), 440.0, &table);
        assert!((e4 - 261.6256 * 1.25).abs() < 0.001);
    }

    #[test]
    fn test_invalid_note() {
        assert_eq!(
            calculate_frequency("Q4", 440.0, Ratio::UNISON, 0.0),
            Err(TuningError::InvalidNoteName("Q4".to_string()))
        );
    }
}
