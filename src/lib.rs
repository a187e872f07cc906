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

//! Tuning engine for a virtual piano.
//!
//! Maps note names such as `"C#4"` to sounding frequencies under equal
//! temperament, just intonation, Pythagorean tuning, quarter-comma meantone,
//! the Werckmeister III and Kirnberger III well-temperaments, and two 7-limit
//! systems (Young's Well-Tuned Piano and Centaur).
//!
//! All frequencies derive from a single anchor, A4 at a configurable base
//! frequency. Tuning tables are anchored at C and repeat identically in every
//! octave.
//!
//! ```
//! use temperament::{populate, NoteName, NoteRange, TuningSystem};
//!
//! let keyboard = populate(440.0, TuningSystem::Just, NoteRange::default()).unwrap();
//! let g4: NoteName = "G4".parse().unwrap();
//! assert!((keyboard.frequency(&g4).unwrap() - 392.44).abs() < 0.01);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod keyboard;
pub mod note;
pub mod ratio;
pub mod tuning;

/// Default frequency of A4 in Hz.
pub const DEFAULT_BASE_FREQUENCY: f64 = 440.0;

/// Default ring time of a played note in seconds.
pub const DEFAULT_DECAY_LENGTH: f64 = 3.0;

pub use config::TuningConfig;
pub use error::TuningError;
pub use frequency::{calculate_frequency, frequency_for, table_frequency, tonic_frequency};
pub use keyboard::{populate, populate_with_table, Keyboard, NoteConfiguration, NoteRange};
pub use note::{base_name, octave_of, parse_note_name, semitone_offset_from_reference, NoteName, PitchClass};
pub use ratio::{
    cents_to_ratio, parse_ratio_string, ratio_to_cents, try_parse_ratio_string, Ratio,
};
pub use tuning::{generate_tuning_table, TuningParameter, TuningSystem, TuningTable};
