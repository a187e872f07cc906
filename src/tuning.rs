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

//! Tuning systems and the per-pitch-class tables they generate.
//!
//! Every table is anchored at a tonic that maps to `1/1` and 0 cents. The
//! generated tables all use C as tonic. Ratio-based systems carry the ratio as
//! the authoritative value and derive cents for display; cents-based
//! temperaments carry `1/1` and are driven by their cents offsets.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::note::{PitchClass, PITCH_CLASSES};
use crate::ratio::{Ratio, CENTS_PER_OCTAVE};

/// A named tuning system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TuningSystem {
    /// 12-tone equal temperament.
    #[default]
    #[serde(rename = "equal")]
    Equal,
    /// 5-limit just intonation.
    #[serde(rename = "just")]
    Just,
    /// 3-limit tuning built from pure fifths.
    #[serde(rename = "pythagorean")]
    Pythagorean,
    /// Meantone with fifths narrowed by a quarter syntonic comma.
    #[serde(rename = "quarterCommaMeantone")]
    QuarterCommaMeantone,
    /// Andreas Werckmeister's well-temperament III (1691).
    #[serde(rename = "werckmeisterIII")]
    WerckmeisterIII,
    /// Johann Philipp Kirnberger's well-temperament III (1779).
    #[serde(rename = "kirnbergerIII")]
    KirnbergerIII,
    /// La Monte Young's 7-limit Well-Tuned Piano.
    #[serde(rename = "youngWellTuned")]
    YoungWellTuned,
    /// Kraig Grady's 7-limit Centaur scale.
    #[serde(rename = "centaur")]
    Centaur,
}

impl TuningSystem {
    /// Every system, in menu order.
    pub const ALL: [TuningSystem; 8] = [
        TuningSystem::Equal,
        TuningSystem::Just,
        TuningSystem::Pythagorean,
        TuningSystem::QuarterCommaMeantone,
        TuningSystem::WerckmeisterIII,
        TuningSystem::KirnbergerIII,
        TuningSystem::YoungWellTuned,
        TuningSystem::Centaur,
    ];

    /// Identifier used in saved configurations and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            TuningSystem::Equal => "equal",
            TuningSystem::Just => "just",
            TuningSystem::Pythagorean => "pythagorean",
            TuningSystem::QuarterCommaMeantone => "quarterCommaMeantone",
            TuningSystem::WerckmeisterIII => "werckmeisterIII",
            TuningSystem::KirnbergerIII => "kirnbergerIII",
            TuningSystem::YoungWellTuned => "youngWellTuned",
            TuningSystem::Centaur => "centaur",
        }
    }

    /// Human readable name.
    pub const fn description(self) -> &'static str {
        match self {
            TuningSystem::Equal => "12-tone equal temperament",
            TuningSystem::Just => "5-limit just intonation",
            TuningSystem::Pythagorean => "Pythagorean (pure fifths)",
            TuningSystem::QuarterCommaMeantone => "Quarter-comma meantone",
            TuningSystem::WerckmeisterIII => "Werckmeister III",
            TuningSystem::KirnbergerIII => "Kirnberger III",
            TuningSystem::YoungWellTuned => "Young's Well-Tuned Piano",
            TuningSystem::Centaur => "Centaur (7-limit)",
        }
    }
}

impl fmt::Display for TuningSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TuningSystem {
    type Err = TuningError;

    /// Case-insensitive; also accepts `-` and `_` separators (`werckmeister-iii`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| TuningError::UnknownTuningSystem(s.to_string()))
    }
}

/// Tuning of one pitch class relative to the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningParameter {
    /// Frequency ratio above the tonic. `1/1` when cents are authoritative.
    pub ratio: Ratio,
    /// Offset above the tonic in cents.
    pub cents: f64,
}

impl TuningParameter {
    /// The tonic itself.
    pub const UNISON: TuningParameter = TuningParameter {
        ratio: Ratio::UNISON,
        cents: 0.0,
    };

    /// A ratio-authoritative parameter; cents are derived for display.
    pub fn from_ratio(ratio: Ratio) -> Self {
        Self {
            ratio,
            cents: ratio.cents(),
        }
    }

    /// A cents-authoritative parameter with the trivial ratio.
    pub fn from_cents(cents: f64) -> Self {
        Self {
            ratio: Ratio::UNISON,
            cents,
        }
    }

    /// Frequency multiplier over the tonic in the same octave.
    ///
    /// A non-trivial ratio wins; otherwise the cents value is used.
    pub fn multiplier(&self) -> f64 {
        if self.ratio.is_unison() {
            2f64.powf(self.cents / CENTS_PER_OCTAVE)
        } else {
            self.ratio.value()
        }
    }
}

impl Default for TuningParameter {
    fn default() -> Self {
        Self::UNISON
    }
}

/// Twelve tuning parameters keyed by pitch class, anchored at a tonic.
///
/// Deserialized tables pass through [`TuningTable::from_parameters`], so the
/// tonic is the unison however the stored entry reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableParts")]
pub struct TuningTable {
    tonic: PitchClass,
    parameters: [TuningParameter; PITCH_CLASSES],
}

#[derive(Deserialize)]
struct TableParts {
    tonic: PitchClass,
    parameters: [TuningParameter; PITCH_CLASSES],
}

impl From<TableParts> for TuningTable {
    fn from(parts: TableParts) -> Self {
        TuningTable::from_parameters(parts.tonic, parts.parameters)
    }
}

impl TuningTable {
    /// Builds a table from explicit parameters, indexed by pitch class.
    ///
    /// Parameters are relative to `tonic`; the tonic's own entry is forced to
    /// the unison.
    pub fn from_parameters(tonic: PitchClass, mut parameters: [TuningParameter; PITCH_CLASSES]) -> Self {
        parameters[tonic.index()] = TuningParameter::UNISON;
        Self { tonic, parameters }
    }

    /// The pitch class that maps to `1/1`.
    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    /// Parameter for one pitch class.
    pub fn get(&self, pitch_class: PitchClass) -> &TuningParameter {
        &self.parameters[pitch_class.index()]
    }

    /// Copy of this table with one pitch class replaced. The tonic stays at the unison.
    pub fn with_parameter(&self, pitch_class: PitchClass, parameter: TuningParameter) -> Self {
        let mut parameters = self.parameters;
        parameters[pitch_class.index()] = parameter;
        Self::from_parameters(self.tonic, parameters)
    }

    /// `(pitch class, parameter)` pairs in chromatic order.
    pub fn iter(&self) -> impl Iterator<Item = (PitchClass, &TuningParameter)> {
        PitchClass::ALL.into_iter().zip(self.parameters.iter())
    }
}

impl Index<PitchClass> for TuningTable {
    type Output = TuningParameter;

    fn index(&self, pitch_class: PitchClass) -> &TuningParameter {
        self.get(pitch_class)
    }
}

const fn r(numerator: u64, denominator: u64) -> Ratio {
    Ratio::new(numerator, denominator)
}

const JUST: [Ratio; PITCH_CLASSES] = [
    r(1, 1),
    r(16, 15),
    r(9, 8),
    r(6, 5),
    r(5, 4),
    r(4, 3),
    r(45, 32),
    r(3, 2),
    r(8, 5),
    r(5, 3),
    r(9, 5),
    r(15, 8),
];

const PYTHAGOREAN: [Ratio; PITCH_CLASSES] = [
    r(1, 1),
    r(256, 243),
    r(9, 8),
    r(32, 27),
    r(81, 64),
    r(4, 3),
    r(729, 512),
    r(3, 2),
    r(128, 81),
    r(27, 16),
    r(16, 9),
    r(243, 128),
];

// Degrees of the Well-Tuned Piano counted from C.
const YOUNG_WELL_TUNED: [Ratio; PITCH_CLASSES] = [
    r(1, 1),
    r(567, 512),
    r(9, 8),
    r(147, 128),
    r(21, 16),
    r(1323, 1024),
    r(189, 128),
    r(3, 2),
    r(49, 32),
    r(7, 4),
    r(441, 256),
    r(63, 32),
];

const CENTAUR: [Ratio; PITCH_CLASSES] = [
    r(1, 1),
    r(21, 20),
    r(9, 8),
    r(7, 6),
    r(5, 4),
    r(4, 3),
    r(7, 5),
    r(3, 2),
    r(14, 9),
    r(5, 3),
    r(7, 4),
    r(15, 8),
];

// Pure major thirds, fifths narrowed by 5.4 cents.
const QUARTER_COMMA_MEANTONE: [f64; PITCH_CLASSES] = [
    0.0, 76.0, 193.2, 310.3, 386.3, 503.4, 579.5, 696.6, 772.6, 889.7, 1006.8, 1082.9,
];

const WERCKMEISTER_III: [f64; PITCH_CLASSES] = [
    0.0, 90.2, 192.2, 294.1, 390.2, 498.0, 588.3, 696.1, 792.2, 888.3, 996.1, 1092.2,
];

const KIRNBERGER_III: [f64; PITCH_CLASSES] = [
    0.0, 90.2, 193.2, 294.1, 386.3, 498.0, 590.2, 696.6, 792.2, 889.7, 996.1, 1088.3,
];

fn from_ratios(ratios: [Ratio; PITCH_CLASSES]) -> [TuningParameter; PITCH_CLASSES] {
    ratios.map(TuningParameter::from_ratio)
}

fn from_cents(cents: [f64; PITCH_CLASSES]) -> [TuningParameter; PITCH_CLASSES] {
    cents.map(TuningParameter::from_cents)
}

/// Generates the C-anchored table for a tuning system.
pub fn generate_tuning_table(system: TuningSystem) -> TuningTable {
    debug!("generating tuning table for {}", system);

    let parameters = match system {
        TuningSystem::Equal => {
            PitchClass::ALL.map(|pc| TuningParameter::from_cents(100.0 * pc.index() as f64))
        }
        TuningSystem::Just => from_ratios(JUST),
        TuningSystem::Pythagorean => from_ratios(PYTHAGOREAN),
        TuningSystem::QuarterCommaMeantone => from_cents(QUARTER_COMMA_MEANTONE),
        TuningSystem::WerckmeisterIII => from_cents(WERCKMEISTER_III),
        TuningSystem::KirnbergerIII => from_cents(KIRNBERGER_III),
        TuningSystem::YoungWellTuned => from_ratios(YOUNG_WELL_TUNED),
        TuningSystem::Centaur => from_ratios(CENTAUR),
    };

    TuningTable::from_parameters(PitchClass::C, parameters)
}
