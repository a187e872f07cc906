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

//! Saved tuning configurations.
//!
//! A [`TuningConfig`] is the record the persistence layer stores: the full
//! note map plus the pass-through playback settings. Field names follow the
//! camelCase JSON shape used by the storage API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::keyboard::{Keyboard, NoteConfiguration};
use crate::{DEFAULT_BASE_FREQUENCY, DEFAULT_DECAY_LENGTH};

fn default_base_frequency() -> f64 {
    DEFAULT_BASE_FREQUENCY
}

fn default_decay_length() -> f64 {
    DEFAULT_DECAY_LENGTH
}

/// A named, saved keyboard tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningConfig {
    /// Storage identifier, assigned by the persistence layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-facing name.
    pub name: String,
    /// Frequency of A4 in Hz.
    #[serde(default = "default_base_frequency")]
    pub base_frequency: f64,
    /// How long a played note rings, in seconds. Not interpreted by the engine.
    #[serde(default = "default_decay_length")]
    pub decay_length: f64,
    /// Every note on the keyboard, keyed by note name.
    #[serde(default)]
    pub notes: BTreeMap<String, NoteConfiguration>,
    /// Owner, assigned by the persistence layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl TuningConfig {
    /// Captures a keyboard snapshot for saving.
    pub fn from_keyboard(name: impl Into<String>, keyboard: &Keyboard, decay_length: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            base_frequency: keyboard.base_frequency(),
            decay_length,
            notes: keyboard.to_notes_map(),
            created_by: None,
        }
    }

    /// Checks the numeric settings.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(TuningError::InvalidBaseFrequency(self.base_frequency));
        }
        if !self.decay_length.is_finite() || self.decay_length <= 0.0 {
            return Err(TuningError::InvalidDecayLength(self.decay_length));
        }
        Ok(())
    }

    /// Rebuilds the keyboard this configuration was saved from.
    ///
    /// Replaces the whole note map; stored frequencies are recomputed.
    pub fn to_keyboard(&self) -> Result<Keyboard, TuningError> {
        self.validate()?;
        Keyboard::from_notes(self.base_frequency, &self.notes)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
