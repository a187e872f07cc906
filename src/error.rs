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

//! Error type for the strict paths of the tuning engine.
//!
//! Most of the engine is lenient: ratio strings, display helpers and the
//! rationalizer fall back to safe defaults instead of failing. Only the paths
//! that feed frequency calculation, or that validate caller-supplied ranges
//! and configurations, return a [`TuningError`].

use thiserror::Error;

/// Errors raised by the strict parsing and validation paths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// A note name did not match `<A-G>[#]<0-9>`.
    #[error("invalid note name: {0:?}")]
    InvalidNoteName(String),

    /// A tuning system name was not recognised.
    #[error("unknown tuning system: {0:?}")]
    UnknownTuningSystem(String),

    /// The low bound of a note range lies above its high bound.
    #[error("invalid note range: {low} is above {high}")]
    InvalidRange {
        /// Requested low bound.
        low: String,
        /// Requested high bound.
        high: String,
    },

    /// A base frequency was zero, negative or not finite.
    #[error("base frequency must be a positive finite number of Hz (got {0})")]
    InvalidBaseFrequency(f64),

    /// A decay length was zero, negative or not finite.
    #[error("decay length must be a positive finite number of seconds (got {0})")]
    InvalidDecayLength(f64),

    /// A saved configuration carried no notes to rebuild a keyboard from.
    #[error("configuration contains no notes")]
    EmptyNoteMap,
}
