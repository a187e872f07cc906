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

//! Conversion between frequency ratios and cents.
//!
//! A ratio `n/d` and a cents value are two encodings of the same interval:
//! `cents = 1200 * log2(n/d)`. Everything here sits on UI editing paths, so
//! nothing fails: malformed input degrades to the unison `1/1`.

use std::fmt;
use std::str::FromStr;

use log::trace;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Cents in one octave.
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Maximum number of continued-fraction terms expanded by [`cents_to_ratio`].
const MAX_ITERATIONS: usize = 10;

/// Convergence tolerance of the rationalizer.
const TOLERANCE: f64 = 1e-6;

/// Ratios at or above this value are approximated in decimal instead.
const DECIMAL_THRESHOLD: f64 = 10.0;

/// A frequency multiplier `numerator / denominator`. Not necessarily reduced.
///
/// Both sides are always positive; every constructor, deserialization
/// included, goes through [`Ratio::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RatioParts")]
pub struct Ratio {
    numerator: u64,
    denominator: u64,
}

#[derive(Deserialize)]
struct RatioParts {
    numerator: u64,
    denominator: u64,
}

impl From<RatioParts> for Ratio {
    fn from(parts: RatioParts) -> Self {
        Ratio::new(parts.numerator, parts.denominator)
    }
}

impl Ratio {
    /// The unison `1/1`.
    pub const UNISON: Ratio = Ratio {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a ratio, falling back to `1/1` when either side is zero.
    pub const fn new(numerator: u64, denominator: u64) -> Self {
        if numerator == 0 || denominator == 0 {
            return Self::UNISON;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Numerator, never zero.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Denominator, never zero.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// `true` for `1/1` exactly. `2/2` is a non-trivial spelling of the unison.
    pub fn is_unison(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    /// Floating point value of the ratio.
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Size of the interval in cents.
    pub fn cents(&self) -> f64 {
        ratio_to_cents(self.numerator, self.denominator)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::UNISON
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Ratio {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_ratio_string(s))
    }
}

/// Size of the interval `n/d` in cents. Zero on either side yields 0.
pub fn ratio_to_cents(numerator: u64, denominator: u64) -> f64 {
    if numerator == denominator || numerator == 0 || denominator == 0 {
        return 0.0;
    }
    CENTS_PER_OCTAVE * (numerator as f64 / denominator as f64).log2()
}

/// Approximates a cents value by a rational number.
///
/// Below a ratio of 10 this expands a continued fraction, stopping after
/// [`MAX_ITERATIONS`] terms or once a convergent lies within `1e-6` of the
/// target. Larger ratios are rounded to an integer or to hundredths. The
/// result is approximate and not guaranteed to be in lowest terms.
///
/// Intervals too small to express (a reciprocal beyond `u64`, or a ratio that
/// underflows to zero) fall back to `1/1`.
pub fn cents_to_ratio(cents: f64) -> Ratio {
    let target = 2f64.powf(cents / CENTS_PER_OCTAVE);
    if !target.is_finite() || target <= 0.0 || (target - 1.0).abs() < TOLERANCE {
        return Ratio::UNISON;
    }

    if target >= DECIMAL_THRESHOLD {
        return decimal_ratio(target);
    }

    // Convergents p_k / q_k, seeded with p_-1 = 1, p_-2 = 0, q_-1 = 0, q_-2 = 1.
    let (mut p_prev, mut p) = (0u64, 1u64);
    let (mut q_prev, mut q) = (1u64, 0u64);
    let mut x = target;

    for iteration in 0..MAX_ITERATIONS {
        let a = x.floor();
        let Some(a_int) = a.to_u64() else { break };

        let (Some(p_next), Some(q_next)) = (
            a_int.checked_mul(p).and_then(|v| v.checked_add(p_prev)),
            a_int.checked_mul(q).and_then(|v| v.checked_add(q_prev)),
        ) else {
            break;
        };
        (p_prev, p) = (p, p_next);
        (q_prev, q) = (q, q_next);

        trace!("convergent {}: a={} -> {}/{}", iteration, a_int, p, q);

        // 0/1 can sit within the tolerance of a tiny target without being an answer.
        if p != 0 && q != 0 && (p as f64 / q as f64 - target).abs() < TOLERANCE {
            break;
        }

        let fraction = x - a;
        if fraction < f64::EPSILON {
            break;
        }
        x = 1.0 / fraction;
    }

    Ratio::new(p, q)
}

fn decimal_ratio(target: f64) -> Ratio {
    let rounded = target.round();
    if ((target * 1000.0).round() / 1000.0 - rounded).abs() < f64::EPSILON {
        if let Some(whole) = rounded.to_u64() {
            return Ratio::new(whole, 1);
        }
    }
    match (target * 100.0).round().to_u64() {
        Some(hundredths) => Ratio::new(hundredths, 100),
        None => Ratio::UNISON,
    }
}

/// Parses `"n/d"`, tolerating whitespace around either side.
///
/// Returns `None` for anything else: no slash, non-numeric parts, or a zero
/// on either side.
pub fn try_parse_ratio_string(s: &str) -> Option<Ratio> {
    let (numerator, denominator) = s.split_once('/')?;
    let n = numerator.trim().parse::<u64>().ok()?;
    let d = denominator.trim().parse::<u64>().ok()?;
    if n == 0 || d == 0 {
        return None;
    }
    Some(Ratio::new(n, d))
}

/// Parses `"n/d"`, tolerating whitespace around either side.
///
/// Anything else (no slash, non-numeric parts, a zero on either side) yields
/// `1/1`.
pub fn parse_ratio_string(s: &str) -> Ratio {
    try_parse_ratio_string(s).unwrap_or(Ratio::UNISON)
}
