//! Shared pitch utility functions
//!
//! Frequency arithmetic in 12-tone equal temperament. Offsets are counted in
//! half steps from C5, which is anchored three half steps above A4 = 440 Hz.

use once_cell::sync::Lazy;

use crate::defaults::{A4_FREQUENCY, HALF_STEPS_PER_OCTAVE, REFERENCE_OCTAVE};
use crate::models::spelling::{spelling_to_index, INVALID_INDEX};

/// Frequency ratio between adjacent half steps, 2^(1/12)
pub static HALF_STEP_RATIO: Lazy<f64> = Lazy::new(|| 2f64.powf(1.0 / HALF_STEPS_PER_OCTAVE as f64));

/// Frequency of C5 in Hz
pub static C5_FREQUENCY: Lazy<f64> =
    Lazy::new(|| A4_FREQUENCY * 2f64.powf(3.0 / HALF_STEPS_PER_OCTAVE as f64));

/// Half steps from C5 for a semitone index in a given octave
pub fn half_steps_from_c5(index: i32, octave: i32) -> i64 {
    (octave as i64 - REFERENCE_OCTAVE as i64) * HALF_STEPS_PER_OCTAVE as i64 + index as i64
}

/// Frequency in Hz of a pitch `half_steps` away from C5
pub fn frequency_from_offset(half_steps: i64) -> f64 {
    *C5_FREQUENCY * 2f64.powf(half_steps as f64 / HALF_STEPS_PER_OCTAVE as f64)
}

/// Frequency in Hz of a semitone index in an octave
///
/// Returns NaN for [`INVALID_INDEX`].
pub fn frequency(index: i32, octave: i32) -> f64 {
    if index == INVALID_INDEX {
        return f64::NAN;
    }
    frequency_from_offset(half_steps_from_c5(index, octave))
}

/// Frequency in Hz of a spelled note in an octave
///
/// Returns NaN for an unrecognized spelling.
pub fn frequency_of(spelling: &str, octave: i32) -> f64 {
    frequency(spelling_to_index(spelling), octave)
}
