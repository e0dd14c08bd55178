//! Default values for pitch and timing arithmetic
//!
//! Tuning anchor, reference octave, tempo and the 1/32-note unit scale shared
//! by beat grids and sequences.

/// Default tempo in beats per minute
pub const DEFAULT_BPM: u32 = 120;

/// Concert pitch anchor (A4) in Hz
pub const A4_FREQUENCY: f64 = 440.0;

/// Octave in which semitone offsets are zero (C5)
pub const REFERENCE_OCTAVE: i32 = 5;

/// Half steps per octave (12-TET)
pub const HALF_STEPS_PER_OCTAVE: i32 = 12;

/// Duration units in a whole note; one unit is a thirty-second note
pub const UNITS_PER_WHOLE: u32 = 32;
