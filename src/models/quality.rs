//! Interval quality classification
//!
//! Classifies the distance between two semitone indices by a fixed table
//! keyed on the absolute half-step distance, 0 through 12. The table is
//! symmetric around the base note and never yields `Augmented`: a tritone
//! reports `Diminished` from either direction.

use serde::{Deserialize, Serialize};

use super::spelling::{spelling_to_index, INVALID_INDEX};

/// Harmonic quality of the relationship between two pitches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Major,
    Minor,
    Perfect,
    Augmented,
    Diminished,
    Invalid,
}

impl Quality {
    /// Quality for an absolute half-step distance
    pub fn from_half_steps(distance: u32) -> Quality {
        match distance {
            0 | 5 | 7 | 12 => Quality::Perfect,
            1 | 3 | 8 | 10 => Quality::Minor,
            2 | 4 | 9 | 11 => Quality::Major,
            6 => Quality::Diminished,
            _ => Quality::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Quality::Invalid)
    }
}

/// Classify the interval from `base` to `compare`
///
/// Either index being [`INVALID_INDEX`] gives `Quality::Invalid`, as does
/// any distance beyond an octave.
pub fn classify_interval(base: i32, compare: i32) -> Quality {
    if base == INVALID_INDEX || compare == INVALID_INDEX {
        return Quality::Invalid;
    }
    let distance = (compare as i64 - base as i64).unsigned_abs();
    match u32::try_from(distance) {
        Ok(distance) => Quality::from_half_steps(distance),
        Err(_) => Quality::Invalid,
    }
}

/// Classify the interval between two spellings
pub fn classify_spellings(base: &str, compare: &str) -> Quality {
    classify_interval(spelling_to_index(base), spelling_to_index(compare))
}
