//! Note value object: a spelling in an octave
//!
//! The semitone index is always derived from the spelling, so it can never
//! drift out of sync with it. Octaves are unbounded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::quality::{classify_spellings, Quality};
use super::spelling::Spelling;
use crate::defaults::{HALF_STEPS_PER_OCTAVE, REFERENCE_OCTAVE};
use crate::errors::PitchError;
use crate::utils::pitch_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    spelling: Spelling,
    octave: i32,
}

impl Note {
    /// Create a note from a spelling such as "C#" and an octave
    ///
    /// Unrecognized spellings are rejected.
    pub fn new(spelling: &str, octave: i32) -> Result<Self, PitchError> {
        let spelling = spelling.parse::<Spelling>()?;
        Ok(Self::from_spelling(spelling, octave))
    }

    pub fn from_spelling(spelling: Spelling, octave: i32) -> Self {
        Self { spelling, octave }
    }

    /// Change the spelling, keeping the octave
    ///
    /// On error the note is left unchanged.
    pub fn set_spelling(&mut self, spelling: &str) -> Result<(), PitchError> {
        match Spelling::from_string(spelling) {
            Some(parsed) => {
                self.spelling = parsed;
                Ok(())
            }
            None => {
                log::warn!("Rejected spelling '{}' for note {}", spelling, self);
                Err(PitchError::InvalidSpelling(spelling.to_string()))
            }
        }
    }

    pub fn set_octave(&mut self, octave: i32) {
        self.octave = octave;
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// Spelling text, e.g. "Db"
    pub fn name(&self) -> &'static str {
        self.spelling.as_str()
    }

    /// Semitone index relative to C, in [-1, 12]
    pub fn semitone_index(&self) -> i32 {
        self.spelling.semitone_index()
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn half_steps_from_c5(&self) -> i64 {
        pitch_utils::half_steps_from_c5(self.semitone_index(), self.octave)
    }

    /// Frequency in Hz
    pub fn frequency(&self) -> f64 {
        pitch_utils::frequency(self.semitone_index(), self.octave)
    }

    /// Harmonic quality of the interval between this note and another
    ///
    /// Octaves are ignored; only the spellings are compared.
    pub fn relationship(&self, other: &Note) -> Quality {
        classify_spellings(self.name(), other.name())
    }

    /// The note `half_steps` away, spelled with sharps
    pub fn transposed(&self, half_steps: i32) -> Note {
        let total = self.half_steps_from_c5() + half_steps as i64;
        let per_octave = HALF_STEPS_PER_OCTAVE as i64;
        let octave = (REFERENCE_OCTAVE as i64 + total.div_euclid(per_octave))
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let index = total.rem_euclid(per_octave) as i32;
        Note::from_spelling(Spelling::from_index(index), octave)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave)
    }
}

impl FromStr for Note {
    type Err = PitchError;

    /// Parse "C#5", "Bb-1", "E4"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PitchError::InvalidNoteName(s.to_string());

        let mut chars = s.char_indices();
        let (_, letter) = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let split = match chars.next() {
            Some((_, '#')) | Some((_, 'b')) => 2,
            Some(_) => 1,
            None => return Err(invalid()),
        };

        let (spelling, octave) = s.split_at(split);
        let spelling = Spelling::from_string(spelling).ok_or_else(invalid)?;
        let octave = octave.parse::<i32>().map_err(|_| invalid())?;
        Ok(Note::from_spelling(spelling, octave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let note = Note::new("C#", 4).unwrap();
        assert_eq!(note.spelling(), Spelling::Cs);
        assert_eq!(note.name(), "C#");
        assert_eq!(note.semitone_index(), 1);
        assert_eq!(note.octave(), 4);
    }

    #[test]
    fn test_new_rejects_invalid_spelling() {
        assert_eq!(
            Note::new("H", 4),
            Err(PitchError::InvalidSpelling("H".to_string()))
        );
    }

    #[test]
    fn test_set_spelling_rederives_index() {
        let mut note = Note::new("C", 5).unwrap();
        note.set_spelling("B#").unwrap();
        assert_eq!(note.semitone_index(), 12);
        note.set_spelling("Cb").unwrap();
        assert_eq!(note.semitone_index(), -1);
    }

    #[test]
    fn test_set_spelling_invalid_keeps_state() {
        let mut note = Note::new("Eb", 3).unwrap();
        let before = note;
        assert!(note.set_spelling("E##").is_err());
        assert_eq!(note, before);
        assert_eq!(note.semitone_index(), 3);
    }

    #[test]
    fn test_set_octave_accepts_any() {
        let mut note = Note::new("A", 4).unwrap();
        note.set_octave(-20);
        assert_eq!(note.octave(), -20);
        note.set_octave(1000);
        assert_eq!(note.octave(), 1000);
    }

    #[test]
    fn test_frequency() {
        let a4 = Note::new("A", 4).unwrap();
        assert!((a4.frequency() - 440.0).abs() < 1e-9);
        let c5 = Note::new("C", 5).unwrap();
        assert_eq!(c5.frequency().to_bits(), pitch_utils::frequency(0, 5).to_bits());
    }

    #[test]
    fn test_relationship() {
        let c = Note::new("C", 4).unwrap();
        let g = Note::new("G", 6).unwrap();
        assert_eq!(c.relationship(&g), Quality::Perfect);
        assert_eq!(g.relationship(&c), Quality::Perfect);
    }

    #[test]
    fn test_transposed() {
        let c5 = Note::new("C", 5).unwrap();
        assert_eq!(c5.transposed(1), Note::new("C#", 5).unwrap());
        assert_eq!(c5.transposed(-1), Note::new("B", 4).unwrap());
        assert_eq!(c5.transposed(24), Note::new("C", 7).unwrap());

        let cb = Note::new("Cb", 5).unwrap();
        assert_eq!(cb.transposed(0), Note::new("B", 4).unwrap());
    }

    #[test]
    fn test_transposed_frequency_matches_offset() {
        let note = Note::new("E", 3).unwrap();
        let up = note.transposed(7);
        let expected = pitch_utils::frequency_from_offset(note.half_steps_from_c5() + 7);
        assert_eq!(up.frequency().to_bits(), expected.to_bits());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("C#5".parse::<Note>().unwrap(), Note::new("C#", 5).unwrap());
        assert_eq!("Bb-1".parse::<Note>().unwrap(), Note::new("Bb", -1).unwrap());
        assert_eq!("E4".parse::<Note>().unwrap().to_string(), "E4");
        assert_eq!(Note::new("Gb", 2).unwrap().to_string(), "Gb2");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "C", "c4", "H4", "C#", "Cx4", "C#4.5"] {
            assert_eq!(
                text.parse::<Note>(),
                Err(PitchError::InvalidNoteName(text.to_string())),
                "{text}"
            );
        }
    }
}
