//! Enumeration of the recognized note spellings
//!
//! 21 spellings: 7 naturals, 7 sharps, 7 flats. Enharmonic spellings
//! share a semitone index, except across the octave boundary:
//! Cb sits at -1 and B# at 12 instead of wrapping to 11 and 0.
//!
//! Indices are relative to C = 0 within the octave.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PitchError;

/// Returned by [`spelling_to_index`] for an unrecognized spelling.
/// Lies outside the valid range [-1, 12].
pub const INVALID_INDEX: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spelling {
    Cb,
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    Fb,
    #[serde(rename = "E#")]
    Es,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
    #[serde(rename = "B#")]
    Bs,
}

impl Spelling {
    /// Every recognized spelling, ordered by semitone index
    pub const ALL: [Spelling; 21] = [
        Spelling::Cb,
        Spelling::C,
        Spelling::Cs,
        Spelling::Db,
        Spelling::D,
        Spelling::Ds,
        Spelling::Eb,
        Spelling::E,
        Spelling::Fb,
        Spelling::Es,
        Spelling::F,
        Spelling::Fs,
        Spelling::Gb,
        Spelling::G,
        Spelling::Gs,
        Spelling::Ab,
        Spelling::A,
        Spelling::As,
        Spelling::Bb,
        Spelling::B,
        Spelling::Bs,
    ];

    /// Exact, case-sensitive lookup
    ///
    /// Examples:
    ///   "C#" → Cs
    ///   "Db" → Db
    ///   "db" → None
    ///   "H"  → None
    pub fn from_string(s: &str) -> Option<Spelling> {
        match s {
            "C" => Some(Spelling::C),
            "C#" => Some(Spelling::Cs),
            "Db" => Some(Spelling::Db),
            "D" => Some(Spelling::D),
            "D#" => Some(Spelling::Ds),
            "Eb" => Some(Spelling::Eb),
            "E" => Some(Spelling::E),
            "E#" => Some(Spelling::Es),
            "Fb" => Some(Spelling::Fb),
            "F" => Some(Spelling::F),
            "F#" => Some(Spelling::Fs),
            "Gb" => Some(Spelling::Gb),
            "G" => Some(Spelling::G),
            "G#" => Some(Spelling::Gs),
            "Ab" => Some(Spelling::Ab),
            "A" => Some(Spelling::A),
            "A#" => Some(Spelling::As),
            "Bb" => Some(Spelling::Bb),
            "B" => Some(Spelling::B),
            "B#" => Some(Spelling::Bs),
            "Cb" => Some(Spelling::Cb),
            _ => None,
        }
    }

    /// Text form of the spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Spelling::C => "C",
            Spelling::Cs => "C#",
            Spelling::Db => "Db",
            Spelling::D => "D",
            Spelling::Ds => "D#",
            Spelling::Eb => "Eb",
            Spelling::E => "E",
            Spelling::Es => "E#",
            Spelling::Fb => "Fb",
            Spelling::F => "F",
            Spelling::Fs => "F#",
            Spelling::Gb => "Gb",
            Spelling::G => "G",
            Spelling::Gs => "G#",
            Spelling::Ab => "Ab",
            Spelling::A => "A",
            Spelling::As => "A#",
            Spelling::Bb => "Bb",
            Spelling::B => "B",
            Spelling::Bs => "B#",
            Spelling::Cb => "Cb",
        }
    }

    /// Semitone index relative to C, in [-1, 12]
    pub fn semitone_index(self) -> i32 {
        match self {
            Spelling::Cb => -1,
            Spelling::C => 0,
            Spelling::Cs | Spelling::Db => 1,
            Spelling::D => 2,
            Spelling::Ds | Spelling::Eb => 3,
            Spelling::E | Spelling::Fb => 4,
            Spelling::Es | Spelling::F => 5,
            Spelling::Fs | Spelling::Gb => 6,
            Spelling::G => 7,
            Spelling::Gs | Spelling::Ab => 8,
            Spelling::A => 9,
            Spelling::As | Spelling::Bb => 10,
            Spelling::B => 11,
            Spelling::Bs => 12,
        }
    }

    /// Sharp-preferring spelling for an index, wrapped into one octave
    pub fn from_index(index: i32) -> Spelling {
        match index.rem_euclid(12) {
            0 => Spelling::C,
            1 => Spelling::Cs,
            2 => Spelling::D,
            3 => Spelling::Ds,
            4 => Spelling::E,
            5 => Spelling::F,
            6 => Spelling::Fs,
            7 => Spelling::G,
            8 => Spelling::Gs,
            9 => Spelling::A,
            10 => Spelling::As,
            _ => Spelling::B,
        }
    }
}

/// Semitone index for a spelling, or [`INVALID_INDEX`] if unrecognized
pub fn spelling_to_index(spelling: &str) -> i32 {
    Spelling::from_string(spelling).map_or(INVALID_INDEX, Spelling::semitone_index)
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Spelling {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spelling::from_string(s).ok_or_else(|| PitchError::InvalidSpelling(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enharmonic_agreement() {
        assert_eq!(spelling_to_index("C#"), 1);
        assert_eq!(spelling_to_index("Db"), 1);
        assert_eq!(spelling_to_index("F#"), spelling_to_index("Gb"));
        assert_eq!(spelling_to_index("A#"), spelling_to_index("Bb"));
    }

    #[test]
    fn test_e_sharp_and_f_flat() {
        assert_eq!(spelling_to_index("E#"), 5);
        assert_eq!(spelling_to_index("Fb"), 4);
    }

    #[test]
    fn test_octave_boundary_spellings() {
        assert_eq!(spelling_to_index("B#"), 12);
        assert_eq!(spelling_to_index("Cb"), -1);
    }

    #[test]
    fn test_invalid_spelling() {
        assert_eq!(spelling_to_index("H"), INVALID_INDEX);
        assert_eq!(spelling_to_index("c"), INVALID_INDEX);
        assert_eq!(spelling_to_index(""), INVALID_INDEX);
        assert_eq!(spelling_to_index("C##"), INVALID_INDEX);
        assert!(!(-1..=12).contains(&INVALID_INDEX));
    }

    #[test]
    fn test_all_spellings_round_trip_text() {
        assert_eq!(Spelling::ALL.len(), 21);
        for spelling in Spelling::ALL {
            assert_eq!(Spelling::from_string(spelling.as_str()), Some(spelling));
        }
    }

    #[test]
    fn test_all_sorted_by_index() {
        let indices: Vec<i32> = Spelling::ALL.iter().map(|s| s.semitone_index()).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_from_index_prefers_sharps() {
        assert_eq!(Spelling::from_index(1), Spelling::Cs);
        assert_eq!(Spelling::from_index(10), Spelling::As);
        assert_eq!(Spelling::from_index(12), Spelling::C);
        assert_eq!(Spelling::from_index(-1), Spelling::B);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Eb".parse::<Spelling>().unwrap(), Spelling::Eb);
        assert_eq!(
            "Hb".parse::<Spelling>(),
            Err(PitchError::InvalidSpelling("Hb".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&Spelling::Fs).unwrap();
        assert_eq!(json, "\"F#\"");
        let back: Spelling = serde_json::from_str("\"B#\"").unwrap();
        assert_eq!(back, Spelling::Bs);
    }
}
