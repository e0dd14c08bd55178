//! Note durations in thirty-second-note units
//!
//! One unit is one beat-grid slot; a quarter-note beat is eight units and a
//! whole note thirty-two.

use num_rational::Rational32;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::defaults::UNITS_PER_WHOLE;

/// Named note lengths, serialized as their unit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum NoteDuration {
    Whole = 32,
    Half = 16,
    Quarter = 8,
    Eighth = 4,
    Sixteenth = 2,
    ThirtySecond = 1,
}

impl NoteDuration {
    pub fn units(self) -> u32 {
        self as u32
    }

    pub fn from_units(units: u32) -> Option<NoteDuration> {
        match units {
            32 => Some(NoteDuration::Whole),
            16 => Some(NoteDuration::Half),
            8 => Some(NoteDuration::Quarter),
            4 => Some(NoteDuration::Eighth),
            2 => Some(NoteDuration::Sixteenth),
            1 => Some(NoteDuration::ThirtySecond),
            _ => None,
        }
    }

    /// Length as an exact fraction of a whole note
    pub fn as_fraction(self) -> Rational32 {
        units_to_fraction(self.units())
    }
}

/// Any unit count as an exact fraction of a whole note
pub fn units_to_fraction(units: u32) -> Rational32 {
    Rational32::new(units as i32, UNITS_PER_WHOLE as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(NoteDuration::Whole.units(), 32);
        assert_eq!(NoteDuration::Quarter.units(), 8);
        assert_eq!(NoteDuration::ThirtySecond.units(), 1);
        assert_eq!(NoteDuration::from_units(4), Some(NoteDuration::Eighth));
        assert_eq!(NoteDuration::from_units(3), None);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(NoteDuration::Quarter.as_fraction(), Rational32::new(1, 4));
        assert_eq!(NoteDuration::ThirtySecond.as_fraction(), Rational32::new(1, 32));
        assert_eq!(units_to_fraction(12), Rational32::new(3, 8));
    }

    #[test]
    fn test_serializes_as_units() {
        assert_eq!(serde_json::to_string(&NoteDuration::Half).unwrap(), "16");
        let parsed: NoteDuration = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, NoteDuration::Sixteenth);
    }
}
