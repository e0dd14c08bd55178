//! Error types for pitch, grid and configuration operations
//!
//! Every failure here is local and recoverable. Mutating operations that
//! return one of these errors leave their receiver exactly as it was.

use thiserror::Error;

use crate::models::beat::Division;

/// Errors raised while resolving note spellings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// Spelling is not one of the 21 recognized note names
    #[error("Invalid spelling: '{0}'")]
    InvalidSpelling(String),

    /// Text could not be read as spelling followed by an octave (e.g. "C#5")
    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),
}

/// Errors raised by beat grid writes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Slot range falls outside the grid
    #[error("Slot range out of bounds: start {start}, length {length}")]
    OutOfRange { start: i32, length: i32 },

    /// Slot-for-slot copy with the wrong number of values
    #[error("Expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// More values than the grid has slots
    #[error("Cannot place {actual} values in {capacity} slots")]
    Overflow { capacity: usize, actual: usize },

    /// Stretched copy with nothing to stretch
    #[error("Cannot stretch an empty set of values over the beat")]
    EmptyInput,

    /// Section number outside the enumerated sections of a division
    #[error("Unsupported section {section} (expected 0..{sections})")]
    UnsupportedSection { section: i32, sections: i32 },

    /// Position not valid for the named division
    #[error("Unsupported position {position} for {division:?} division")]
    UnsupportedPosition { position: i32, division: Division },
}

/// Errors raised while loading timing configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration text could not be deserialized
    #[error("Config parse error: {0}")]
    Parse(String),

    /// Tempo must be at least one beat per minute
    #[error("Invalid BPM: {0}")]
    InvalidBpm(u32),
}
