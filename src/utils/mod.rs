//! Utility modules
//!
//! Pitch arithmetic shared by notes and callers that only hold semitone
//! offsets.

pub mod pitch_utils;

// Re-export commonly used functions
pub use pitch_utils::{frequency, frequency_from_offset, frequency_of};
