//! Models module
//!
//! Value types for pitches, notes, durations and beat grids.

pub mod beat;
pub mod duration;
pub mod note;
pub mod quality;
pub mod spelling;

// Re-export commonly used types
pub use beat::{Beat, Division, BEAT_SLOTS};
pub use duration::NoteDuration;
pub use note::Note;
pub use quality::{classify_interval, classify_spellings, Quality};
pub use spelling::{spelling_to_index, Spelling, INVALID_INDEX};
