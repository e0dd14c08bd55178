//! notegrid
//!
//! Pitch arithmetic and fixed-resolution rhythmic grids for procedural
//! composition: note spellings and their semitone indices, equal-tempered
//! frequencies, interval quality, eight-slot beat grids and tempo-timed
//! note sequences.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod config;
pub mod defaults;
pub mod errors;
pub mod models;
pub mod sequence;
pub mod utils;

// Re-export commonly used types
pub use config::TimingConfig;
pub use errors::{ConfigError, GridError, PitchError};
pub use models::*;
pub use sequence::{duration_to_nanoseconds, ScheduledNote, Sequence, TimedNote};
pub use utils::{frequency, frequency_from_offset, frequency_of};
