//! Ordered note sequences with tempo-based timing
//!
//! A sequence is a FIFO of notes (or rests) tagged with durations in
//! thirty-second-note units, the same resolution as a beat grid slot.
//! Durations convert to nanoseconds with the sequence tempo:
//!
//! ```text
//! nanoseconds = (bpm / 60 / 1e-9) * (units / 32)
//! ```

use num_rational::Rational32;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::TimingConfig;
use crate::defaults::{DEFAULT_BPM, UNITS_PER_WHOLE};
use crate::models::beat::Beat;
use crate::models::duration::{units_to_fraction, NoteDuration};
use crate::models::note::Note;

/// A note (or rest) held for a number of thirty-second-note units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedNote {
    pub note: Option<Note>,
    pub units: u32,
}

impl TimedNote {
    pub fn new(note: impl Into<Option<Note>>, units: u32) -> Self {
        Self {
            note: note.into(),
            units,
        }
    }

    /// Frequency in Hz, `None` for a rest
    pub fn frequency(&self) -> Option<f64> {
        self.note.map(|n| n.frequency())
    }

    /// Named duration, if the unit count has one
    pub fn duration(&self) -> Option<NoteDuration> {
        NoteDuration::from_units(self.units)
    }

    /// Length as a fraction of a whole note
    pub fn length(&self) -> Rational32 {
        units_to_fraction(self.units)
    }
}

/// A timed entry placed on the sequence timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledNote {
    pub note: Option<Note>,
    pub start_ns: u64,
    pub length_ns: u64,
}

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Convert a duration in units to nanoseconds at a tempo
///
/// Evaluated in integer arithmetic, truncating toward zero.
pub fn duration_to_nanoseconds(bpm: u32, units: u32) -> u64 {
    let nanos = bpm as u128 * units as u128 * NANOS_PER_SECOND / (60 * UNITS_PER_WHOLE as u128);
    u64::try_from(nanos).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    bpm: u32,
    notes: VecDeque<TimedNote>,
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            notes: VecDeque::new(),
        }
    }
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TimingConfig) -> Self {
        Self {
            bpm: config.bpm,
            ..Self::default()
        }
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Set the tempo; negative values are taken by magnitude
    pub fn set_bpm(&mut self, bpm: i32) {
        self.bpm = bpm.unsigned_abs();
    }

    /// Append a note with a named duration
    pub fn push(&mut self, note: impl Into<Option<Note>>, duration: NoteDuration) {
        self.push_units(note, duration.units());
    }

    /// Append a note with a raw unit count
    pub fn push_units(&mut self, note: impl Into<Option<Note>>, units: u32) {
        self.notes.push_back(TimedNote::new(note, units));
    }

    /// Append a beat grid, one entry per run of identical slots
    pub fn extend_from_beat(&mut self, beat: &Beat) {
        for (note, units) in beat.runs() {
            self.push_units(note, units);
        }
    }

    pub fn extend_from_beats<'a>(&mut self, beats: impl IntoIterator<Item = &'a Beat>) {
        for beat in beats {
            self.extend_from_beat(beat);
        }
    }

    pub fn pop_front(&mut self) -> Option<TimedNote> {
        self.notes.pop_front()
    }

    pub fn front(&self) -> Option<&TimedNote> {
        self.notes.front()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, TimedNote> {
        self.notes.iter()
    }

    /// Length of an entry at this sequence's tempo
    pub fn nanoseconds(&self, entry: &TimedNote) -> u64 {
        duration_to_nanoseconds(self.bpm, entry.units)
    }

    /// Entries with their start offsets, in order
    pub fn timeline(&self) -> Vec<ScheduledNote> {
        let mut start_ns = 0u64;
        self.notes
            .iter()
            .map(|entry| {
                let length_ns = self.nanoseconds(entry);
                let scheduled = ScheduledNote {
                    note: entry.note,
                    start_ns,
                    length_ns,
                };
                start_ns = start_ns.saturating_add(length_ns);
                scheduled
            })
            .collect()
    }

    pub fn total_nanoseconds(&self) -> u64 {
        self.notes
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(self.nanoseconds(entry)))
    }

    /// Total length as a fraction of a whole note
    pub fn total_length(&self) -> Rational32 {
        self.notes.iter().map(TimedNote::length).sum()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a TimedNote;
    type IntoIter = std::collections::vec_deque::Iter<'a, TimedNote>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
