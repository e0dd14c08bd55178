//! Beat subdivision grid
//!
//! A beat is a fixed array of eight slots, one per thirty-second note of a
//! quarter-note beat. Each slot holds a note or a rest. Every placement,
//! whether named by division, by section or by raw range, resolves to a
//! contiguous slot range and is written through [`Beat::add_range`].
//!
//! ```text
//! slot:        0   1   2   3   4   5   6   7
//! quarter:    [ ----------- 0 ------------- ]
//! eighth:     [ ---- 0 ---- ][ ---- 1 ---- ]
//! sixteenth:  [ - 0 -][ - 1 -][ - 2 -][ - 3 -]
//! ```
//!
//! Writes are all-or-nothing: an `Err` means no slot changed.

use serde::{Deserialize, Serialize};

use super::duration::NoteDuration;
use super::note::Note;
use crate::errors::GridError;

/// Slots per beat
pub const BEAT_SLOTS: usize = 8;

const CAPACITY: i32 = BEAT_SLOTS as i32;

/// Named subdivision of a beat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
}

impl Division {
    /// Slots covered by one note of this division
    pub fn slots(self) -> i32 {
        match self {
            Division::Quarter => CAPACITY,
            Division::Eighth => CAPACITY / 2,
            Division::Sixteenth => CAPACITY / 4,
            Division::ThirtySecond => 1,
        }
    }

    /// Number of aligned sections of this division in one beat
    pub fn sections(self) -> i32 {
        CAPACITY / self.slots()
    }

    pub fn duration(self) -> NoteDuration {
        match self {
            Division::Quarter => NoteDuration::Quarter,
            Division::Eighth => NoteDuration::Eighth,
            Division::Sixteenth => NoteDuration::Sixteenth,
            Division::ThirtySecond => NoteDuration::ThirtySecond,
        }
    }
}

/// One beat at thirty-second-note resolution. `None` slots are rests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Beat {
    slots: [Option<Note>; BEAT_SLOTS],
}

impl Beat {
    /// An all-rest beat
    pub fn new() -> Self {
        Self::default()
    }

    /// Set every slot to `note` (or to rest for `None`)
    pub fn fill(&mut self, note: impl Into<Option<Note>>) {
        self.slots = [note.into(); BEAT_SLOTS];
    }

    /// Set every slot to rest
    pub fn clear(&mut self) {
        self.fill(None);
    }

    /// Copy exactly [`BEAT_SLOTS`] values slot for slot
    pub fn fill_from_array(&mut self, notes: &[Option<Note>]) -> Result<(), GridError> {
        if notes.len() != BEAT_SLOTS {
            return Err(GridError::LengthMismatch {
                expected: BEAT_SLOTS,
                actual: notes.len(),
            });
        }
        self.slots.copy_from_slice(notes);
        Ok(())
    }

    /// Spread up to [`BEAT_SLOTS`] values over the beat
    ///
    /// The stride is `BEAT_SLOTS / notes.len()` rounded up to an even number,
    /// so onsets stay on sixteenth boundaries. Value `j` goes to slot
    /// `j * stride`; values that would land past the last slot are dropped.
    /// Slots between onsets keep their previous contents, so clear first
    /// for a clean fill.
    pub fn fill_from_array_stretched(&mut self, notes: &[Option<Note>]) -> Result<(), GridError> {
        if notes.is_empty() {
            return Err(GridError::EmptyInput);
        }
        if notes.len() > BEAT_SLOTS {
            return Err(GridError::Overflow {
                capacity: BEAT_SLOTS,
                actual: notes.len(),
            });
        }

        let stride = stretch_stride(notes.len());
        for (slot, note) in (0..BEAT_SLOTS).step_by(stride).zip(notes) {
            self.slots[slot] = *note;
        }

        let placed = BEAT_SLOTS.div_ceil(stride);
        if placed < notes.len() {
            log::debug!(
                "Stretch stride {} dropped {} of {} values",
                stride,
                notes.len() - placed,
                notes.len()
            );
        }
        Ok(())
    }

    /// Fill slots `[start, start + length)` with `note`
    ///
    /// Fails if `start` is outside the grid, `length` is negative, or the
    /// range runs past the last slot.
    pub fn add_range(
        &mut self,
        note: impl Into<Option<Note>>,
        start: i32,
        length: i32,
    ) -> Result<(), GridError> {
        if !(0..CAPACITY).contains(&start) || length < 0 || length > CAPACITY - start {
            return Err(GridError::OutOfRange { start, length });
        }
        let note = note.into();
        let start = start as usize;
        let end = start + length as usize;
        self.slots[start..end].fill(note);
        Ok(())
    }

    /// Fill the first (0) or second (1) half of the beat
    pub fn add_eighth(&mut self, note: impl Into<Option<Note>>, section: i32) -> Result<(), GridError> {
        self.add_section(note, section, Division::Eighth)
    }

    /// Fill one of the four quarters of the beat (sections 0-3)
    pub fn add_sixteenth(&mut self, note: impl Into<Option<Note>>, section: i32) -> Result<(), GridError> {
        self.add_section(note, section, Division::Sixteenth)
    }

    fn add_section(
        &mut self,
        note: impl Into<Option<Note>>,
        section: i32,
        division: Division,
    ) -> Result<(), GridError> {
        let sections = division.sections();
        if !(0..sections).contains(&section) {
            return Err(GridError::UnsupportedSection { section, sections });
        }
        let length = division.slots();
        self.add_range(note, section * length, length)
    }

    /// Set a single slot
    pub fn add_at(&mut self, note: impl Into<Option<Note>>, position: i32) -> Result<(), GridError> {
        self.add_range(note, position, 1)
    }

    /// Place a note of the given division starting at `position`
    ///
    /// Quarter only accepts position 0 and fills the whole beat. Eighth and
    /// Sixteenth windows may start at any slot that keeps them inside the
    /// beat. ThirtySecond is a single slot.
    pub fn add_at_division(
        &mut self,
        note: impl Into<Option<Note>>,
        position: i32,
        division: Division,
    ) -> Result<(), GridError> {
        if division == Division::ThirtySecond {
            return self.add_at(note, position);
        }

        let length = division.slots();
        if position < 0 || position > CAPACITY - length {
            if division == Division::Quarter {
                log::warn!("Quarter note placed at position {}; consider Beat::fill", position);
            }
            return Err(GridError::UnsupportedPosition { position, division });
        }
        self.add_range(note, position, length)
    }

    /// All slots in order
    pub fn slots(&self) -> &[Option<Note>; BEAT_SLOTS] {
        &self.slots
    }

    /// Note at a slot; `None` for a rest or an index past the grid
    pub fn get(&self, index: usize) -> Option<Note> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_rest(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Always [`BEAT_SLOTS`]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when every slot is a rest
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<Note>> {
        self.slots.iter()
    }

    /// Collapse consecutive identical slots into (content, units) runs
    ///
    /// Units are thirty-second notes, so the run lengths always sum to
    /// [`BEAT_SLOTS`].
    pub fn runs(&self) -> Vec<(Option<Note>, u32)> {
        let mut runs: Vec<(Option<Note>, u32)> = Vec::new();
        for slot in &self.slots {
            match runs.last_mut() {
                Some((content, units)) if content == slot => *units += 1,
                _ => runs.push((*slot, 1)),
            }
        }
        runs
    }
}

impl<'a> IntoIterator for &'a Beat {
    type Item = &'a Option<Note>;
    type IntoIter = std::slice::Iter<'a, Option<Note>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// `BEAT_SLOTS / count`, bumped to the next even number
fn stretch_stride(count: usize) -> usize {
    let stride = BEAT_SLOTS / count;
    if stride % 2 == 0 {
        stride
    } else {
        stride + 1
    }
}
