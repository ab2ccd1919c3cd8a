//! Core types for sequence construction.

/// A single entry in a sequence table.
///
/// The entry's action is executed once per tick, `repeat_count` ticks in a row,
/// before the sequencer moves on to the next entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Entry<const W: usize> {
    /// Number of consecutive ticks this entry stays active. Must be at least 1.
    pub repeat_count: u32,

    /// Fixed-size payload handed to the action executor.
    pub action: [u8; W],
}

impl<const W: usize> Entry<W> {
    /// Creates a new entry.
    #[inline]
    pub const fn new(repeat_count: u32, action: [u8; W]) -> Self {
        Self {
            repeat_count,
            action,
        }
    }
}

/// What a step sequencer does after the last entry of its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Playback {
    /// Play the table once, then stop.
    Once,

    /// Wrap around to the first entry and keep going.
    #[default]
    Loop,
}

/// Cursor of a running step sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepPosition {
    /// Index of the active table entry.
    pub index: usize,

    /// Ticks already spent on the active entry.
    pub step: u32,
}

impl StepPosition {
    /// Position of the first tick of the table.
    pub const START: Self = Self { index: 0, step: 0 };
}

/// Travel direction of a bounce sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Moving toward the last pixel.
    Forward,

    /// Moving toward pixel 0.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Sequence table validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// An entry has a repeat count of zero.
    ZeroRepeatCount {
        /// Index of the offending entry.
        index: usize,
    },

    /// Table capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::ZeroRepeatCount { index } => {
                write!(f, "entry {} has a repeat count of zero", index)
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
