//! Table-driven step sequencer.
//!
//! Provides the [`Sequencer`] trait shared by every tick-driven sequencer and
//! [`StepSequencer`], which walks a [`SequenceTable`] one tick at a time and
//! hands each entry's action to an [`ActionExecutor`].

use crate::action::ActionExecutor;
use crate::sequence::SequenceTable;
use crate::types::{Playback, SequenceError, StepPosition};

/// Common interface of tick-driven sequencers.
///
/// The caller owns the timing loop: `advance` is invoked once per scheduling
/// period and performs all of that tick's work before returning.
pub trait Sequencer {
    /// Returns true while ticks still produce output.
    fn is_running(&self) -> bool;

    /// Returns to the initial playback state without producing output.
    fn reset(&mut self);

    /// Advances by one tick.
    fn advance(&mut self);
}

impl<S: Sequencer + ?Sized> Sequencer for &mut S {
    fn is_running(&self) -> bool {
        (**self).is_running()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// The current state of a step sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepState {
    /// Nothing left to play. Ticks are ignored.
    Stopped,
    /// The next tick executes the entry at this position.
    Running(StepPosition),
}

/// Errors that can occur when constructing a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerError {
    /// Start index does not name an entry of the table.
    StartIndexOutOfRange {
        /// Requested start index
        index: usize,
        /// Number of entries in the table
        len: usize,
    },
    /// Bounce track has no positions.
    ZeroTrackLength,
    /// Bounce track is longer than the strip it is drawn on.
    TrackExceedsStrip {
        /// Requested track length
        track_length: usize,
        /// Pixels reported by the strip
        pixel_count: usize,
    },
    /// No colors to cycle through.
    EmptyColorSequence,
    /// The sequence table is invalid.
    Table(SequenceError),
}

impl core::fmt::Display for SequencerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequencerError::StartIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "start index {} out of range for table of {} entries",
                    index, len
                )
            }
            SequencerError::ZeroTrackLength => {
                write!(f, "track length must be at least 1")
            }
            SequencerError::TrackExceedsStrip {
                track_length,
                pixel_count,
            } => {
                write!(
                    f,
                    "track length {} exceeds strip of {} pixels",
                    track_length, pixel_count
                )
            }
            SequencerError::EmptyColorSequence => {
                write!(f, "color sequence must have at least one color")
            }
            SequencerError::Table(err) => {
                write!(f, "invalid sequence table: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequencerError {}

impl From<SequenceError> for SequencerError {
    fn from(err: SequenceError) -> Self {
        SequencerError::Table(err)
    }
}

/// Plays a sequence table through an action executor, one entry step per tick.
///
/// Each tick executes the current entry's action once. After an entry has been
/// executed `repeat_count` times the sequencer moves to the next entry; after
/// the last entry it either wraps to the first (`Playback::Loop`) or stops
/// (`Playback::Once`). An empty table never runs.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed table
/// * `E` - Action executor type
/// * `W` - Width of each action payload in bytes
pub struct StepSequencer<'a, E: ActionExecutor<W>, const W: usize> {
    table: SequenceTable<'a, W>,
    executor: E,
    playback: Playback,
    state: StepState,
}

impl<'a, E: ActionExecutor<W>, const W: usize> StepSequencer<'a, E, W> {
    /// Creates a looping sequencer positioned at the first entry.
    pub fn new(table: SequenceTable<'a, W>, executor: E) -> Self {
        let state = initial_state(&table, 0);
        Self {
            table,
            executor,
            playback: Playback::Loop,
            state,
        }
    }

    /// Creates a sequencer starting at `start_index` with the given playback mode.
    ///
    /// # Errors
    /// * `StartIndexOutOfRange` - `start_index` is not below the table length;
    ///   only 0 is accepted for an empty table
    pub fn with_options(
        table: SequenceTable<'a, W>,
        executor: E,
        start_index: usize,
        playback: Playback,
    ) -> Result<Self, SequencerError> {
        let len = table.len();
        if start_index != 0 && start_index >= len {
            return Err(SequencerError::StartIndexOutOfRange {
                index: start_index,
                len,
            });
        }

        Ok(Self {
            state: initial_state(&table, start_index),
            table,
            executor,
            playback,
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> StepState {
        self.state
    }

    /// Returns the position the next tick will execute, if running.
    pub fn position(&self) -> Option<StepPosition> {
        match self.state {
            StepState::Running(position) => Some(position),
            StepState::Stopped => None,
        }
    }

    /// Returns what happens after the last entry.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Returns the table being played.
    pub fn table(&self) -> SequenceTable<'a, W> {
        self.table
    }

    /// Returns a reference to the action executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns a mutable reference to the action executor.
    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Consumes the sequencer and returns its executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Returns true if the sequencer is currently running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, StepState::Running(_))
    }

    /// Rewinds to the first entry. Does not execute anything.
    ///
    /// Also restarts a sequencer that has stopped, unless its table is empty.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.table, 0);
    }

    /// Executes one tick.
    ///
    /// Does nothing once stopped.
    pub fn advance(&mut self) {
        let StepState::Running(mut position) = self.state else {
            return;
        };

        // Running keeps the index in range.
        let Some(entry) = self.table.get(position.index) else {
            self.state = StepState::Stopped;
            return;
        };

        self.executor.execute(&entry.action);

        position.step += 1;
        if position.step < entry.repeat_count {
            self.state = StepState::Running(position);
            return;
        }

        let next = position.index + 1;
        self.state = if next < self.table.len() {
            StepState::Running(StepPosition {
                index: next,
                step: 0,
            })
        } else {
            match self.playback {
                Playback::Loop => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("step sequencer wrapped after {} entries", next);
                    StepState::Running(StepPosition::START)
                }
                Playback::Once => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("step sequencer finished after {} entries", next);
                    StepState::Stopped
                }
            }
        };
    }
}

fn initial_state<const W: usize>(table: &SequenceTable<'_, W>, start_index: usize) -> StepState {
    if start_index < table.len() {
        StepState::Running(StepPosition {
            index: start_index,
            step: 0,
        })
    } else {
        StepState::Stopped
    }
}

impl<E: ActionExecutor<W>, const W: usize> Sequencer for StepSequencer<'_, E, W> {
    fn is_running(&self) -> bool {
        StepSequencer::is_running(self)
    }

    fn reset(&mut self) {
        StepSequencer::reset(self)
    }

    fn advance(&mut self) {
        StepSequencer::advance(self)
    }
}
