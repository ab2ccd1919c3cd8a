#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Entry`**: A repeat count + fixed-width action payload
//! - **`SequenceTable`**: A validated, borrowed list of entries (`OwnedTable` when built at run time)
//! - **`ActionExecutor`**: Trait to implement for whatever consumes action payloads
//! - **`AnalogWriter`**: Executor writing the first action byte to a set of output channels
//! - **`StepSequencer`**: Walks a table one tick at a time, once or in a loop
//! - **`BounceSequencer`**: Bounces a pixel along an LED strip, cycling colors at each turn
//! - **`PixelStrip`** / **`ChannelOutput`**: Traits to implement for your hardware
//! - **`Sequencer`**: The tick interface shared by both sequencers
//!
//! Nothing in this crate keeps time. Call `advance()` from your own timer,
//! loop, or task at whatever rate the animation should play.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod action;
pub mod analog;
pub mod bounce;
pub mod colors;
pub mod sequence;
pub mod sequencer;
pub mod types;

pub use action::{ActionExecutor, FnExecutor, NullExecutor, RecordingExecutor, from_fn};
pub use analog::{AnalogWriter, ChannelOutput, PwmChannels, Scale};
pub use bounce::{BounceSequencer, PixelStrip};
pub use colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
pub use sequence::{OwnedTable, SequenceTable, TableBuilder};
pub use sequencer::{Sequencer, SequencerError, StepSequencer, StepState};
pub use types::{Direction, Entry, Playback, SequenceError, StepPosition};
