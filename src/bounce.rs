//! Bounce animation for addressable LED strips.
//!
//! A single lit pixel travels back and forth along a track, switching to the
//! next color of a cyclic color sequence each time it turns around.

use crate::sequencer::{Sequencer, SequencerError};
use crate::types::Direction;
use palette::Srgb;

/// Trait for abstracting addressable LED strip hardware.
///
/// Drawing calls (`clear`, `set_pixel`) only touch the frame buffer; nothing
/// is visible until `commit`.
pub trait PixelStrip {
    /// Blanks every pixel of the frame buffer.
    fn clear(&mut self);

    /// Sets one pixel of the frame buffer.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to their hardware's native format.
    fn set_pixel(&mut self, index: usize, color: Srgb);

    /// Pushes the frame buffer to the hardware.
    fn commit(&mut self);

    /// Number of pixels on the strip.
    fn pixel_count(&self) -> usize;
}

impl<S: PixelStrip + ?Sized> PixelStrip for &mut S {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn set_pixel(&mut self, index: usize, color: Srgb) {
        (**self).set_pixel(index, color)
    }

    fn commit(&mut self) {
        (**self).commit()
    }

    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }
}

/// Bounces a single pixel across the first `track_length` pixels of a strip.
///
/// Every tick draws exactly one frame: the pixel at the current position in
/// the current color. When the pixel reaches either end of the track it turns
/// around and the next color of the sequence is selected, so a track of length
/// `L > 1` repeats its positions every `2 * (L - 1)` ticks. The end pixels are
/// drawn once per turnaround, never twice in a row. A one-pixel track turns
/// around, and changes color, on every tick.
///
/// The animation never stops; `reset` is a no-op. Build a new sequencer to
/// restart it from pixel 0.
///
/// # Type Parameters
/// * `'a` - Lifetime of the borrowed color sequence
/// * `S` - Strip implementation type
pub struct BounceSequencer<'a, S: PixelStrip> {
    strip: S,
    colors: &'a [Srgb],
    track_length: usize,
    position: usize,
    direction: Direction,
    color_index: usize,
}

impl<'a, S: PixelStrip> BounceSequencer<'a, S> {
    /// Creates a sequencer bouncing across the first `track_length` pixels.
    ///
    /// # Errors
    /// * `ZeroTrackLength` - `track_length` is zero
    /// * `TrackExceedsStrip` - `track_length` is larger than `strip.pixel_count()`
    /// * `EmptyColorSequence` - `colors` is empty
    pub fn new(strip: S, track_length: usize, colors: &'a [Srgb]) -> Result<Self, SequencerError> {
        if track_length == 0 {
            return Err(SequencerError::ZeroTrackLength);
        }

        let pixel_count = strip.pixel_count();
        if track_length > pixel_count {
            return Err(SequencerError::TrackExceedsStrip {
                track_length,
                pixel_count,
            });
        }

        if colors.is_empty() {
            return Err(SequencerError::EmptyColorSequence);
        }

        Ok(Self {
            strip,
            colors,
            track_length,
            position: 0,
            direction: Direction::Forward,
            color_index: 0,
        })
    }

    /// Creates a sequencer bouncing across the whole strip.
    pub fn for_strip(strip: S, colors: &'a [Srgb]) -> Result<Self, SequencerError> {
        let track_length = strip.pixel_count();
        Self::new(strip, track_length, colors)
    }

    /// Position the next tick will draw.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Direction the pixel is travelling.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Index into the color sequence of the color the next tick will draw.
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Color the next tick will draw.
    pub fn current_color(&self) -> Srgb {
        self.colors[self.color_index]
    }

    /// Number of pixels the animation bounces across.
    pub fn track_length(&self) -> usize {
        self.track_length
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consumes the sequencer and returns the strip.
    pub fn into_strip(self) -> S {
        self.strip
    }

    /// Draws the current frame, then moves the pixel one step.
    pub fn advance(&mut self) {
        let color = self.current_color();
        self.strip.clear();
        self.strip.set_pixel(self.position, color);
        self.strip.commit();

        let last = self.track_length - 1;
        let at_boundary = match self.direction {
            Direction::Forward => self.position >= last,
            Direction::Backward => self.position == 0,
        };

        if at_boundary {
            self.turn_around();
        }

        // A one-pixel track has nowhere to go.
        if last > 0 {
            self.position = match self.direction {
                Direction::Forward => self.position + 1,
                Direction::Backward => self.position - 1,
            };
        }
    }

    fn turn_around(&mut self) {
        self.direction = self.direction.reversed();
        self.color_index = (self.color_index + 1) % self.colors.len();

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "bounce turned {} at pixel {}, color {}",
            self.direction,
            self.position,
            self.color_index
        );
    }
}

impl<S: PixelStrip> Sequencer for BounceSequencer<'_, S> {
    fn is_running(&self) -> bool {
        true
    }

    fn reset(&mut self) {}

    fn advance(&mut self) {
        BounceSequencer::advance(self)
    }
}
