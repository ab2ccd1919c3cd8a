//! Named colors and palettes for bounce color sequences.

use palette::{FromColor, Hsv, Srgb};

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const CYAN: Srgb = Srgb::new(0.0, 1.0, 1.0);
pub const MAGENTA: Srgb = Srgb::new(1.0, 0.0, 1.0);

/// Primary colors, in the order a bounce cycles through them.
pub const PRIMARIES: [Srgb; 3] = [RED, GREEN, BLUE];

/// Returns `N` fully saturated colors with evenly spaced hues, starting at red.
///
/// Played as a bounce color sequence, the hue steps once per turnaround and
/// wraps back to red after `N` turns.
pub fn rainbow<const N: usize>() -> [Srgb; N] {
    core::array::from_fn(|i| Srgb::from_color(Hsv::new(360.0 * i as f32 / N as f32, 1.0, 1.0)))
}
