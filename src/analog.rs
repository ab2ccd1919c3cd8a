//! Multi-channel analog output.
//!
//! [`AnalogWriter`] is the action executor for single-byte intensity tables:
//! it writes the first byte of each action, optionally scaled, to every
//! configured channel. [`PwmChannels`] adapts `embedded-hal` PWM pins to the
//! [`ChannelOutput`] trait it writes through.

use crate::action::ActionExecutor;
use embedded_hal::pwm::SetDutyCycle;

/// Trait for abstracting analog (PWM) channel hardware.
pub trait ChannelOutput {
    /// Identifier of a single output channel.
    type Channel: Copy;

    /// Drives `channel` at `intensity` (0 = off, 255 = full).
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write_channel(&mut self, channel: Self::Channel, intensity: u8);
}

impl<O: ChannelOutput + ?Sized> ChannelOutput for &mut O {
    type Channel = O::Channel;

    #[inline]
    fn write_channel(&mut self, channel: Self::Channel, intensity: u8) {
        (**self).write_channel(channel, intensity)
    }
}

/// Intensity scaling factor, `num / den`, never above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scale {
    num: u16,
    den: u16,
}

impl Scale {
    /// Pass intensities through unchanged.
    pub const FULL: Self = Self { num: 1, den: 1 };

    /// Halve every intensity.
    pub const HALF: Self = Self { num: 1, den: 2 };

    /// Creates a `num / den` scale. Returns `None` if `den` is zero or the
    /// ratio exceeds 1.
    pub const fn new(num: u16, den: u16) -> Option<Self> {
        if den == 0 || num > den {
            None
        } else {
            Some(Self { num, den })
        }
    }

    /// Scales an intensity, rounding down.
    #[inline]
    pub fn apply(self, intensity: u8) -> u8 {
        // num <= den keeps the result within u8.
        (u32::from(intensity) * u32::from(self.num) / u32::from(self.den)) as u8
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::FULL
    }
}

/// Writes the first action byte to a fixed, ordered set of channels.
///
/// # Type Parameters
/// * `'a` - Lifetime of the channel list
/// * `O` - Channel output implementation
pub struct AnalogWriter<'a, O: ChannelOutput> {
    output: O,
    channels: &'a [O::Channel],
    scale: Scale,
}

impl<'a, O: ChannelOutput> AnalogWriter<'a, O> {
    /// Creates a writer that passes intensities through unchanged.
    pub fn new(output: O, channels: &'a [O::Channel]) -> Self {
        Self::with_scale(output, channels, Scale::FULL)
    }

    /// Creates a writer that scales every intensity before writing it.
    pub fn with_scale(output: O, channels: &'a [O::Channel], scale: Scale) -> Self {
        Self {
            output,
            channels,
            scale,
        }
    }

    /// Returns the channels written on every action, in order.
    pub fn channels(&self) -> &'a [O::Channel] {
        self.channels
    }

    /// Returns the intensity scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns a reference to the channel output.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Returns a mutable reference to the channel output.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Releases the channel output.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Writes `intensity`, scaled, to every channel in order.
    pub fn write_all(&mut self, intensity: u8) {
        let value = self.scale.apply(intensity);
        for &channel in self.channels {
            self.output.write_channel(channel, value);
        }
    }
}

impl<O: ChannelOutput, const W: usize> ActionExecutor<W> for AnalogWriter<'_, O> {
    fn execute(&mut self, action: &[u8; W]) {
        if let Some(&intensity) = action.first() {
            self.write_all(intensity);
        }
    }
}

/// Channel output over `embedded-hal` PWM pins.
///
/// Channel identifiers are indices into the pin array; unknown indices are
/// ignored. Intensity 255 maps to the pin's maximum duty cycle.
pub struct PwmChannels<P: SetDutyCycle, const C: usize> {
    pins: [P; C],
    inverted: bool,
}

impl<P: SetDutyCycle, const C: usize> PwmChannels<P, C> {
    /// Creates a channel set.
    ///
    /// # Arguments
    /// * `pins` - PWM channels, addressed by index
    /// * `inverted` - true for common anode wiring (full duty is off)
    pub fn new(pins: [P; C], inverted: bool) -> Self {
        Self { pins, inverted }
    }

    /// Returns the PWM pins, indexed by channel.
    pub fn pins(&self) -> &[P; C] {
        &self.pins
    }

    /// Releases the PWM pins.
    pub fn into_pins(self) -> [P; C] {
        self.pins
    }
}

impl<P: SetDutyCycle, const C: usize> ChannelOutput for PwmChannels<P, C> {
    type Channel = usize;

    fn write_channel(&mut self, channel: usize, intensity: u8) {
        let inverted = self.inverted;
        if let Some(pin) = self.pins.get_mut(channel) {
            let level = if inverted { u8::MAX - intensity } else { intensity };
            let _ = pin.set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX));
        }
    }
}
