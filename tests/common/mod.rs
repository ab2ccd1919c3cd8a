//! Shared test infrastructure for tick-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use palette::Srgb;
use tick_sequencer::{ChannelOutput, PixelStrip};

// ============================================================================
// Mock Strip
// ============================================================================

/// A single call made on the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripEvent {
    Clear,
    Set(usize, Srgb),
    Commit,
}

/// Mock LED strip that records every call and the committed frames
pub struct MockStrip {
    pixels: usize,
    pending: Option<(usize, Srgb)>,
    events: heapless::Vec<StripEvent, 256>,
    frames: heapless::Vec<Option<(usize, Srgb)>, 64>,
}

impl MockStrip {
    pub fn new(pixels: usize) -> Self {
        Self {
            pixels,
            pending: None,
            events: heapless::Vec::new(),
            frames: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[StripEvent] {
        &self.events
    }

    /// Lit pixel of each committed frame, oldest first
    pub fn frames(&self) -> &[Option<(usize, Srgb)>] {
        &self.frames
    }

    /// Positions of the committed frames, oldest first
    pub fn positions(&self) -> heapless::Vec<usize, 64> {
        self.frames.iter().flatten().map(|&(i, _)| i).collect()
    }
}

impl PixelStrip for MockStrip {
    fn clear(&mut self) {
        self.pending = None;
        let _ = self.events.push(StripEvent::Clear);
    }

    fn set_pixel(&mut self, index: usize, color: Srgb) {
        self.pending = Some((index, color));
        let _ = self.events.push(StripEvent::Set(index, color));
    }

    fn commit(&mut self) {
        let _ = self.frames.push(self.pending);
        let _ = self.events.push(StripEvent::Commit);
    }

    fn pixel_count(&self) -> usize {
        self.pixels
    }
}

// ============================================================================
// Mock Channel Output
// ============================================================================

/// Mock channel driver that records (channel, intensity) writes
pub struct MockChannels {
    writes: heapless::Vec<(u8, u8), 64>,
}

impl MockChannels {
    pub fn new() -> Self {
        Self {
            writes: heapless::Vec::new(),
        }
    }

    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }
}

impl ChannelOutput for MockChannels {
    type Channel = u8;

    fn write_channel(&mut self, channel: u8, intensity: u8) {
        let _ = self.writes.push((channel, intensity));
    }
}

// ============================================================================
// Mock PWM pin
// ============================================================================

/// Mock PWM channel with a configurable maximum duty cycle
pub struct MockPwm {
    max_duty: u16,
    duty: u16,
    writes: usize,
}

impl MockPwm {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duty: 0,
            writes: 0,
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use tick_sequencer::{BLACK, BLUE, GREEN, RED};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
