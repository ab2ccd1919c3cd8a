//! Action executors: the hardware side of a step sequencer.

use heapless::Vec;

/// Trait for consuming action payloads.
///
/// Implement this for whatever performs the side effect of a table entry
/// (PWM writes, GPIO, a test recorder). The sequencer calls `execute` exactly
/// once per tick while running. Implementations should handle hardware errors
/// internally - this method cannot fail.
pub trait ActionExecutor<const W: usize> {
    /// Performs the action described by `action`.
    fn execute(&mut self, action: &[u8; W]);
}

impl<E, const W: usize> ActionExecutor<W> for &mut E
where
    E: ActionExecutor<W> + ?Sized,
{
    #[inline]
    fn execute(&mut self, action: &[u8; W]) {
        (**self).execute(action)
    }
}

/// Executor backed by a closure. Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnExecutor<F> {
    f: F,
}

/// Wraps a closure as an action executor.
pub fn from_fn<F, const W: usize>(f: F) -> FnExecutor<F>
where
    F: FnMut(&[u8; W]),
{
    FnExecutor { f }
}

impl<F, const W: usize> ActionExecutor<W> for FnExecutor<F>
where
    F: FnMut(&[u8; W]),
{
    #[inline]
    fn execute(&mut self, action: &[u8; W]) {
        (self.f)(action)
    }
}

/// Executor that discards every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullExecutor;

impl<const W: usize> ActionExecutor<W> for NullExecutor {
    #[inline]
    fn execute(&mut self, _action: &[u8; W]) {}
}

/// Executor that records the actions it receives.
///
/// Keeps the first `CAP` actions; later ones are counted but not stored.
#[derive(Debug, Clone)]
pub struct RecordingExecutor<const W: usize, const CAP: usize> {
    history: Vec<[u8; W], CAP>,
    calls: usize,
}

impl<const W: usize, const CAP: usize> RecordingExecutor<W, CAP> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            calls: 0,
        }
    }

    /// Recorded actions, oldest first.
    pub fn history(&self) -> &[[u8; W]] {
        &self.history
    }

    /// Number of `execute` calls, including unrecorded ones.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    /// The most recently executed action, if it was recorded.
    pub fn last(&self) -> Option<&[u8; W]> {
        if self.calls == self.history.len() {
            self.history.last()
        } else {
            None
        }
    }

    /// Forgets all recorded actions.
    pub fn clear(&mut self) {
        self.history.clear();
        self.calls = 0;
    }
}

impl<const W: usize, const CAP: usize> Default for RecordingExecutor<W, CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const CAP: usize> ActionExecutor<W> for RecordingExecutor<W, CAP> {
    fn execute(&mut self, action: &[u8; W]) {
        self.calls += 1;
        let _ = self.history.push(*action);
    }
}
