use crate::Easing;

/// Output of [`Interpolation::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Progress {
    /// Nothing has been started (or the last run was reset).
    Idle,
    /// An intermediate value.
    Running(f32),
    /// The run reached its end value. Reported until [`Interpolation::reset`] is called.
    Completed(f32),
}

/// A time-driven interpolation primitive.
///
/// The sheet does not ship a curve implementation of its own; adapters provide one (see
/// `snapsheet-adapter`'s `Tween`). The sheet owns its interpolations and resets them once a run
/// completes, so a completed primitive is always idle again before its next `start`.
///
/// Calling `start` while a run is in flight replaces its bounds.
pub trait Interpolation {
    fn start(&mut self, begin: f32, end: f32, duration_ms: u64, easing: Easing, now_ms: u64);

    fn advance(&mut self, now_ms: u64) -> Progress;

    fn reset(&mut self);

    fn is_running(&self) -> bool;
}
