use crate::{Easing, Interpolation, Progress};

/// Duration of the settle animation toward an anchor.
pub const ANCHOR_ANIMATION_MS: u64 = 200;

/// What happened during one [`AnchorAnimator::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStep {
    Idle,
    /// An intermediate value to write back.
    Tick(f32),
    /// The run finished at this target. The interpolation is idle again.
    Settled(f32),
}

/// Drives one value toward a single target with a linear, fixed-duration interpolation.
///
/// Only one target is tracked: starting again while a run is in flight replaces its bounds.
#[derive(Clone, Debug)]
pub struct AnchorAnimator<I> {
    interpolation: I,
    duration_ms: u64,
    target: Option<f32>,
}

impl<I: Interpolation> AnchorAnimator<I> {
    pub fn new(interpolation: I, duration_ms: u64) -> Self {
        Self {
            interpolation,
            duration_ms,
            target: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn target(&self) -> Option<f32> {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn interpolation(&self) -> &I {
        &self.interpolation
    }

    /// Starts a run from `current` to `target`.
    ///
    /// Returns `false` (and stops any run in flight) when `target == current`.
    pub fn animate_to(&mut self, current: f32, target: f32, now_ms: u64) -> bool {
        if target == current {
            self.stop();
            return false;
        }
        self.interpolation
            .start(current, target, self.duration_ms, Easing::Linear, now_ms);
        self.target = Some(target);
        true
    }

    pub fn advance(&mut self, now_ms: u64) -> AnimationStep {
        let Some(target) = self.target else {
            return AnimationStep::Idle;
        };
        match self.interpolation.advance(now_ms) {
            Progress::Running(value) => AnimationStep::Tick(value),
            Progress::Completed(_) | Progress::Idle => {
                self.stop();
                AnimationStep::Settled(target)
            }
        }
    }

    pub fn stop(&mut self) {
        self.interpolation.reset();
        self.target = None;
    }
}
