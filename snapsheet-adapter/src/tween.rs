use snapsheet::{Easing, Interpolation, Progress};

/// A small tween between two values over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }
}

/// [`Interpolation`] backed by an optional [`Tween`]. Idle when no tween is set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tweener {
    tween: Option<Tween>,
}

impl Tweener {
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }
}

impl Interpolation for Tweener {
    fn start(&mut self, begin: f32, end: f32, duration_ms: u64, easing: Easing, now_ms: u64) {
        self.tween = Some(Tween::new(begin, end, now_ms, duration_ms, easing));
    }

    fn advance(&mut self, now_ms: u64) -> Progress {
        match self.tween {
            None => Progress::Idle,
            Some(tween) if tween.is_done(now_ms) => Progress::Completed(tween.to),
            Some(tween) => Progress::Running(tween.sample(now_ms)),
        }
    }

    fn reset(&mut self) {
        self.tween = None;
    }

    fn is_running(&self) -> bool {
        self.tween.is_some()
    }
}
