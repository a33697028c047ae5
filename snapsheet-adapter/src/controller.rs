use snapsheet::{
    Easing, GestureMode, Interpolation, KEYBOARD_PADDING_MS, KeyboardTransition, LayoutFrame,
    Progress, Sheet, SheetOptions, SheetOptionsError,
};

use crate::Tweener;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PointerTrack {
    last_y: f32,
    last_ms: u64,
    velocity: f32,
}

/// A framework-neutral controller that wraps a [`snapsheet::Sheet`] driven by [`Tweener`]s.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_layout` when the host lays out
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` for drags
/// - `tick(now_ms)` each frame/timer tick (settle animations, the keyboard scroll and the
///   keyboard padding)
#[derive(Clone, Debug)]
pub struct Controller {
    sheet: Sheet<Tweener>,
    pointer: Option<PointerTrack>,
    padding: Tweener,
    padding_target: f32,
    bottom_padding: f32,
}

impl Controller {
    pub fn new(options: SheetOptions) -> Result<Self, SheetOptionsError> {
        Ok(Self::from_sheet(Sheet::new(options)?))
    }

    pub fn from_sheet(sheet: Sheet<Tweener>) -> Self {
        let inset = sheet.bottom_inset();
        Self {
            sheet,
            pointer: None,
            padding: Tweener::default(),
            padding_target: inset,
            bottom_padding: inset,
        }
    }

    pub fn sheet(&self) -> &Sheet<Tweener> {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut Sheet<Tweener> {
        &mut self.sheet
    }

    pub fn into_sheet(self) -> Sheet<Tweener> {
        self.sheet
    }

    pub fn is_animating(&self) -> bool {
        self.sheet.is_animating() || self.padding.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Current sheet height in pixels.
    pub fn extent_px(&self) -> f32 {
        self.sheet.extent() * self.sheet.layout_frame().viewport_height
    }

    /// Bottom padding keeping the content above the keyboard, eased toward the latest inset
    /// over [`KEYBOARD_PADDING_MS`].
    pub fn bottom_padding(&self) -> f32 {
        self.bottom_padding
    }

    pub fn on_viewport_size(&mut self, viewport_height: f32) {
        self.sheet.set_viewport_height(viewport_height);
    }

    pub fn on_layout(&mut self, frame: LayoutFrame, now_ms: u64) -> Option<KeyboardTransition> {
        if self.sheet.is_torn_down() {
            return None;
        }
        let inset = frame.keyboard_inset;
        if inset != self.padding_target {
            self.padding_target = inset;
            self.padding.start(
                self.bottom_padding,
                inset,
                KEYBOARD_PADDING_MS,
                Easing::Linear,
                now_ms,
            );
        }
        self.sheet.on_layout(frame, now_ms)
    }

    /// Call this when a pointer lands on the sheet. Any settle animation is cancelled.
    pub fn on_pointer_down(&mut self, y: f32, now_ms: u64) {
        self.sheet.drag_start();
        self.pointer = Some(PointerTrack {
            last_y: y,
            last_ms: now_ms,
            velocity: 0.0,
        });
    }

    /// Feeds a pointer position. Returns `None` when no drag is in progress or the sheet ignored
    /// the step (no viewport yet, or torn down).
    pub fn on_pointer_move(&mut self, y: f32, now_ms: u64) -> Option<GestureMode> {
        let track = self.pointer.as_mut()?;
        let delta = y - track.last_y;
        let dt_ms = now_ms.saturating_sub(track.last_ms);
        if dt_ms > 0 {
            track.velocity = delta * 1000.0 / dt_ms as f32;
        }
        track.last_y = y;
        track.last_ms = now_ms;
        self.sheet.drag_update(delta)
    }

    /// Ends the drag and lets the sheet settle. Returns the release velocity (pixels per second),
    /// or `None` when no drag was in progress.
    pub fn on_pointer_up(&mut self, now_ms: u64) -> Option<f32> {
        let track = self.pointer.take()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "snapsheet_adapter",
            velocity = track.velocity,
            extent = self.sheet.extent(),
            "pointer up"
        );
        self.sheet.drag_end(track.velocity, now_ms);
        Some(track.velocity)
    }

    /// Advances the controller.
    ///
    /// While an animation or deferred action is pending, advances it and returns the new extent.
    /// Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if !self.is_animating() && !self.sheet.has_pending_scroll() {
            return None;
        }
        match self.padding.advance(now_ms) {
            Progress::Running(value) => self.bottom_padding = value,
            Progress::Completed(value) => {
                self.bottom_padding = value;
                self.padding.reset();
            }
            Progress::Idle => {}
        }
        self.sheet.tick(now_ms);
        Some(self.sheet.extent())
    }

    /// Returns `true` once after the sheet asked to be removed from view.
    pub fn take_pop_request(&mut self) -> bool {
        self.sheet.take_pop_request()
    }

    /// Ends the session. See [`Sheet::teardown`].
    pub fn teardown(&mut self) {
        self.pointer = None;
        self.padding.reset();
        self.sheet.teardown();
    }
}
