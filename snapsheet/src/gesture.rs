use crate::{GestureMode, Interpolation, ScrollEndEvent, ScrollEvent, Sheet};

/// Decides whether a drag step resizes the sheet or scrolls its content.
///
/// `extent_delta` is positive when the sheet grows. Growing resizes until the sheet reaches
/// `max`; shrinking resizes only while the content is scrolled to its top.
pub fn classify(
    extent: f32,
    min: f32,
    max: f32,
    scroll_offset: f32,
    extent_delta: f32,
) -> GestureMode {
    if extent_delta > 0.0 && extent < max {
        GestureMode::Resize
    } else if extent_delta < 0.0 && extent > min && scroll_offset <= 0.0 {
        GestureMode::Resize
    } else {
        GestureMode::Scroll
    }
}

/// Per-gesture bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureClassifier {
    init_val: f32,
    mode: Option<GestureMode>,
}

impl GestureClassifier {
    /// Records the initial extent reported by a scroll event, falling back to `current` when the
    /// host reports `0.0`.
    pub fn record_initial(&mut self, reported: f32, current: f32) {
        self.init_val = if reported == 0.0 { current } else { reported };
    }

    pub fn initial_extent(&self) -> f32 {
        self.init_val
    }

    /// The mode of the most recent drag step, if a drag is in progress.
    pub fn mode(&self) -> Option<GestureMode> {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: Option<GestureMode>) {
        self.mode = mode;
    }
}

impl<I: Interpolation> Sheet<I> {
    /// Observation hook for the start of a drag. Never consumes the event.
    pub fn on_scroll_start(&mut self, _event: &ScrollEvent) -> bool {
        false
    }

    /// Handles an extent update during a drag. Never consumes the event.
    ///
    /// The event's extent is written to the extent tracker. A collapsible sheet that reaches its
    /// minimum starts dismissing.
    pub fn on_scrolling(&mut self, event: &ScrollEvent) -> bool {
        if self.torn_down {
            return false;
        }
        self.write_extent(event.extent);
        if self.options.collapsible && !self.is_closing && event.extent == self.options.min_extent
        {
            self.begin_closing();
        }
        let current = self.extent();
        self.gesture.record_initial(event.initial_extent, current);
        self.check_need_close();
        false
    }

    /// Handles the end of a drag. Never consumes the event.
    ///
    /// With extra anchors configured, the sheet resolves its next anchor and starts animating
    /// toward it.
    pub fn on_scroll_end(&mut self, event: &ScrollEndEvent, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        self.write_extent(event.extent);
        self.gesture.set_mode(None);
        if !self.options.anchors.is_empty() {
            let target = self.resolve_next_anchor();
            self.animate_to_anchor(target, now_ms);
        }
        self.check_need_close();
        false
    }

    /// Starts dismissing once the extent is at or below the minimum.
    ///
    /// Returns `true` if this call started the dismiss sequence.
    pub fn check_need_close(&mut self) -> bool {
        if self.extent() <= self.options.min_extent && !self.is_closing {
            return self.begin_closing();
        }
        false
    }

    /// Begins a drag: stops any settle or content animation in flight.
    pub fn drag_start(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.extent_animator.stop();
        self.scroll_animator.stop();
        let event = self.scroll_event(self.extent());
        self.on_scroll_start(&event)
    }

    /// Applies one pointer step of `delta_px` pixels (screen coordinates, positive = downward).
    ///
    /// The step is converted through the last known viewport height. Resizing clamps the extent
    /// to `[min, max]`; scrolling moves the content offset.
    ///
    /// Returns `None` without touching any state while no viewport height is known, and after
    /// teardown.
    pub fn drag_update(&mut self, delta_px: f32) -> Option<GestureMode> {
        let viewport = self.frame.viewport_height;
        if self.torn_down || viewport <= 0.0 {
            strace!(viewport, "drag step ignored");
            return None;
        }
        let extent_delta = -delta_px / viewport;
        let extent = self.extent();
        let mode = classify(
            extent,
            self.options.min_extent,
            self.options.max_extent,
            self.scroll.offset(),
            extent_delta,
        );
        self.gesture.set_mode(Some(mode));

        match mode {
            GestureMode::Resize => {
                let next =
                    (extent + extent_delta).clamp(self.options.min_extent, self.options.max_extent);
                let event = self.scroll_event(next);
                self.on_scrolling(&event);
            }
            GestureMode::Scroll => {
                let offset = self.scroll.offset() - delta_px;
                self.scroll.set_offset(offset);
                self.check_need_close();
            }
        }
        Some(mode)
    }

    /// Ends a drag. `velocity` (pixels per second) is passed along as a hint.
    pub fn drag_end(&mut self, velocity: f32, now_ms: u64) -> bool {
        let event = ScrollEndEvent {
            extent: self.extent(),
            velocity,
        };
        self.on_scroll_end(&event, now_ms)
    }

    pub(crate) fn scroll_event(&self, extent: f32) -> ScrollEvent {
        ScrollEvent {
            extent,
            min_extent: self.options.min_extent,
            max_extent: self.options.max_extent,
            initial_extent: self.options.init_extent,
        }
    }
}
