use crate::{Interpolation, KeyboardTransition, LayoutFrame, Sheet};

/// Delay between the keyboard opening and scrolling the focused field into view.
pub const KEYBOARD_SCROLL_DELAY_MS: u64 = 100;
/// Extra space left between the focused field and the keyboard, in pixels.
pub const KEYBOARD_SCROLL_MARGIN: f32 = 10.0;
/// Duration of the scroll-into-view animation.
pub const KEYBOARD_SCROLL_MS: u64 = 200;
/// Duration of the keyboard inset padding animation run by adapters.
pub const KEYBOARD_PADDING_MS: u64 = 100;

/// Edge detector for on-screen keyboard visibility.
///
/// Each transition is reported once per episode, no matter how many frames repeat the same
/// inset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardWatcher {
    opened_notified: bool,
    closed_notified: bool,
}

impl KeyboardWatcher {
    pub fn observe(&mut self, keyboard_inset: f32) -> Option<KeyboardTransition> {
        if keyboard_inset > 0.0 {
            if !self.opened_notified {
                self.opened_notified = true;
                self.closed_notified = false;
                return Some(KeyboardTransition::Opened);
            }
        } else if self.opened_notified && !self.closed_notified {
            self.closed_notified = true;
            self.opened_notified = false;
            return Some(KeyboardTransition::Closed);
        }
        None
    }

    pub fn is_open(&self) -> bool {
        self.opened_notified
    }
}

/// How far the keyboard covers the focused field, in pixels.
///
/// `None` when nothing is focused or the field is fully visible.
pub fn occluded_amount(frame: &LayoutFrame) -> Option<f32> {
    let field = frame.focused_field?;
    let occluded = field.bottom() + frame.keyboard_inset - frame.viewport_height;
    (occluded > 0.0).then_some(occluded)
}

impl<I: Interpolation> Sheet<I> {
    /// Feeds the geometry of the current layout/update cycle.
    ///
    /// When the keyboard appears the sheet expands to its maximum extent. If it is already there,
    /// a focused field hidden behind the keyboard is scrolled into view after
    /// [`KEYBOARD_SCROLL_DELAY_MS`] (see [`Sheet::tick`]).
    pub fn on_layout(&mut self, frame: LayoutFrame, now_ms: u64) -> Option<KeyboardTransition> {
        if self.torn_down {
            return None;
        }
        self.frame = frame;

        let transition = self.keyboard.observe(frame.keyboard_inset);
        match transition {
            Some(KeyboardTransition::Opened) => {
                sdebug!(inset = frame.keyboard_inset, "keyboard opened");
                let max = self.options.max_extent;
                self.animate_to_anchor(max, now_ms);
                if self.extent() == max && occluded_amount(&frame).is_some() {
                    self.pending_scroll_at = Some(now_ms.saturating_add(KEYBOARD_SCROLL_DELAY_MS));
                }
            }
            Some(KeyboardTransition::Closed) => {
                sdebug!("keyboard closed");
            }
            None => {}
        }
        transition
    }

    /// Runs the deferred scroll-into-view if it is due.
    ///
    /// Conditions are checked again against the latest frame: the keyboard may have closed or
    /// focus may have moved since the action was scheduled.
    pub(crate) fn run_pending_scroll(&mut self, now_ms: u64) {
        let Some(due) = self.pending_scroll_at else {
            return;
        };
        if now_ms < due {
            return;
        }
        self.pending_scroll_at = None;

        if self.frame.keyboard_inset <= 0.0 {
            strace!("scroll into view skipped: keyboard closed");
            return;
        }
        let Some(occluded) = occluded_amount(&self.frame) else {
            strace!("scroll into view skipped: field visible or unfocused");
            return;
        };
        let from = self.scroll.offset();
        let to = from + occluded + KEYBOARD_SCROLL_MARGIN;
        self.scroll_animator.animate_to(from, to, now_ms);
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll_at.is_some()
    }

    /// Manually closes the sheet (e.g. from a close button).
    ///
    /// Goes through the same latch as drag-to-dismiss, so `on_dismiss` fires at most once.
    /// Returns `true` if this call started the dismiss sequence.
    pub fn close(&mut self) -> bool {
        if !self.options.collapsible || self.is_closing {
            return false;
        }
        self.begin_closing()
    }

    /// Notifies `on_dismiss` and asks the host to remove the sheet from view.
    ///
    /// Latches the closing state. No-op for sheets that are not collapsible, after the first
    /// dismissal, and after teardown.
    pub fn dismiss(&mut self) -> bool {
        if !self.options.collapsible || self.dismissed || self.torn_down {
            return false;
        }
        self.is_closing = true;
        self.dismissed = true;
        sdebug!(extent = self.extent(), "dismiss");
        if let Some(on_dismiss) = &self.options.on_dismiss {
            on_dismiss();
        }
        self.pop_requested = true;
        true
    }

    /// Returns `true` once after the sheet asked to be removed from view.
    pub fn take_pop_request(&mut self) -> bool {
        core::mem::take(&mut self.pop_requested)
    }

    /// Latches `is_closing` and dismisses. The latch applies to every sheet; only collapsible
    /// ones actually dismiss.
    pub(crate) fn begin_closing(&mut self) -> bool {
        if self.is_closing || self.torn_down {
            return false;
        }
        self.is_closing = true;
        self.dismiss()
    }
}
