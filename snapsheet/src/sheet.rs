use crate::animator::{ANCHOR_ANIMATION_MS, AnchorAnimator, AnimationStep};
use crate::gesture::GestureClassifier;
use crate::lifecycle::{KEYBOARD_SCROLL_MS, KeyboardWatcher};
use crate::{
    AnchorSet, Interpolation, LayoutFrame, SheetOptions, SheetOptionsError, SheetScroll,
    SheetState,
};

/// A headless draggable sheet.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with drag steps (or scroll notifications), layout frames and
///   `tick(now_ms)` calls from its frame loop.
/// - Animations run through an [`Interpolation`] supplied by the adapter.
///
/// A `Sheet` is one mounted session: create it with [`Sheet::new`] and call
/// [`Sheet::teardown`] when the host unmounts it.
#[derive(Clone, Debug)]
pub struct Sheet<I> {
    pub(crate) options: SheetOptions,
    pub(crate) anchors: AnchorSet,
    pub(crate) scroll: SheetScroll,
    pub(crate) gesture: GestureClassifier,
    pub(crate) extent_animator: AnchorAnimator<I>,
    pub(crate) scroll_animator: AnchorAnimator<I>,
    pub(crate) keyboard: KeyboardWatcher,
    pub(crate) frame: LayoutFrame,
    pub(crate) pending_scroll_at: Option<u64>,
    pub(crate) current_anchor: f32,
    pub(crate) is_closing: bool,
    pub(crate) dismissed: bool,
    pub(crate) pop_requested: bool,
    pub(crate) torn_down: bool,
}

impl<I: Interpolation + Default> Sheet<I> {
    /// Validates `options` and mounts a sheet at `options.init_extent`.
    pub fn new(options: SheetOptions) -> Result<Self, SheetOptionsError> {
        Self::with_interpolations(options, I::default(), I::default())
    }
}

impl<I: Interpolation> Sheet<I> {
    /// Like [`Sheet::new`], with explicit interpolations for the extent and the content offset.
    pub fn with_interpolations(
        options: SheetOptions,
        extent: I,
        scroll: I,
    ) -> Result<Self, SheetOptionsError> {
        if let Err(err) = options.validate() {
            swarn!(%err, "rejected sheet options");
            return Err(err);
        }
        let anchors = AnchorSet::new(
            options.min_extent,
            options.init_extent,
            options.max_extent,
            &options.anchors,
        );
        sdebug!(
            min = options.min_extent,
            init = options.init_extent,
            max = options.max_extent,
            collapsible = options.collapsible,
            anchors = anchors.len(),
            "Sheet::new"
        );
        let init = options.init_extent;
        Ok(Self {
            anchors,
            scroll: SheetScroll::new(init),
            gesture: GestureClassifier::default(),
            extent_animator: AnchorAnimator::new(extent, ANCHOR_ANIMATION_MS),
            scroll_animator: AnchorAnimator::new(scroll, KEYBOARD_SCROLL_MS),
            keyboard: KeyboardWatcher::default(),
            frame: LayoutFrame::default(),
            pending_scroll_at: None,
            current_anchor: init,
            is_closing: false,
            dismissed: false,
            pop_requested: false,
            torn_down: false,
            options,
        })
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn extent(&self) -> f32 {
        self.scroll.extent()
    }

    pub fn scroll(&self) -> &SheetScroll {
        &self.scroll
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Sets the content offset directly, e.g. from a host-driven scroll view.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll.set_offset(offset);
    }

    /// The anchor the sheet last settled at.
    pub fn current_anchor(&self) -> f32 {
        self.current_anchor
    }

    /// The anchor the sheet is currently animating toward, if any.
    pub fn target_anchor(&self) -> Option<f32> {
        self.extent_animator.target()
    }

    pub fn gesture(&self) -> &GestureClassifier {
        &self.gesture
    }

    pub fn is_closing(&self) -> bool {
        self.is_closing
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn is_animating(&self) -> bool {
        self.extent_animator.is_animating() || self.scroll_animator.is_animating()
    }

    pub fn is_keyboard_open(&self) -> bool {
        self.keyboard.is_open()
    }

    pub fn layout_frame(&self) -> &LayoutFrame {
        &self.frame
    }

    /// Bottom padding the host should apply to keep content above the keyboard.
    pub fn bottom_inset(&self) -> f32 {
        self.frame.keyboard_inset
    }

    /// Updates the height used to convert pixel drags into extent changes.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.frame.viewport_height = viewport_height;
    }

    /// Resolves the anchor to settle at from the current extent and the last settled anchor.
    pub fn resolve_next_anchor(&self) -> f32 {
        self.anchors.resolve(self.extent(), self.current_anchor)
    }

    /// Animates the extent toward `target`.
    ///
    /// If the sheet is already at `target` it settles immediately. A call made while another
    /// animation is running replaces it.
    pub fn animate_to_anchor(&mut self, target: f32, now_ms: u64) {
        if self.torn_down {
            return;
        }
        let current = self.extent();
        if self.extent_animator.animate_to(current, target, now_ms) {
            strace!(from = current, to = target, "animate_to_anchor");
        } else {
            self.settle(target);
        }
    }

    /// Advances animations and deferred actions to `now_ms`.
    ///
    /// Returns `true` while an animation or deferred action is still pending.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.torn_down {
            return false;
        }
        match self.extent_animator.advance(now_ms) {
            AnimationStep::Tick(value) => self.write_extent(value),
            AnimationStep::Settled(target) => self.settle(target),
            AnimationStep::Idle => {}
        }
        match self.scroll_animator.advance(now_ms) {
            AnimationStep::Tick(offset) | AnimationStep::Settled(offset) => {
                self.scroll.set_offset(offset);
            }
            AnimationStep::Idle => {}
        }
        self.run_pending_scroll(now_ms);
        self.is_animating() || self.pending_scroll_at.is_some()
    }

    /// Captures the session state.
    pub fn state(&self) -> SheetState {
        SheetState {
            extent: self.extent(),
            scroll_offset: self.scroll.offset(),
            current_anchor: self.current_anchor,
            is_closing: self.is_closing,
        }
    }

    /// Restores a previously captured session state. Running animations are stopped.
    pub fn restore_state(&mut self, state: SheetState) {
        if self.torn_down {
            return;
        }
        self.extent_animator.stop();
        self.scroll_animator.stop();
        self.scroll.set_offset(state.scroll_offset);
        self.current_anchor = state.current_anchor;
        self.is_closing = state.is_closing;
        self.write_extent(state.extent);
    }

    /// Ends the session: stops both interpolations and drops deferred actions.
    ///
    /// Every handler is a no-op afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.extent_animator.stop();
        self.scroll_animator.stop();
        self.pending_scroll_at = None;
        self.gesture.set_mode(None);
        self.torn_down = true;
        sdebug!(extent = self.extent(), "Sheet::teardown");
    }

    fn settle(&mut self, target: f32) {
        self.write_extent(target);
        self.current_anchor = target;
        strace!(anchor = target, "settled");
        if target <= self.options.min_extent && !self.is_closing {
            self.begin_closing();
        }
    }

    pub(crate) fn write_extent(&mut self, extent: f32) {
        if self.scroll.extent() == extent {
            return;
        }
        self.scroll.set_extent(extent);
        if let Some(on_extent_change) = &self.options.on_extent_change {
            on_extent_change(extent);
        }
    }
}
