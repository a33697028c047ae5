//! A headless, anchor-snapping draggable sheet.
//!
//! For adapter-level utilities (tweens, pointer tracking, content composition), see the
//! `snapsheet-adapter` crate.
//!
//! A sheet resizes between a minimum and maximum extent (fractions of the available height),
//! hands drags over to its content once fully expanded, settles at the nearest anchor when a drag
//! ends, and asks to be dismissed when a collapsible sheet is dragged closed.
//!
//! It is UI-agnostic. A UI layer is expected to provide:
//! - drag steps in pixels (or its own scroll notifications)
//! - layout frames: viewport height, keyboard inset, focused field bounds
//! - a frame clock (`tick(now_ms)`) and an [`Interpolation`] implementation
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod anchors;
mod animator;
mod error;
mod extent;
mod gesture;
mod interpolation;
mod lifecycle;
mod options;
mod sheet;
mod types;


pub use anchors::{ANCHOR_THRESHOLD_RATIO, AnchorSet, resolve_next_anchor};
pub use animator::{ANCHOR_ANIMATION_MS, AnchorAnimator, AnimationStep};
pub use error::SheetOptionsError;
pub use extent::{ExtentTracker, SheetScroll};
pub use gesture::{GestureClassifier, classify};
pub use interpolation::{Interpolation, Progress};
pub use lifecycle::{
    KEYBOARD_PADDING_MS, KEYBOARD_SCROLL_DELAY_MS, KEYBOARD_SCROLL_MARGIN, KEYBOARD_SCROLL_MS,
    KeyboardWatcher, occluded_amount,
};
pub use options::{HeaderExtent, OnDismissCallback, OnExtentChangeCallback, SheetOptions};
pub use sheet::Sheet;
pub use types::{
    Easing, FieldRect, GestureMode, KeyboardTransition, LayoutFrame, ScrollEndEvent, ScrollEvent,
    SheetState,
};
