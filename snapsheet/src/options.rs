use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::SheetOptionsError;

/// Invoked once per dismissal, before the sheet asks its host to remove it from view.
pub type OnDismissCallback = Arc<dyn Fn() + Send + Sync>;

/// Invoked whenever the sheet's extent changes (drag, animation tick, restore).
pub type OnExtentChangeCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Height bounds of a pinned header, in pixels.
///
/// The header shrinks from `max` toward `min` as the content scrolls underneath it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderExtent {
    pub min: f32,
    pub max: f32,
}

impl HeaderExtent {
    /// Header height after the content has scrolled by `scroll_offset` pixels.
    pub fn at_offset(&self, scroll_offset: f32) -> f32 {
        (self.max - scroll_offset.max(0.0)).clamp(self.min, self.max)
    }
}

/// Configuration for [`crate::Sheet`].
///
/// Extents are fractions of the available height. This type is cheap to clone: callbacks are
/// stored in `Arc`s.
#[derive(Clone)]
pub struct SheetOptions {
    pub min_extent: f32,
    pub init_extent: f32,
    pub max_extent: f32,

    /// Collapsible sheets can shrink to zero and are dismissed when they get there. Requires
    /// `min_extent == 0`.
    pub collapsible: bool,

    /// Whether the host should let the sheet fill all available space. Layout-only; the state
    /// machine does not read it.
    pub expand: bool,

    /// Extra snap points on top of `min_extent`, `init_extent` and `max_extent`.
    ///
    /// Snapping after a drag only happens when at least one extra anchor is configured.
    pub anchors: Vec<f32>,

    pub header_extent: Option<HeaderExtent>,

    pub on_dismiss: Option<OnDismissCallback>,

    pub on_extent_change: Option<OnExtentChangeCallback>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetOptions {
    pub fn new() -> Self {
        Self {
            min_extent: 0.0,
            init_extent: 0.5,
            max_extent: 1.0,
            collapsible: false,
            expand: true,
            anchors: Vec::new(),
            header_extent: None,
            on_dismiss: None,
            on_extent_change: None,
        }
    }

    /// Preset for a sheet that can be dragged closed: `min_extent = 0`, `collapsible = true`.
    pub fn collapsible() -> Self {
        Self {
            min_extent: 0.0,
            collapsible: true,
            ..Self::new()
        }
    }

    pub fn with_extents(mut self, min_extent: f32, init_extent: f32, max_extent: f32) -> Self {
        self.min_extent = min_extent;
        self.init_extent = init_extent;
        self.max_extent = max_extent;
        self
    }

    pub fn with_min_extent(mut self, min_extent: f32) -> Self {
        self.min_extent = min_extent;
        self
    }

    pub fn with_init_extent(mut self, init_extent: f32) -> Self {
        self.init_extent = init_extent;
        self
    }

    pub fn with_max_extent(mut self, max_extent: f32) -> Self {
        self.max_extent = max_extent;
        self
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn with_anchors(mut self, anchors: impl IntoIterator<Item = f32>) -> Self {
        self.anchors = anchors.into_iter().collect();
        self
    }

    pub fn with_header_extent(mut self, min: f32, max: f32) -> Self {
        self.header_extent = Some(HeaderExtent { min, max });
        self
    }

    pub fn with_on_dismiss(mut self, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(on_dismiss));
        self
    }

    pub fn with_on_extent_change(
        mut self,
        on_extent_change: impl Fn(f32) + Send + Sync + 'static,
    ) -> Self {
        self.on_extent_change = Some(Arc::new(on_extent_change));
        self
    }

    /// Checks the construction invariants.
    ///
    /// [`crate::Sheet::new`] calls this; hosts can call it earlier to surface configuration
    /// mistakes without mounting a sheet.
    pub fn validate(&self) -> Result<(), SheetOptionsError> {
        let min = self.min_extent;
        let init = self.init_extent;
        let max = self.max_extent;

        for (name, value) in [
            ("min_extent", min),
            ("init_extent", init),
            ("max_extent", max),
        ] {
            if !value.is_finite() {
                return Err(SheetOptionsError::NonFinite { name, value });
            }
        }

        if !(0.0..=1.0).contains(&min) {
            return Err(SheetOptionsError::MinExtentOutOfRange(min));
        }
        if !(max > 0.0 && max <= 1.0) {
            return Err(SheetOptionsError::MaxExtentOutOfRange(max));
        }
        if max <= min {
            return Err(SheetOptionsError::EmptyRange { min, max });
        }
        if self.collapsible && min != 0.0 {
            return Err(SheetOptionsError::CollapsibleMinExtent(min));
        }
        if !(min..=max).contains(&init) {
            return Err(SheetOptionsError::InitExtentOutOfRange { init, min, max });
        }

        for &anchor in &self.anchors {
            if !anchor.is_finite() {
                return Err(SheetOptionsError::NonFinite {
                    name: "anchor",
                    value: anchor,
                });
            }
            if !(min..=max).contains(&anchor) {
                return Err(SheetOptionsError::AnchorOutOfRange { anchor, min, max });
            }
        }

        if let Some(header) = self.header_extent {
            let valid = header.min.is_finite()
                && header.max.is_finite()
                && header.min >= 0.0
                && header.min <= header.max;
            if !valid {
                return Err(SheetOptionsError::InvalidHeaderExtent {
                    min: header.min,
                    max: header.max,
                });
            }
        }

        Ok(())
    }
}

impl core::fmt::Debug for SheetOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SheetOptions")
            .field("min_extent", &self.min_extent)
            .field("init_extent", &self.init_extent)
            .field("max_extent", &self.max_extent)
            .field("collapsible", &self.collapsible)
            .field("expand", &self.expand)
            .field("anchors", &self.anchors)
            .field("header_extent", &self.header_extent)
            .finish_non_exhaustive()
    }
}
