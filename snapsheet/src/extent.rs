/// Holds the sheet's current normalized extent.
///
/// Values are stored as given: callers that intentionally move outside `[min, max]` (e.g. while
/// a dismiss sequence runs) are responsible for doing so.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtentTracker {
    value: f32,
}

impl ExtentTracker {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value;
    }
}

/// The scroll controller handed to content builders.
///
/// One concrete type exposes both the content scroll offset (pixels) and the sheet extent, so
/// hosts never need to downcast a generic controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SheetScroll {
    offset: f32,
    extent: ExtentTracker,
}

impl SheetScroll {
    pub fn new(extent: f32) -> Self {
        Self {
            offset: 0.0,
            extent: ExtentTracker::new(extent),
        }
    }

    /// Content scroll offset in pixels. Never negative.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    pub fn extent(&self) -> f32 {
        self.extent.get()
    }

    pub fn set_extent(&mut self, extent: f32) {
        self.extent.set(extent);
    }

    pub fn extent_tracker(&self) -> &ExtentTracker {
        &self.extent
    }
}
