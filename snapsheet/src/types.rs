/// A scroll/drag notification describing the sheet's extent during a gesture.
///
/// All extents are fractions of the available height.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub extent: f32,
    pub min_extent: f32,
    pub max_extent: f32,
    /// The extent the sheet was mounted with. Some hosts report `0.0` when unknown.
    pub initial_extent: f32,
}

/// Sent once when a drag gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEndEvent {
    pub extent: f32,
    /// Release velocity in pixels per second (positive = downward). Accepted as a hint only.
    pub velocity: f32,
}

/// What a drag update does to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureMode {
    /// The drag changes the sheet's extent.
    Resize,
    /// The extent is pinned; the drag scrolls the sheet's content.
    Scroll,
}

/// Bounds of the focused input field, in viewport coordinates (top = 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRect {
    pub top: f32,
    pub height: f32,
}

impl FieldRect {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Geometry reported by the host on every layout/update cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutFrame {
    /// Height available to the sheet when fully expanded, in pixels.
    pub viewport_height: f32,
    /// Bottom inset occupied by the on-screen keyboard (`0.0` when hidden).
    pub keyboard_inset: f32,
    pub focused_field: Option<FieldRect>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardTransition {
    Opened,
    Closed,
}

/// Progress curve handed to an [`Interpolation`](crate::Interpolation). Sheet motion is linear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
        }
    }
}

/// A lightweight, serializable snapshot of the sheet's session state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetState {
    pub extent: f32,
    pub scroll_offset: f32,
    pub current_anchor: f32,
    pub is_closing: bool,
}
