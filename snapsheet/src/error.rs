use thiserror::Error;

/// Rejected sheet configuration.
///
/// Every variant corresponds to one construction invariant of [`crate::SheetOptions`]; values are
/// never coerced into range.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum SheetOptionsError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("min_extent must lie in [0, 1], got {0}")]
    MinExtentOutOfRange(f32),

    #[error("max_extent must lie in (0, 1], got {0}")]
    MaxExtentOutOfRange(f32),

    #[error("max_extent ({max}) must be greater than min_extent ({min})")]
    EmptyRange { min: f32, max: f32 },

    #[error("collapsible sheets require min_extent == 0, got {0}")]
    CollapsibleMinExtent(f32),

    #[error("init_extent {init} lies outside [{min}, {max}]")]
    InitExtentOutOfRange { init: f32, min: f32, max: f32 },

    #[error("anchor {anchor} lies outside [{min}, {max}]")]
    AnchorOutOfRange { anchor: f32, min: f32, max: f32 },

    #[error("header extent must satisfy 0 <= min ({min}) <= max ({max})")]
    InvalidHeaderExtent { min: f32, max: f32 },
}
