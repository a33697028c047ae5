use alloc::sync::Arc;

use snapsheet::{Interpolation, Sheet, SheetScroll};

/// Builds the whole sheet body from the scroll controller and the current extent.
pub type FullBuilder<C, O> = Arc<dyn Fn(&mut C, &SheetScroll, f32) -> O + Send + Sync>;

/// Builds a header or body section from the current extent.
pub type SectionBuilder<C, O> = Arc<dyn Fn(&mut C, f32) -> O + Send + Sync>;

/// How a host supplies the sheet's content.
///
/// `C` is the host's build context and `O` whatever its builders produce (a widget, a node
/// handle, a draw list...). The sheet never inspects either.
pub enum SheetContent<C, O> {
    /// One builder that replaces the default layout entirely.
    Full(FullBuilder<C, O>),
    /// A header pinned above a scrollable body.
    Sections {
        header: SectionBuilder<C, O>,
        body: SectionBuilder<C, O>,
    },
}

/// Output of [`SheetContent::build`].
#[derive(Clone, Debug, PartialEq)]
pub enum SheetLayout<O> {
    Full(O),
    Sections {
        header: O,
        /// Pinned header height in pixels, clipped between the configured header bounds as the
        /// body scrolls. `None` when the sheet has no header bounds.
        header_height: Option<f32>,
        body: O,
    },
}

impl<C, O> SheetContent<C, O> {
    pub fn full(builder: impl Fn(&mut C, &SheetScroll, f32) -> O + Send + Sync + 'static) -> Self {
        Self::Full(Arc::new(builder))
    }

    pub fn sections(
        header: impl Fn(&mut C, f32) -> O + Send + Sync + 'static,
        body: impl Fn(&mut C, f32) -> O + Send + Sync + 'static,
    ) -> Self {
        Self::Sections {
            header: Arc::new(header),
            body: Arc::new(body),
        }
    }

    /// Runs the builders against the sheet's current state.
    pub fn build<I: Interpolation>(&self, ctx: &mut C, sheet: &Sheet<I>) -> SheetLayout<O> {
        let extent = sheet.extent();
        match self {
            Self::Full(builder) => SheetLayout::Full(builder(ctx, sheet.scroll(), extent)),
            Self::Sections { header, body } => {
                let header_height = sheet
                    .options()
                    .header_extent
                    .map(|bounds| bounds.at_offset(sheet.scroll_offset()));
                SheetLayout::Sections {
                    header: header(ctx, extent),
                    header_height,
                    body: body(ctx, extent),
                }
            }
        }
    }
}

impl<C, O> Clone for SheetContent<C, O> {
    fn clone(&self) -> Self {
        match self {
            Self::Full(builder) => Self::Full(Arc::clone(builder)),
            Self::Sections { header, body } => Self::Sections {
                header: Arc::clone(header),
                body: Arc::clone(body),
            },
        }
    }
}

impl<C, O> core::fmt::Debug for SheetContent<C, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full(_) => f.write_str("Full(..)"),
            Self::Sections { .. } => f.write_str("Sections(..)"),
        }
    }
}
