use alloc::vec::Vec;

/// Fraction of the distance between two anchors a drag must cover before the sheet commits to
/// the next anchor instead of springing back.
pub const ANCHOR_THRESHOLD_RATIO: f32 = 0.2;

/// The extents a sheet can come to rest at.
///
/// Always sorted ascending, without duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorSet {
    anchors: Vec<f32>,
}

impl AnchorSet {
    /// Builds the anchor set of a sheet: `min`, `init`, `max`, plus any extra anchors.
    pub fn new(min: f32, init: f32, max: f32, extra: &[f32]) -> Self {
        Self::from_values([min, init, max].into_iter().chain(extra.iter().copied()))
    }

    pub fn from_values(values: impl IntoIterator<Item = f32>) -> Self {
        let mut anchors: Vec<f32> = values.into_iter().collect();
        anchors.sort_by(f32::total_cmp);
        anchors.dedup();
        Self { anchors }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn contains(&self, extent: f32) -> bool {
        self.anchors.iter().any(|&a| a == extent)
    }

    pub fn lowest(&self) -> Option<f32> {
        self.anchors.first().copied()
    }

    pub fn highest(&self) -> Option<f32> {
        self.anchors.last().copied()
    }

    /// Returns the largest anchor strictly below `extent` and the smallest anchor strictly above
    /// it.
    pub fn bracket(&self, extent: f32) -> (Option<f32>, Option<f32>) {
        let below = self.anchors.partition_point(|&a| a < extent);
        let above = self.anchors.partition_point(|&a| a <= extent);
        let lower = below.checked_sub(1).map(|i| self.anchors[i]);
        let upper = self.anchors.get(above).copied();
        (lower, upper)
    }

    /// See [`resolve_next_anchor`].
    pub fn resolve(&self, current: f32, previous: f32) -> f32 {
        resolve_next_anchor(self, current, previous)
    }
}

/// Picks the anchor a sheet should settle at after a drag ends.
///
/// - An extent that sits exactly on an anchor stays there.
/// - Otherwise the two anchors bracketing `current` are candidates. If `previous` is one of them,
///   the drag is treated as travelling away from it: the sheet moves on to the other bracket once
///   it has covered more than [`ANCHOR_THRESHOLD_RATIO`] of the gap, and springs back otherwise.
/// - If `previous` is neither bracket, the nearer one wins (ties go up).
/// - Extents outside the anchor hull clamp to the nearest anchor.
///
/// Resolution only looks at positions; release velocity plays no part.
pub fn resolve_next_anchor(anchors: &AnchorSet, current: f32, previous: f32) -> f32 {
    if anchors.contains(current) {
        return current;
    }

    let (lower, upper) = match anchors.bracket(current) {
        (Some(lower), Some(upper)) => (lower, upper),
        (Some(lower), None) => return lower,
        (None, Some(upper)) => return upper,
        (None, None) => return current,
    };

    let next = if previous == lower {
        next_from_previous(current, lower, upper)
    } else if previous == upper {
        next_from_previous(current, upper, lower)
    } else if upper - current <= current - lower {
        upper
    } else {
        lower
    };
    strace!(current, previous, lower, upper, next, "resolve_next_anchor");
    next
}

fn next_from_previous(current: f32, previous: f32, candidate: f32) -> f32 {
    let span = (candidate - previous).abs();
    if (current - previous).abs() > ANCHOR_THRESHOLD_RATIO * span {
        candidate
    } else {
        previous
    }
}
