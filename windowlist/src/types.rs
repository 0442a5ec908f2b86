/// Which axis the list scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// The window of indices to materialize, as a half-open index range.
///
/// `start..end` includes overscan and is already clamped to the item count.
/// The inclusive form used in windowing literature is `[start, last()]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// The last included index, or `None` for an empty range.
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// Computed absolute position and size for one item, independent of any
/// rendering technology.
///
/// `offset` and `extent` are along the scroll axis; the cross axis is
/// expected to fill the container. `top`/`left`/`width`/`height` resolve the
/// descriptor into absolute-positioning coordinates (`None` extent = fill).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutDescriptor {
    pub axis: ScrollAxis,
    pub offset: f64,
    pub extent: f64,
}

impl LayoutDescriptor {
    pub fn end(&self) -> f64 {
        self.offset + self.extent
    }

    pub fn top(&self) -> f64 {
        match self.axis {
            ScrollAxis::Vertical => self.offset,
            ScrollAxis::Horizontal => 0.0,
        }
    }

    pub fn left(&self) -> f64 {
        match self.axis {
            ScrollAxis::Vertical => 0.0,
            ScrollAxis::Horizontal => self.offset,
        }
    }

    pub fn height(&self) -> Option<f64> {
        match self.axis {
            ScrollAxis::Vertical => Some(self.extent),
            ScrollAxis::Horizontal => None,
        }
    }

    pub fn width(&self) -> Option<f64> {
        match self.axis {
            ScrollAxis::Vertical => None,
            ScrollAxis::Horizontal => Some(self.extent),
        }
    }
}

/// One materialized item: the logical index plus its layout.
///
/// This is what the per-item render callback receives.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    pub style: LayoutDescriptor,
}
