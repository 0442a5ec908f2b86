use std::sync::Arc;

use crate::ScrollAxis;

/// A callback fired after each accepted scroll offset update.
///
/// The argument is the new offset along the scroll axis. This is
/// fire-and-forget (analytics/sync hooks): it runs after the engine's state
/// is fully committed, so a panicking callback cannot leave the engine
/// inconsistent.
pub type OnScrollCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(f64),
    /// A lazily evaluated initial offset provider (called at construction).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: the callback is stored in an `Arc` so adapters can tweak a
/// few fields and call `ListWindow::set_options` without reallocating
/// closures. Validation happens in `ListWindow`, not here.
pub struct ListOptions {
    /// Logical number of rows/columns.
    pub count: usize,
    /// Fixed size of each item along the scroll axis. Must be positive and
    /// finite; rejected by `ListWindow::new` otherwise.
    pub item_extent: f64,
    pub axis: ScrollAxis,
    /// Extra items rendered beyond each visible edge to mask scroll-induced
    /// pop-in.
    pub overscan: usize,
    /// The viewport extent to assume before the container is attached.
    ///
    /// Geometry is unreliable before attachment; `None` means 0, which yields
    /// a minimal range until the tracker reads the live extent.
    pub initial_viewport_extent: Option<f64>,
    pub initial_offset: InitialOffset,
    /// Optional callback fired after each accepted scroll update.
    pub on_scroll: Option<OnScrollCallback>,
}

pub(crate) const DEFAULT_OVERSCAN: usize = 3;

impl ListOptions {
    pub fn new(count: usize, item_extent: f64) -> Self {
        Self {
            count,
            item_extent,
            axis: ScrollAxis::Vertical,
            overscan: DEFAULT_OVERSCAN,
            initial_viewport_extent: None,
            initial_offset: InitialOffset::default(),
            on_scroll: None,
        }
    }

    pub fn with_axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_viewport_extent(mut self, extent: Option<f64>) -> Self {
        self.initial_viewport_extent = extent;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: f64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_extent: self.item_extent,
            axis: self.axis,
            overscan: self.overscan,
            initial_viewport_extent: self.initial_viewport_extent,
            initial_offset: self.initial_offset.clone(),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("count", &self.count)
            .field("item_extent", &self.item_extent)
            .field("axis", &self.axis)
            .field("overscan", &self.overscan)
            .field("initial_viewport_extent", &self.initial_viewport_extent)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
