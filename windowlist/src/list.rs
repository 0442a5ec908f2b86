use std::sync::Arc;

use crate::layout::LayoutCache;
use crate::window::compute_visible_range;
use crate::{
    ConfigError, FrameState, LayoutDescriptor, ListOptions, ScrollAxis, ScrollState,
    ViewportState, VisibleRange, WindowItem,
};

/// The windowing engine for one list instance.
///
/// Owns the scroll state and layout cache; per spec it is single-threaded and
/// fully synchronous. It holds no environment objects: an adapter (see the
/// `windowlist-tracker` crate) feeds it viewport extents and scroll offsets
/// and the engine answers with a [`VisibleRange`] plus per-item layout.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: ListOptions,
    viewport_extent: f64,
    scroll_offset: f64,
    layouts: LayoutCache,
}

impl ListWindow {
    /// Creates an engine from options.
    ///
    /// Fails eagerly on a non-positive or non-finite `item_extent` and on an
    /// invalid initial offset; a windowing miscalculation must never surface
    /// later as a nonsensical range.
    pub fn new(options: ListOptions) -> Result<Self, ConfigError> {
        validate_item_extent(options.item_extent)?;
        let scroll_offset = options.initial_offset.resolve();
        if !(scroll_offset >= 0.0 && scroll_offset.is_finite()) {
            return Err(ConfigError::InvalidInitialOffset(scroll_offset));
        }
        let viewport_extent = options.initial_viewport_extent.unwrap_or(0.0).max(0.0);
        wdebug!(
            count = options.count,
            item_extent = options.item_extent,
            overscan = options.overscan,
            "ListWindow::new"
        );
        Ok(Self {
            viewport_extent,
            scroll_offset,
            layouts: LayoutCache::new(options.item_extent, options.axis),
            options,
        })
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replaces the whole option set, validating it first.
    ///
    /// The layout cache is reset only if `item_extent` or the axis changed.
    pub fn set_options(&mut self, options: ListOptions) -> Result<(), ConfigError> {
        validate_item_extent(options.item_extent)?;
        self.options = options;
        self.layouts
            .reconfigure(self.options.item_extent, self.options.axis);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        // Positions are a pure function of index, so the cache survives.
        self.options.count = count;
    }

    pub fn item_extent(&self) -> f64 {
        self.options.item_extent
    }

    pub fn set_item_extent(&mut self, item_extent: f64) -> Result<(), ConfigError> {
        validate_item_extent(item_extent)?;
        self.options.item_extent = item_extent;
        self.layouts.reconfigure(item_extent, self.options.axis);
        Ok(())
    }

    pub fn axis(&self) -> ScrollAxis {
        self.options.axis
    }

    pub fn set_axis(&mut self, axis: ScrollAxis) {
        self.options.axis = axis;
        self.layouts.reconfigure(self.options.item_extent, axis);
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(f64) + Send + Sync + 'static>) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Applies a live viewport extent read from the container.
    ///
    /// A detached container reads as extent 0 (expected during initial
    /// mount); negative or non-finite reads are treated the same way.
    pub fn set_viewport_extent(&mut self, extent: f64) {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        self.viewport_extent = extent;
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Sets the scroll offset programmatically (no `on_scroll` notification).
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: f64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset observed from a qualifying scroll event.
    ///
    /// Returns `false` (and changes nothing) when the offset is negative,
    /// non-finite, or equal to the current one — the no-op fast path that
    /// avoids redundant recomputation and feedback loops from programmatic
    /// scrolling. On acceptance the `on_scroll` callback fires after the
    /// state is committed.
    pub fn apply_scroll_offset(&mut self, offset: f64) -> bool {
        if !offset.is_finite() || offset < 0.0 || offset == self.scroll_offset {
            wtrace!(offset, current = self.scroll_offset, "scroll offset ignored");
            return false;
        }
        wtrace!(offset, "apply_scroll_offset");
        self.scroll_offset = offset;
        if let Some(cb) = &self.options.on_scroll {
            cb(offset);
        }
        true
    }

    /// Total logical extent of the list content along the scroll axis.
    ///
    /// Hosts use this to size the inner spacer that makes the container
    /// scrollable.
    pub fn total_extent(&self) -> f64 {
        self.options.count as f64 * self.options.item_extent
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_extent() - self.viewport_extent).max(0.0)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// The current window of indices to materialize.
    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.scroll_offset, self.viewport_extent)
    }

    /// The window for an explicit offset/viewport pair, without touching
    /// state.
    pub fn visible_range_for(&self, scroll_offset: f64, viewport_extent: f64) -> VisibleRange {
        compute_visible_range(
            scroll_offset,
            viewport_extent,
            self.options.item_extent,
            self.options.count,
            self.options.overscan,
        )
    }

    /// Returns the layout for `index`, memoized in the layout cache.
    pub fn layout(&mut self, index: usize) -> LayoutDescriptor {
        self.layouts.layout(index)
    }

    /// Number of memoized layout entries (diagnostics).
    pub fn cached_layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Invokes `f` once per index in the current visible range, in ascending
    /// order, with that item's computed layout.
    pub fn for_each_item(&mut self, mut f: impl FnMut(WindowItem)) {
        let range = self.visible_range();
        for index in range.iter() {
            let style = self.layouts.layout(index);
            f(WindowItem { index, style });
        }
    }

    /// Collects the current window into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_item`]; adapters that care
    /// about allocations should reuse a scratch buffer.
    pub fn collect_items(&mut self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_item(|it| out.push(it));
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            extent: self.viewport_extent,
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport + scroll state from a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.set_viewport_extent(frame.viewport.extent);
        self.set_scroll_offset_clamped(frame.scroll.offset);
    }
}

fn validate_item_extent(item_extent: f64) -> Result<(), ConfigError> {
    if item_extent > 0.0 && item_extent.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidItemExtent(item_extent))
    }
}
