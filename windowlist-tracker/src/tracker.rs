use windowlist::{ConfigError, ListOptions, ListWindow, VisibleRange, WindowItem};

use crate::{Debouncer, GeometryProvider, ScrollEvent};

/// How a raw scroll signal was handled.
///
/// Rejections are not failures: foreign targets and non-advancing offsets
/// are dropped silently (debug-logged only) to avoid feedback loops from
/// programmatic scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// The offset was committed and `on_scroll` has fired.
    Accepted(f64),
    /// The event did not originate from the tracked container.
    ForeignTarget,
    /// The container's offset is unchanged (no-op fast path).
    StaleOffset,
    /// The container reported a negative or non-finite offset.
    InvalidOffset,
}

impl ScrollOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Bridges host scroll/resize signals into a [`ListWindow`].
///
/// The tracker is the only component that touches live environment state; it
/// reads geometry exclusively through the injected [`GeometryProvider`].
/// `mount` subscribes the provider's listeners and `Drop` unsubscribes them,
/// so no teardown path can leak a subscription.
#[derive(Debug)]
pub struct ViewportTracker<G: GeometryProvider> {
    list: ListWindow,
    host: G,
    resize_debounce: Option<Debouncer>,
}

impl<G: GeometryProvider> ViewportTracker<G> {
    /// Validates `options`, attaches listeners, applies the initial scroll
    /// offset through the host, and performs one forced geometry refresh.
    ///
    /// The refresh happens after attachment because geometry read from a
    /// detached container is unreliable.
    pub fn mount(options: ListOptions, mut host: G) -> Result<Self, ConfigError> {
        let list = ListWindow::new(options)?;
        host.attach_listeners();

        let mut tracker = Self {
            list,
            host,
            resize_debounce: None,
        };

        let initial = tracker.list.scroll_offset();
        if initial > 0.0 {
            let axis = tracker.list.axis();
            tracker.host.scroll_to(axis, initial);
        }
        tracker.refresh();
        Ok(tracker)
    }

    pub fn list(&self) -> &ListWindow {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListWindow {
        &mut self.list
    }

    pub fn host(&self) -> &G {
        &self.host
    }

    /// Enables debounced resize handling with the given delay; `None` goes
    /// back to immediate handling. See [`Self::handle_resize_signal`].
    pub fn set_resize_debounce(&mut self, delay_ms: Option<u64>) {
        self.resize_debounce = delay_ms.map(Debouncer::new);
    }

    /// Re-reads live geometry from the host and updates the engine.
    ///
    /// A detached container degrades to viewport extent 0 (an empty or
    /// minimal window) rather than an error.
    pub fn refresh(&mut self) {
        let axis = self.list.axis();
        if !self.host.is_attached() {
            self.list.set_viewport_extent(0.0);
            return;
        }
        self.list.set_viewport_extent(self.host.viewport_extent(axis));
        self.list.apply_scroll_offset(self.host.scroll_offset(axis));
    }

    /// Handles one raw scroll signal.
    ///
    /// Reads the container's *current* offset rather than anything carried by
    /// the event, and drops the update when the event bubbled from a nested
    /// scroller, the offset is negative/non-finite, or the offset is
    /// unchanged. On acceptance the engine commits the offset and fires
    /// `on_scroll`.
    pub fn handle_scroll(&mut self, event: &ScrollEvent) -> ScrollOutcome {
        if event.source != self.host.container_id() {
            tdebug!(
                source = event.source.0,
                tracked = self.host.container_id().0,
                "scroll event from foreign target dropped"
            );
            return ScrollOutcome::ForeignTarget;
        }

        let offset = self.host.scroll_offset(self.list.axis());
        if !offset.is_finite() || offset < 0.0 {
            tdebug!(offset, "scroll event with invalid offset dropped");
            return ScrollOutcome::InvalidOffset;
        }
        if offset == self.list.scroll_offset() {
            tdebug!(offset, "scroll event with unchanged offset dropped");
            return ScrollOutcome::StaleOffset;
        }

        self.list.apply_scroll_offset(offset);
        ScrollOutcome::Accepted(offset)
    }

    /// Handles a resize immediately: re-reads the live viewport extent. No
    /// other state changes; the next window computation sees the new extent.
    pub fn handle_resize(&mut self) {
        let axis = self.list.axis();
        let extent = if self.host.is_attached() {
            self.host.viewport_extent(axis)
        } else {
            0.0
        };
        self.list.set_viewport_extent(extent);
    }

    /// Records a resize signal for debounced handling.
    ///
    /// With no debouncer configured this handles the resize immediately.
    /// Otherwise the extent is re-read when [`Self::tick`] observes the
    /// deadline, so continuous resize gestures coalesce into one refresh.
    pub fn handle_resize_signal(&mut self, now_ms: u64) {
        match &mut self.resize_debounce {
            Some(d) => d.trigger(now_ms),
            None => self.handle_resize(),
        }
    }

    /// Advances tracker time; applies a pending debounced resize once its
    /// deadline passes. Returns `true` when a resize was applied.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let fired = match &mut self.resize_debounce {
            Some(d) => d.fire(now_ms),
            None => false,
        };
        if fired {
            self.handle_resize();
        }
        fired
    }

    /// Programmatically scrolls the container.
    ///
    /// The engine's offset is committed first (without firing `on_scroll`),
    /// so the scroll event the host echoes back is dropped by the unchanged
    /// fast path instead of looping.
    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        let clamped = self.list.clamp_scroll_offset(offset);
        self.list.set_scroll_offset(clamped);
        let axis = self.list.axis();
        self.host.scroll_to(axis, clamped);
        clamped
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.list.visible_range()
    }

    /// Invokes `f` once per item in the current window; see
    /// [`ListWindow::for_each_item`].
    pub fn for_each_item(&mut self, f: impl FnMut(WindowItem)) {
        self.list.for_each_item(f);
    }

    /// Explicit teardown. Equivalent to dropping the tracker: listeners are
    /// detached and any pending debounce deadline dies with it.
    pub fn unmount(self) {}
}

impl<G: GeometryProvider> Drop for ViewportTracker<G> {
    fn drop(&mut self) {
        self.host.detach_listeners();
    }
}
