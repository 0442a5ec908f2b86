use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use windowlist::{ListOptions, ScrollAxis};

/// A scripted scroll container standing in for a real host environment.
#[derive(Clone)]
struct FakeContainer {
    id: ContainerId,
    inner: Arc<Mutex<FakeInner>>,
}

#[derive(Debug, Default)]
struct FakeInner {
    attached: bool,
    extent: f64,
    offset: f64,
    attach_count: usize,
    detach_count: usize,
    scroll_to_calls: Vec<f64>,
}

impl FakeContainer {
    fn new(id: u64, extent: f64) -> Self {
        Self {
            id: ContainerId(id),
            inner: Arc::new(Mutex::new(FakeInner {
                attached: true,
                extent,
                ..FakeInner::default()
            })),
        }
    }

    fn detached(id: u64) -> Self {
        let c = Self::new(id, 0.0);
        c.inner.lock().unwrap().attached = false;
        c
    }

    fn set_offset(&self, offset: f64) {
        self.inner.lock().unwrap().offset = offset;
    }

    fn set_extent(&self, extent: f64) {
        self.inner.lock().unwrap().extent = extent;
    }

    fn scroll_event(&self) -> ScrollEvent {
        ScrollEvent { source: self.id }
    }
}

impl GeometryProvider for FakeContainer {
    fn container_id(&self) -> ContainerId {
        self.id
    }

    fn is_attached(&self) -> bool {
        self.inner.lock().unwrap().attached
    }

    fn viewport_extent(&self, _axis: ScrollAxis) -> f64 {
        self.inner.lock().unwrap().extent
    }

    fn scroll_offset(&self, _axis: ScrollAxis) -> f64 {
        self.inner.lock().unwrap().offset
    }

    fn scroll_to(&mut self, _axis: ScrollAxis, offset: f64) {
        let mut inner = self.inner.lock().unwrap();
        inner.offset = offset;
        inner.scroll_to_calls.push(offset);
    }

    fn attach_listeners(&mut self) {
        self.inner.lock().unwrap().attach_count += 1;
    }

    fn detach_listeners(&mut self) {
        self.inner.lock().unwrap().detach_count += 1;
    }
}

fn counting_on_scroll(calls: &Arc<AtomicUsize>) -> impl Fn(f64) + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn mount_attaches_applies_initial_offset_and_reads_geometry() {
    let host = FakeContainer::new(1, 400.0);
    let opts = ListOptions::new(1000, 50.0).with_initial_offset_value(500.0);
    let t = ViewportTracker::mount(opts, host.clone()).unwrap();

    let inner = host.inner.lock().unwrap();
    assert_eq!(inner.attach_count, 1);
    assert_eq!(inner.scroll_to_calls, vec![500.0]);
    drop(inner);

    assert_eq!(t.list().viewport_extent(), 400.0);
    assert_eq!(t.list().scroll_offset(), 500.0);
    let r = t.visible_range();
    assert_eq!((r.start, r.last()), (6, Some(20)));
}

#[test]
fn mount_rejects_invalid_options_without_attaching() {
    let host = FakeContainer::new(1, 400.0);
    let err = ViewportTracker::mount(ListOptions::new(10, 0.0), host.clone());
    assert!(err.is_err());
    assert_eq!(host.inner.lock().unwrap().attach_count, 0);
}

// E2E scenario D: an event from a nested scroller changes nothing.
#[test]
fn foreign_scroll_event_is_dropped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = FakeContainer::new(1, 400.0);
    let opts = ListOptions::new(1000, 50.0).with_on_scroll(Some(counting_on_scroll(&calls)));
    let mut t = ViewportTracker::mount(opts, host.clone()).unwrap();

    host.set_offset(500.0);
    let outcome = t.handle_scroll(&ScrollEvent {
        source: ContainerId(99),
    });

    assert_eq!(outcome, ScrollOutcome::ForeignTarget);
    assert_eq!(t.list().scroll_offset(), 0.0);
    assert_eq!(t.visible_range().start, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn stale_and_invalid_offsets_are_dropped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = FakeContainer::new(1, 400.0);
    let opts = ListOptions::new(1000, 50.0).with_on_scroll(Some(counting_on_scroll(&calls)));
    let mut t = ViewportTracker::mount(opts, host.clone()).unwrap();

    // Offset unchanged since mount: no-op fast path.
    assert_eq!(t.handle_scroll(&host.scroll_event()), ScrollOutcome::StaleOffset);

    host.set_offset(-3.0);
    assert_eq!(
        t.handle_scroll(&host.scroll_event()),
        ScrollOutcome::InvalidOffset
    );
    host.set_offset(f64::NAN);
    assert_eq!(
        t.handle_scroll(&host.scroll_event()),
        ScrollOutcome::InvalidOffset
    );

    assert_eq!(t.list().scroll_offset(), 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn accepted_scroll_updates_window_and_notifies() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = FakeContainer::new(1, 400.0);
    let opts = ListOptions::new(1000, 50.0).with_on_scroll(Some(counting_on_scroll(&calls)));
    let mut t = ViewportTracker::mount(opts, host.clone()).unwrap();

    host.set_offset(500.0);
    assert_eq!(
        t.handle_scroll(&host.scroll_event()),
        ScrollOutcome::Accepted(500.0)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let r = t.visible_range();
    assert_eq!((r.start, r.last()), (6, Some(20)));

    // Event handlers read the current position, so intermediate positions
    // coalesce: a burst of events at one final offset commits once.
    host.set_offset(800.0);
    assert!(t.handle_scroll(&host.scroll_event()).is_accepted());
    assert_eq!(t.handle_scroll(&host.scroll_event()), ScrollOutcome::StaleOffset);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn resize_rereads_live_extent() {
    let host = FakeContainer::new(1, 400.0);
    let mut t = ViewportTracker::mount(ListOptions::new(1000, 50.0), host.clone()).unwrap();
    assert_eq!(t.visible_range().last(), Some(10));

    host.set_extent(800.0);
    t.handle_resize();
    assert_eq!(t.list().viewport_extent(), 800.0);
    assert_eq!(t.visible_range().last(), Some(18));
}

#[test]
fn detached_container_reads_as_zero_extent() {
    let host = FakeContainer::detached(1);
    let t = ViewportTracker::mount(ListOptions::new(1000, 50.0), host.clone()).unwrap();
    assert_eq!(t.list().viewport_extent(), 0.0);
    // Degrades to a minimal window, not a failure.
    assert!(t.visible_range().len() <= 4);
}

#[test]
fn teardown_always_detaches_listeners() {
    let host = FakeContainer::new(1, 400.0);
    let t = ViewportTracker::mount(ListOptions::new(100, 10.0), host.clone()).unwrap();
    assert_eq!(host.inner.lock().unwrap().detach_count, 0);
    t.unmount();
    assert_eq!(host.inner.lock().unwrap().detach_count, 1);

    let host2 = FakeContainer::new(2, 400.0);
    {
        let _t = ViewportTracker::mount(ListOptions::new(100, 10.0), host2.clone()).unwrap();
    }
    let inner = host2.inner.lock().unwrap();
    assert_eq!(inner.attach_count, 1);
    assert_eq!(inner.detach_count, 1);
}

#[test]
fn programmatic_scroll_clamps_and_suppresses_echo() {
    let calls = Arc::new(AtomicUsize::new(0));
    let host = FakeContainer::new(1, 400.0);
    let opts = ListOptions::new(1000, 50.0).with_on_scroll(Some(counting_on_scroll(&calls)));
    let mut t = ViewportTracker::mount(opts, host.clone()).unwrap();

    let applied = t.scroll_to(1_000_000.0);
    assert_eq!(applied, 49_600.0);
    assert_eq!(t.list().scroll_offset(), 49_600.0);
    assert_eq!(host.inner.lock().unwrap().scroll_to_calls, vec![49_600.0]);

    // The host echoes the programmatic scroll back as an event; the
    // unchanged fast path drops it, so no feedback loop and no on_scroll.
    assert_eq!(t.handle_scroll(&host.scroll_event()), ScrollOutcome::StaleOffset);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn debounced_resize_coalesces_a_gesture() {
    let host = FakeContainer::new(1, 400.0);
    let mut t = ViewportTracker::mount(ListOptions::new(1000, 50.0), host.clone()).unwrap();
    t.set_resize_debounce(Some(100));

    host.set_extent(500.0);
    t.handle_resize_signal(0);
    host.set_extent(600.0);
    t.handle_resize_signal(40);

    // Before the (pushed-out) deadline nothing is applied.
    assert!(!t.tick(100));
    assert_eq!(t.list().viewport_extent(), 400.0);

    // One refresh at the deadline sees only the final extent.
    assert!(t.tick(140));
    assert_eq!(t.list().viewport_extent(), 600.0);
    assert!(!t.tick(200));
}

#[test]
fn undebounced_resize_signal_applies_immediately() {
    let host = FakeContainer::new(1, 400.0);
    let mut t = ViewportTracker::mount(ListOptions::new(1000, 50.0), host.clone()).unwrap();
    host.set_extent(640.0);
    t.handle_resize_signal(0);
    assert_eq!(t.list().viewport_extent(), 640.0);
}

#[test]
fn debouncer_deadline_semantics() {
    let mut d = Debouncer::new(150);
    assert!(!d.is_pending());
    assert!(!d.fire(0));

    d.trigger(10);
    assert!(d.is_pending());
    assert!(!d.fire(159));
    assert!(d.fire(160));
    assert!(!d.is_pending());
    assert!(!d.fire(500));

    d.trigger(0);
    d.cancel();
    assert!(!d.fire(1000));
}
