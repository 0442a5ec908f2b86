// Example: driving the tracker with a simulated scroll container.
use windowlist::{ListOptions, ScrollAxis};
use windowlist_tracker::{ContainerId, GeometryProvider, ScrollEvent, ViewportTracker};

struct SimContainer {
    extent: f64,
    offset: f64,
}

impl GeometryProvider for SimContainer {
    fn container_id(&self) -> ContainerId {
        ContainerId(1)
    }

    fn is_attached(&self) -> bool {
        true
    }

    fn viewport_extent(&self, _axis: ScrollAxis) -> f64 {
        self.extent
    }

    fn scroll_offset(&self, _axis: ScrollAxis) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, _axis: ScrollAxis, offset: f64) {
        self.offset = offset;
    }

    fn attach_listeners(&mut self) {
        println!("listeners attached");
    }

    fn detach_listeners(&mut self) {
        println!("listeners detached");
    }
}

fn main() {
    let host = SimContainer {
        extent: 400.0,
        offset: 0.0,
    };
    let opts = ListOptions::new(1000, 50.0).with_on_scroll(Some(|offset: f64| {
        println!("on_scroll: {offset}");
    }));
    let mut tracker = ViewportTracker::mount(opts, host).expect("valid options");

    let applied = tracker.scroll_to(500.0);
    println!("scrolled to {applied}, range={:?}", tracker.visible_range());

    // A bubbled event from a nested scroller is ignored.
    let outcome = tracker.handle_scroll(&ScrollEvent {
        source: ContainerId(42),
    });
    println!("foreign event: {outcome:?}");

    tracker.for_each_item(|it| {
        if it.index % 5 == 0 {
            println!("item {} at top={}", it.index, it.style.top());
        }
    });

    tracker.unmount();
}
