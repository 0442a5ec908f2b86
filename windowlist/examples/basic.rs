// Example: minimal usage of the windowing engine.
use windowlist::{ListOptions, ListWindow};

fn main() {
    let mut list = ListWindow::new(ListOptions::new(1_000_000, 50.0)).expect("valid options");
    list.set_viewport_extent(400.0);
    list.set_scroll_offset(123_450.0);

    println!("total_extent={}", list.total_extent());
    println!("visible_range={:?}", list.visible_range());

    list.for_each_item(|it| {
        println!(
            "index={} top={} height={:?}",
            it.index,
            it.style.top(),
            it.style.height()
        );
    });

    list.set_scroll_offset_clamped(f64::MAX);
    println!("clamped offset={}", list.scroll_offset());
    println!("last visible={:?}", list.visible_range().last());
}
