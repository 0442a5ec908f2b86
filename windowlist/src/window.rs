use core::cmp;

use crate::VisibleRange;

/// Computes the window of indices to materialize.
///
/// Pure and deterministic: reads nothing beyond its parameters, so it is
/// unit-testable without a rendering environment.
///
/// The raw window is `floor(offset / item_extent) - 1` through
/// `ceil((offset + viewport_extent) / item_extent) - 1`; the `-1` compensates
/// for zero-based indexing and guards rounding when `offset` lands exactly on
/// an item boundary. Both edges are then expanded by `overscan` and clamped
/// to `[0, count - 1]`.
///
/// Callers must guarantee `item_extent > 0` (enforced by
/// [`crate::ListWindow`] at configuration time). A detached container reads
/// as `viewport_extent = 0`, which yields a minimal range rather than an
/// error.
pub fn compute_visible_range(
    offset: f64,
    viewport_extent: f64,
    item_extent: f64,
    count: usize,
    overscan: usize,
) -> VisibleRange {
    if count == 0 {
        return VisibleRange::EMPTY;
    }
    debug_assert!(item_extent > 0.0, "item_extent must be positive");

    let raw_start = (offset / item_extent).floor() as i64 - 1;
    let raw_stop = ((offset + viewport_extent) / item_extent).ceil() as i64 - 1;

    let last = count - 1;
    let overscan = overscan as i64;
    let start = raw_start.saturating_sub(overscan).max(0) as usize;
    let stop = cmp::min(raw_stop.saturating_add(overscan).max(0) as usize, last);

    if stop < start {
        // The clamped window inverted (count smaller than the
        // overscan-expanded window); fall back to the whole list.
        return VisibleRange {
            start: 0,
            end: count,
        };
    }

    VisibleRange {
        start,
        end: stop + 1,
    }
}
