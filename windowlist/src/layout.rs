use std::collections::HashMap;

use crate::{LayoutDescriptor, ScrollAxis};

/// Memoized per-index layout descriptors.
///
/// Item size is uniform and position is a pure function of index, so an entry
/// never goes stale on its own; the whole map is dropped when `item_extent`
/// or the axis changes. There is no other eviction: growth up to `count`
/// lightweight descriptors is the intended memory/compute tradeoff.
#[derive(Clone, Debug)]
pub struct LayoutCache {
    item_extent: f64,
    axis: ScrollAxis,
    entries: HashMap<usize, LayoutDescriptor>,
}

impl LayoutCache {
    pub fn new(item_extent: f64, axis: ScrollAxis) -> Self {
        Self {
            item_extent,
            axis,
            entries: HashMap::new(),
        }
    }

    pub fn item_extent(&self) -> f64 {
        self.item_extent
    }

    pub fn axis(&self) -> ScrollAxis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the layout for `index`, computing and caching it on first use.
    pub fn layout(&mut self, index: usize) -> LayoutDescriptor {
        let item_extent = self.item_extent;
        let axis = self.axis;
        *self.entries.entry(index).or_insert_with(|| LayoutDescriptor {
            axis,
            offset: index as f64 * item_extent,
            extent: item_extent,
        })
    }

    /// Returns the cached layout for `index`, if one has been computed.
    pub fn cached(&self, index: usize) -> Option<LayoutDescriptor> {
        self.entries.get(&index).copied()
    }

    /// Applies a new extent/axis pair, clearing every entry when either value
    /// actually changed.
    pub fn reconfigure(&mut self, item_extent: f64, axis: ScrollAxis) {
        if self.item_extent == item_extent && self.axis == axis {
            return;
        }
        wdebug!(
            entries = self.entries.len(),
            item_extent,
            ?axis,
            "LayoutCache: reset"
        );
        self.item_extent = item_extent;
        self.axis = axis;
        self.entries.clear();
    }
}
