use windowlist::ScrollAxis;

/// Identity of a scroll container, used to reject bubbled events from nested
/// scrollers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

/// A raw scroll signal as delivered by the host environment.
///
/// Deliberately carries no offset: the tracker reads the container's
/// *current* scroll position at handling time, so rapid-fire events coalesce
/// naturally (intermediate positions are skipped without correctness loss).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEvent {
    /// The container the event originated from (`event.target`).
    pub source: ContainerId,
}

/// The injected geometry capability.
///
/// Implementations wrap a concrete container handle (a DOM node, a TUI pane,
/// a test double). Keeping all live-environment reads behind this trait is
/// what lets the window calculator and layout cache stay pure.
pub trait GeometryProvider {
    /// Identity of the tracked container, compared against
    /// [`ScrollEvent::source`].
    fn container_id(&self) -> ContainerId;

    /// Whether the container is attached to the host environment. Geometry
    /// reads are unreliable before attachment.
    fn is_attached(&self) -> bool;

    /// Live client extent of the container along `axis` (height for
    /// vertical, width for horizontal). Expected to be 0 when detached.
    fn viewport_extent(&self, axis: ScrollAxis) -> f64;

    /// Live scroll position of the container along `axis`.
    fn scroll_offset(&self, axis: ScrollAxis) -> f64;

    /// Imperatively scrolls the container to `offset` along `axis`.
    fn scroll_to(&mut self, axis: ScrollAxis, offset: f64);

    /// Subscribes to the container's scroll signal and the global resize
    /// signal.
    fn attach_listeners(&mut self);

    /// Removes every subscription installed by [`Self::attach_listeners`].
    fn detach_listeners(&mut self);
}
