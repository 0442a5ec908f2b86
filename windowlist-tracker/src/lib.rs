//! Viewport tracking for the `windowlist` crate.
//!
//! The `windowlist` engine is environment-agnostic and purely computational.
//! This crate bridges a concrete host environment to it:
//!
//! - [`GeometryProvider`] is the injected capability a host implements:
//!   live geometry reads, imperative scroll-to, and listener lifecycle.
//! - [`ViewportTracker`] owns the engine plus one provider, filters raw
//!   scroll signals (foreign targets, stale offsets), and keeps the engine's
//!   viewport extent in sync with the container.
//! - [`Debouncer`] coalesces rapid resize signals, tick-driven so the crate
//!   stays free of timers and async machinery.
//!
//! Listener lifecycle is scoped: `mount` attaches, and dropping the tracker
//! detaches on every teardown path.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod debounce;
mod geometry;
mod tracker;

#[cfg(test)]
mod tests;

pub use debounce::Debouncer;
pub use geometry::{ContainerId, GeometryProvider, ScrollEvent};
pub use tracker::{ScrollOutcome, ViewportTracker};
