//! A headless windowing engine for fixed-extent virtual lists.
//!
//! Given a large logical item count, a fixed per-item extent, and a viewport,
//! this crate computes which subset of indices must be materialized and where
//! each one goes. It never touches a rendering environment:
//!
//! - [`compute_visible_range`] is the pure window calculator.
//! - [`LayoutCache`] memoizes per-index layout descriptors.
//! - [`ListWindow`] ties both to scroll/viewport state and drives a
//!   caller-supplied per-item callback.
//!
//! Environment wiring (scroll/resize listeners, live geometry reads) lives in
//! the `windowlist-tracker` crate; an adapter is expected to provide:
//! - viewport extent (height/width along the scroll axis)
//! - scroll offset
//! - an imperative scroll-to on the container
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod layout;
mod list;
mod options;
mod state;
mod types;
mod window;


pub use error::ConfigError;
pub use layout::LayoutCache;
pub use list::ListWindow;
pub use options::{InitialOffset, ListOptions, OnScrollCallback};
pub use state::{FrameState, ScrollState, ViewportState};
pub use types::{LayoutDescriptor, ScrollAxis, VisibleRange, WindowItem};
pub use window::compute_visible_range;
