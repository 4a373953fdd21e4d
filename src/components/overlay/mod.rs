//! Full-screen overlays driven by the overlay coordinator.
//!
//! Both components read [`OverlayState`](crate::models::OverlayState) and
//! render only when their variant is the current one, so at most one overlay
//! is on screen even if both slots are populated.
//!
//! - [`VideoOverlay`] - Embedded player for the selected gallery item
//! - [`DocumentOverlay`] - Resume viewer

mod document;
mod video;

pub use document::DocumentOverlay;
pub use video::VideoOverlay;
