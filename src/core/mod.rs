//! Core logic for the portfolio site.
//!
//! This module provides:
//! - [`OverlayCoordinator`] overlay display state and host resource pairing
//! - [`load_site_content`] embedded content parsing and validation

mod content;
pub mod error;
mod overlay;

pub use content::load_site_content;
pub use overlay::{OverlayCoordinator, OverlayHost};
