//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DisplayItem`], [`Highlight`], [`Service`], [`CaseStudy`], [`BlogPost`] - Static page content
//! - [`OverlayState`], [`AspectRatio`] - Overlay display state
//! - [`Section`] - Navbar scroll targets

pub(crate) mod content;
mod overlay;
mod section;

pub use content::{
    BlogPost, CaseStudy, DisplayItem, Highlight, Service, ServiceIcon, SiteContent,
    image_fallback, placeholder_image,
};
pub use overlay::{AspectRatio, OverlayState};
pub use section::Section;
