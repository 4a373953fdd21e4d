//! UI components built with Leptos.
//!
//! - [`Page`] - The single scroll page (main entry point)
//! - [`navbar`] - Fixed navigation bar
//! - [`sections`] - Hero, gallery, about, case studies, services, journal, footer
//! - [`overlay`] - Video player and resume viewer overlays
//! - [`reveal`] - Scroll-triggered reveal wrapper
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod navbar;
pub mod overlay;
mod page;
pub mod reveal;
pub mod sections;

pub use page::Page;
