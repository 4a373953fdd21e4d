//! Utility modules for DOM access and URL validation.
//!
//! Provides:
//! - [`dom`] - Browser helpers and the [`BrowserHost`](dom::BrowserHost) overlay host
//! - [`validate_external_url`] - External link domain whitelisting

pub mod dom;
mod url;

pub use url::{UrlValidationError, validate_external_url};
