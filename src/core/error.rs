//! Error types for the application.
//!
//! Overlay operations are total and have no error type. The only fallible
//! step is loading the embedded content document:
//!
//! - [`ContentError`] - content parsing and validation errors

use thiserror::Error;

use crate::utils::UrlValidationError;

/// Errors raised while loading the embedded site content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// The document is not valid TOML or does not match the content schema.
    #[error("content parse error: {0}")]
    Parse(String),
    /// The gallery has no entries.
    #[error("content has no projects")]
    EmptyGallery,
    /// Two records in the same section share an id.
    #[error("duplicate {section} id '{id}'")]
    DuplicateId { section: &'static str, id: String },
    /// A record field holds a URL that fails validation.
    #[error("{section} '{id}' has an invalid {field}: {source}")]
    InvalidUrl {
        section: &'static str,
        id: String,
        field: &'static str,
        source: UrlValidationError,
    },
}

impl From<toml::de::Error> for ContentError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
