//! Overlay display state types.

use crate::config::PORTRAIT_ITEMS;
use crate::models::DisplayItem;

/// The overlay currently dominating the screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    /// No overlay; the page is interactive.
    #[default]
    None,
    /// Video player for the selected gallery item.
    VideoShown(DisplayItem),
    /// Resume document viewer.
    DocumentShown,
}

impl OverlayState {
    /// Check if any overlay is shown.
    pub fn is_active(&self) -> bool {
        !matches!(self, OverlayState::None)
    }

    /// Get the selected item if the video overlay is shown.
    pub fn item(&self) -> Option<&DisplayItem> {
        match self {
            OverlayState::VideoShown(item) => Some(item),
            _ => None,
        }
    }

    /// Check if the document overlay is shown.
    pub fn is_document(&self) -> bool {
        matches!(self, OverlayState::DocumentShown)
    }
}

/// Player frame shape for the video overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AspectRatio {
    /// 16:9 landscape frame (default)
    #[default]
    Wide,
    /// 9:16 portrait frame
    Tall,
}

impl AspectRatio {
    /// Look up the frame shape for a gallery item.
    ///
    /// Static table keyed by item id (see `PORTRAIT_ITEMS`).
    pub fn for_item(id: &str) -> Self {
        if PORTRAIT_ITEMS.contains(&id) {
            AspectRatio::Tall
        } else {
            AspectRatio::Wide
        }
    }

    /// CSS `aspect-ratio` value.
    pub fn css(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "16 / 9",
            AspectRatio::Tall => "9 / 16",
        }
    }
}
