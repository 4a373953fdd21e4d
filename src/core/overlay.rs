//! Overlay coordinator.
//!
//! Owns the two overlay slots of the page (selected video item, document
//! viewer) and the host resources held while any overlay is open:
//!
//! - **Scroll suspension**: acquired when the first overlay opens, released
//!   when the last one closes.
//! - **Dismiss key subscription**: same lifetime; the host routes the key
//!   press back to [`OverlayCoordinator::dismiss`].
//!
//! The slots are independent: closing one never touches the other. When
//! both are populated the video overlay is the visible one.

use crate::models::{DisplayItem, OverlayState};

/// Host environment services needed while an overlay is open.
///
/// The coordinator pairs every `suspend_scroll` with exactly one
/// `resume_scroll`, and every `subscribe_dismiss` with exactly one
/// `unsubscribe_dismiss`.
pub trait OverlayHost {
    /// Prevent the underlying page from scrolling.
    fn suspend_scroll(&mut self);
    /// Restore page scrolling.
    fn resume_scroll(&mut self);
    /// Start routing the dismiss key to the coordinator.
    fn subscribe_dismiss(&mut self);
    /// Stop routing the dismiss key.
    fn unsubscribe_dismiss(&mut self);
}

/// Coordinates overlay display state and the host resources it holds.
pub struct OverlayCoordinator<H: OverlayHost> {
    item: Option<DisplayItem>,
    document_open: bool,
    /// Whether host resources are currently held.
    engaged: bool,
    host: H,
}

impl<H: OverlayHost> OverlayCoordinator<H> {
    /// Creates a coordinator with no overlay shown.
    pub fn new(host: H) -> Self {
        Self {
            item: None,
            document_open: false,
            engaged: false,
            host,
        }
    }

    /// Current overlay state.
    ///
    /// The video overlay takes precedence over the document overlay.
    pub fn state(&self) -> OverlayState {
        match (&self.item, self.document_open) {
            (Some(item), _) => OverlayState::VideoShown(item.clone()),
            (None, true) => OverlayState::DocumentShown,
            (None, false) => OverlayState::None,
        }
    }

    /// Check if any overlay slot is populated.
    pub fn is_active(&self) -> bool {
        self.item.is_some() || self.document_open
    }

    /// Check if the document slot is populated, even when hidden under video.
    #[cfg(test)]
    pub fn is_document_open(&self) -> bool {
        self.document_open
    }

    /// Record a gallery selection and show the video overlay.
    ///
    /// Selecting while another item is shown replaces it.
    pub fn select_item(&mut self, item: DisplayItem) {
        self.item = Some(item);
        self.sync();
    }

    /// Clear the video slot. No-op if nothing is selected.
    pub fn close_item(&mut self) {
        self.item = None;
        self.sync();
    }

    /// Show the document viewer. Idempotent.
    pub fn open_document(&mut self) {
        self.document_open = true;
        self.sync();
    }

    /// Clear the document slot. No-op if the viewer is closed.
    pub fn close_document(&mut self) {
        self.document_open = false;
        self.sync();
    }

    /// Close the visible overlay (dismiss key). No-op when nothing is shown.
    pub fn dismiss(&mut self) {
        if self.item.is_some() {
            self.close_item();
        } else if self.document_open {
            self.close_document();
        }
    }

    /// Close every overlay and release host resources.
    pub fn close_all(&mut self) {
        self.item = None;
        self.document_open = false;
        self.sync();
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Acquire or release host resources to match the slot state.
    fn sync(&mut self) {
        let active = self.is_active();
        if active == self.engaged {
            return;
        }
        self.engaged = active;
        if active {
            self.host.suspend_scroll();
            self.host.subscribe_dismiss();
        } else {
            self.host.unsubscribe_dismiss();
            self.host.resume_scroll();
        }
    }
}

impl<H: OverlayHost> Drop for OverlayCoordinator<H> {
    fn drop(&mut self) {
        self.close_all();
    }
}
