//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::core::OverlayHost;
use crate::models::Section;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the `<body>` element.
#[inline]
pub fn body() -> Option<web_sys::HtmlElement> {
    window()?.document()?.body()
}

/// Current vertical scroll offset in pixels (0 if unavailable).
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Smooth-scroll the page so `section` is aligned to the top.
///
/// Returns `true` if the section element was found.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Toggle `overflow: hidden` on `<body>`.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

// =============================================================================
// Browser Overlay Host
// =============================================================================

/// [`OverlayHost`] backed by the browser document.
///
/// Scroll suspension toggles `overflow` on `<body>`. The dismiss
/// subscription is a window `keydown` listener mapping Escape to the bound
/// callback.
#[derive(Default)]
pub struct BrowserHost {
    on_dismiss: Option<Callback<()>>,
    listener: Option<WindowListenerHandle>,
}

impl BrowserHost {
    /// Set the callback invoked when Escape is pressed while subscribed.
    pub fn bind(&mut self, on_dismiss: Callback<()>) {
        self.on_dismiss = Some(on_dismiss);
    }
}

impl OverlayHost for BrowserHost {
    fn suspend_scroll(&mut self) {
        set_body_scroll_locked(true);
    }

    fn resume_scroll(&mut self) {
        set_body_scroll_locked(false);
    }

    fn subscribe_dismiss(&mut self) {
        let Some(on_dismiss) = self.on_dismiss else {
            return;
        };
        self.listener = Some(window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_dismiss.run(());
            }
        }));
    }

    fn unsubscribe_dismiss(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.remove();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wasm_bindgen_test::*;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Dispatch a `keydown` for `key` on the window.
    pub(crate) fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch keydown");
    }

    fn counting_host() -> (BrowserHost, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut host = BrowserHost::default();
        host.bind(Callback::new(move |_: ()| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        (host, count)
    }

    fn body_overflow() -> String {
        body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_scroll_lock_toggles_body_overflow() {
        set_body_scroll_locked(true);
        assert_eq!(body_overflow(), "hidden");
        set_body_scroll_locked(false);
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn test_browser_host_scroll() {
        let mut host = BrowserHost::default();
        host.suspend_scroll();
        assert_eq!(body_overflow(), "hidden");
        host.resume_scroll();
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn test_unbound_host_ignores_subscribe() {
        let mut host = BrowserHost::default();
        host.subscribe_dismiss();
        assert!(host.listener.is_none());
        host.unsubscribe_dismiss();
    }

    #[wasm_bindgen_test]
    fn test_escape_runs_bound_callback() {
        let (mut host, count) = counting_host();
        host.subscribe_dismiss();

        press("Escape");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Other keys are ignored
        press("Enter");
        press("a");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        host.unsubscribe_dismiss();
        press("Escape");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    fn test_escape_before_subscribe_is_ignored() {
        let (mut host, count) = counting_host();
        press("Escape");
        assert_eq!(count.load(Ordering::SeqCst), 0);

        host.subscribe_dismiss();
        press("Escape");
        host.unsubscribe_dismiss();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    fn test_missing_section_not_scrolled() {
        assert!(!scroll_to_section(Section::Services));
    }

    #[wasm_bindgen_test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
