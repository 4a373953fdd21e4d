//! Root application module.
//!
//! Contains the main App component, AppContext definition, OverlayContext,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Page;
use crate::core::{OverlayCoordinator, load_site_content};
use crate::models::{DisplayItem, OverlayState, SiteContent};
use crate::utils::dom::BrowserHost;

// ============================================================================
// OverlayContext
// ============================================================================

/// Reactive handle to the page's [`OverlayCoordinator`].
///
/// All overlay entry points (navbar, hero, gallery, footer) and both overlay
/// components go through this handle. Reading [`OverlayContext::state`]
/// inside a reactive scope subscribes to overlay changes.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal. The
/// coordinator is stored locally since the browser host holds a DOM
/// listener handle.
#[derive(Clone, Copy)]
pub struct OverlayContext {
    coordinator: RwSignal<OverlayCoordinator<BrowserHost>, LocalStorage>,
}

impl OverlayContext {
    /// Creates the coordinator and binds the Escape key to [`Self::dismiss`].
    pub fn new() -> Self {
        let coordinator = RwSignal::new_local(OverlayCoordinator::new(BrowserHost::default()));
        let ctx = Self { coordinator };

        let on_dismiss = Callback::new(move |_: ()| ctx.dismiss());
        coordinator.update_untracked(|c| c.host_mut().bind(on_dismiss));

        ctx
    }

    /// Current overlay state (tracked).
    pub fn state(&self) -> OverlayState {
        self.coordinator.with(|c| c.state())
    }

    pub fn select_item(&self, item: DisplayItem) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::debug_1(&format!("overlay: select {}", item.id).into());
        self.coordinator.update(|c| c.select_item(item));
    }

    pub fn close_item(&self) {
        self.coordinator.update(|c| c.close_item());
    }

    pub fn open_document(&self) {
        self.coordinator.update(|c| c.open_document());
    }

    pub fn close_document(&self) {
        self.coordinator.update(|c| c.close_document());
    }

    /// Close the visible overlay (Escape). No-op when nothing is shown.
    pub fn dismiss(&self) {
        if self.coordinator.with_untracked(|c| c.is_active()) {
            self.coordinator.update(|c| c.dismiss());
        }
    }
}

impl Default for OverlayContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// - **Overlays**: video player and resume viewer state
/// - **Content**: validated static site content
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Overlay coordinator handle.
    pub overlays: OverlayContext,

    /// Static site content, loaded once on start.
    pub content: StoredValue<SiteContent>,
}

impl AppContext {
    /// Creates a new application context around loaded content.
    pub fn new(content: SiteContent) -> Self {
        Self {
            overlays: OverlayContext::new(),
            content: StoredValue::new(content),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the embedded site content
/// - Creates and provides the global AppContext
/// - Wraps the page in an ErrorBoundary for content errors
#[component]
pub fn App() -> impl IntoView {
    let page = load_site_content()
        .inspect_err(|_e| {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::error_1(&format!("failed to load content: {}", _e).into());
        })
        .map(|content| {
            provide_context(AppContext::new(content));
            view! { <Page /> }
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #050505;
                    color: #e4e4e7;
                    font-family: 'Inter', sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ea580c; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a1a1aa; margin-bottom: 2rem;">
                            "The site content could not be loaded."
                        </p>
                        <ul style="
                            text-align: left;
                            background: #18181b;
                            padding: 1rem 1rem 1rem 2.5rem;
                            border-radius: 8px;
                            color: #f87171;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </div>
                </div>
            }
        >
            {page}
        </ErrorBoundary>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::utils::dom;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        dom::body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_video_and_resumes_scroll() {
        let owner = Owner::new();
        owner.with(|| {
            let overlays = OverlayContext::new();
            let sony = crate::models::content::item(
                "sony-bravia",
                Some("https://streamable.com/e/3s5t42"),
            );

            overlays.select_item(sony.clone());
            assert_eq!(overlays.state(), OverlayState::VideoShown(sony));
            assert_eq!(body_overflow(), "hidden");

            dom::tests::press("Escape");
            assert_eq!(overlays.state(), OverlayState::None);
            assert_eq!(body_overflow(), "");

            // Listener is gone once nothing is shown
            overlays.open_document();
            overlays.close_document();
            dom::tests::press("Escape");
            assert_eq!(overlays.state(), OverlayState::None);
        });
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_document() {
        let owner = Owner::new();
        owner.with(|| {
            let overlays = OverlayContext::new();
            overlays.open_document();
            assert_eq!(overlays.state(), OverlayState::DocumentShown);

            dom::tests::press("Escape");
            assert_eq!(overlays.state(), OverlayState::None);
            assert_eq!(body_overflow(), "");
        });
    }
}
