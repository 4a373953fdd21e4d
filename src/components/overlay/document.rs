//! Resume viewer overlay.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{OWNER_CITY, OWNER_NAME, OWNER_ROLE, RESUME_EMBED, RESUME_LINK};

stylance::import_crate_style!(css, "src/components/overlay/overlay.module.css");

/// Renders the resume viewer while the current overlay is `DocumentShown`.
#[component]
pub fn DocumentOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let shown = Memo::new(move |_| ctx.overlays.state().is_document());

    view! {
        <Show when=move || shown.get()>
            <div class=css::document>
                <header class=css::documentHeader>
                    <div class=css::documentTitle>
                        <span class=css::documentIcon><Icon icon=ic::FILE_TEXT /></span>
                        <span>"Curriculum Vitae"</span>
                    </div>
                    <div class=css::documentActions>
                        <a
                            href=RESUME_LINK
                            target="_blank"
                            rel="noopener noreferrer"
                            class=css::download
                        >
                            <Icon icon=ic::DOWNLOAD />
                            "Download PDF"
                        </a>
                        <button
                            class=css::documentClose
                            on:click=move |_| ctx.overlays.close_document()
                            aria-label="Close resume"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>

                <div class=css::documentBody>
                    <div class=css::documentFrame>
                        <iframe
                            src=RESUME_EMBED
                            allow="autoplay"
                            title=format!("{} Resume", OWNER_NAME)
                        />
                    </div>
                </div>

                <footer class=css::documentFooter>
                    {format!("{} • {} • {}", OWNER_NAME, OWNER_ROLE, OWNER_CITY)}
                </footer>
            </div>
        </Show>
    }
}
