//! Page footer with contact links.
//!
//! Mail, WhatsApp and social links leave the page directly; only the resume
//! button goes through the overlay coordinator.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{OWNER_LOCATION, OWNER_NAME, contact};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/footer.module.css");

/// Social profile entry. Entries without a URL render muted.
struct SocialLink {
    label: &'static str,
    url: Option<&'static str>,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: Some(contact::LINKEDIN),
    },
    SocialLink {
        label: "Behance",
        url: None,
    },
    SocialLink {
        label: "Instagram",
        url: None,
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let year = dom::current_year();

    view! {
        <footer class=css::footer>
            <div class=css::container>
                <h2 class=css::headline>
                    "Let’s create visuals " <br />
                    <span class=css::dim>"people remember."</span>
                </h2>

                <div class=css::actions>
                    <a href=format!("mailto:{}", contact::EMAIL) class=css::primary>
                        <Icon icon=ic::MAIL /> "EMAIL ME"
                    </a>
                    <a
                        href=contact::WHATSAPP
                        target="_blank"
                        rel="noopener noreferrer"
                        class=css::secondary
                    >
                        <Icon icon=ic::MESSAGE /> "WHATSAPP"
                    </a>
                    <button class=css::secondary on:click=move |_| ctx.overlays.open_document()>
                        <Icon icon=ic::FILE_TEXT /> "VIEW RESUME"
                    </button>
                </div>

                <div class=css::bottom>
                    <div class=css::location>
                        <span class=css::pin><Icon icon=ic::LOCATION /></span>
                        <span>{OWNER_LOCATION}</span>
                    </div>
                    <div class=css::social>
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| match link.url {
                                Some(url) => view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        {link.label}
                                    </a>
                                }
                                .into_any(),
                                None => view! { <span class=css::muted>{link.label}</span> }
                                    .into_any(),
                            })
                            .collect_view()}
                    </div>
                    <div class=css::copyright>{format!("© {} {}", year, OWNER_NAME)}</div>
                </div>
            </div>
        </footer>
    }
}
