//! Fixed top navigation bar.
//!
//! Brand button, section links, and the resume entry point. Collapses into a
//! toggle menu below the desktop breakpoint.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DESKTOP_MEDIA_QUERY, NAVBAR_SCROLL_THRESHOLD, OWNER_INITIALS, OWNER_NAME};
use crate::models::Section;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Navigation bar component.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (>= 768px) | Inline section links and `RESUME` button |
/// | Mobile (< 768px) | Toggle button opening a dropdown menu |
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(dom::scroll_y() > NAVBAR_SCROLL_THRESHOLD);

    // Solid background once the page scrolls past the hero edge.
    // The navbar lives for the whole page, so the listener is never removed.
    let _ = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(dom::scroll_y() > NAVBAR_SCROLL_THRESHOLD);
    });

    // Close the mobile menu when the viewport grows to desktop width
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move || {
        if is_desktop.get() {
            set_menu_open.set(false);
        }
    });

    let go_to = move |section: Section| {
        dom::scroll_to_section(section);
        set_menu_open.set(false);
    };

    let open_resume = move |_: ev::MouseEvent| {
        set_menu_open.set(false);
        ctx.overlays.open_document();
    };

    let bar_class = move || {
        if scrolled.get() {
            format!("{} {}", css::nav, css::scrolled)
        } else {
            css::nav.to_string()
        }
    };

    view! {
        <nav class=bar_class>
            <div class=css::inner>
                <button class=css::brand on:click=move |_| go_to(Section::Home)>
                    <span class=css::badge>{OWNER_INITIALS}</span>
                    <span class=css::brandName>{OWNER_NAME.to_uppercase()}</span>
                </button>

                // Desktop links
                <div class=css::links>
                    {Section::MENU
                        .into_iter()
                        .map(|section| view! {
                            <button class=css::link on:click=move |_| go_to(section)>
                                {section.label()}
                            </button>
                        })
                        .collect_view()}
                    <button class=css::resumeButton on:click=open_resume>"RESUME"</button>
                </div>

                // Mobile toggle
                <button
                    class=css::toggle
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }
                    } else {
                        view! { <Icon icon=ic::MENU /> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class=css::mobileMenu>
                    {Section::MENU
                        .into_iter()
                        .map(|section| view! {
                            <button class=css::mobileLink on:click=move |_| go_to(section)>
                                {section.label()}
                            </button>
                        })
                        .collect_view()}
                    <button class=css::mobileResume on:click=open_resume>"OPEN RESUME"</button>
                </div>
            </Show>
        </nav>
    }
}
