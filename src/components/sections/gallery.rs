//! Selected work gallery.
//!
//! Cards with an external link and no media open it in a new tab. Every
//! other card opens the video overlay, which shows a placeholder panel for
//! projects whose footage is not published yet.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::config::REVEAL_STAGGER_MS;
use crate::models::{DisplayItem, Section, image_fallback};

stylance::import_crate_style!(css, "src/components/sections/gallery.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

/// What clicking a gallery card does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CardAction {
    /// Open the video overlay and play the item.
    Play,
    /// Open the video overlay on its "coming soon" panel.
    Preview,
    /// Open an external page in a new tab.
    External(String),
}

impl CardAction {
    pub(crate) fn for_item(item: &DisplayItem) -> Self {
        if item.has_media() {
            return CardAction::Play;
        }
        match &item.link {
            Some(link) => CardAction::External(link.clone()),
            None => CardAction::Preview,
        }
    }
}

/// Keys that activate a focused `role="button"` card.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Gallery section listing every project card.
#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|c| c.projects.clone());

    view! {
        <section id=Section::Work.id() class=format!("{} {}", shared::section, shared::sectionAlt)>
            <div class=shared::container>
                <div class=shared::header>
                    <span class=shared::eyebrow>"Portfolio"</span>
                    <h2 class=shared::title>"Selected Work"</h2>
                    <p class=shared::lead>
                        "Explore a curated selection of motion projects where cinematic \
                         design meets algorithmic intelligence."
                    </p>
                </div>
                <div class=css::grid>
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| view! {
                            <Reveal delay_ms={index as u32 * REVEAL_STAGGER_MS}>
                                <GalleryCard item=item />
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A single project card.
///
/// Thumbnails fall back to a seeded placeholder image once if they fail to
/// load.
#[component]
fn GalleryCard(item: DisplayItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let action = CardAction::for_item(&item);
    let fallback = item.fallback_thumbnail();
    let (thumbnail, set_thumbnail) = signal(item.thumbnail.clone());

    let badge = match action {
        CardAction::Play => view! {
            <div class=css::overlayPlay>
                <div class=css::badge><Icon icon=ic::PLAY /></div>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class=css::overlayLink>
                <div class=css::badge><Icon icon=ic::ARROW_UP_RIGHT /></div>
            </div>
        }
        .into_any(),
    };

    let body = view! {
        <div class=css::frame>
            <img
                src=thumbnail
                alt=item.title.clone()
                class=css::thumbnail
                on:error=move |_| {
                    if let Some(next) = image_fallback(&thumbnail.get_untracked(), &fallback) {
                        #[cfg(target_arch = "wasm32")]
                        web_sys::console::warn_1(&format!("thumbnail failed, using {}", next).into());
                        set_thumbnail.set(next);
                    }
                }
            />
            {badge}
        </div>
        <h3 class=css::title>{item.title.clone()}</h3>
        <p class=css::category>{item.category.clone()}</p>
    };

    match action {
        CardAction::Play | CardAction::Preview => {
            let selected = StoredValue::new(item.clone());
            view! {
                <div
                    class=css::card
                    role="button"
                    tabindex="0"
                    on:click=move |_| ctx.overlays.select_item(selected.get_value())
                    on:keydown=move |ev| {
                        if is_activation_key(&ev.key()) {
                            ev.prevent_default();
                            ctx.overlays.select_item(selected.get_value());
                        }
                    }
                >
                    {body}
                </div>
            }
            .into_any()
        }
        CardAction::External(link) => view! {
            <a class=css::card href=link target="_blank" rel="noopener noreferrer">
                {body}
            </a>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::load_site_content;
    use crate::models::content::item;

    #[test]
    fn test_card_action_with_media() {
        let mut project = item("sony-bravia", Some("https://streamable.com/e/3s5t42"));
        assert_eq!(CardAction::for_item(&project), CardAction::Play);

        // Media wins over an external link
        project.link = Some("https://vimeo.com/1".to_string());
        assert_eq!(CardAction::for_item(&project), CardAction::Play);
    }

    #[test]
    fn test_card_action_external_link() {
        let mut project = item("huddle-global", None);
        project.link = Some("https://vimeo.com/1".to_string());
        assert_eq!(
            CardAction::for_item(&project),
            CardAction::External("https://vimeo.com/1".to_string())
        );
    }

    #[test]
    fn test_card_action_preview() {
        assert_eq!(CardAction::for_item(&item("led-visuals", None)), CardAction::Preview);
    }

    #[test]
    fn test_embedded_cards_all_open_something() {
        let content = load_site_content().expect("embedded content must be valid");
        let actions: Vec<_> = content
            .projects
            .iter()
            .map(|p| (p.id.as_str(), CardAction::for_item(p)))
            .collect();
        assert_eq!(
            actions,
            [
                ("sony-bravia", CardAction::Play),
                ("huddle-global", CardAction::Preview),
                ("oxygen-digital", CardAction::Preview),
                ("landmark-builders", CardAction::Preview),
                ("led-visuals", CardAction::Preview),
                ("ai-experimental", CardAction::Preview),
            ]
        );
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("Tab"));
    }
}
