//! Video player overlay.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{AspectRatio, DisplayItem};

stylance::import_crate_style!(css, "src/components/overlay/overlay.module.css");

/// Renders the player while the current overlay is `VideoShown`.
///
/// Backdrop click and the close button clear the video slot; Escape is
/// handled by the coordinator's dismiss subscription.
#[component]
pub fn VideoOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let item = Memo::new(move |_| ctx.overlays.state().item().cloned());
    let on_close = Callback::new(move |_: ()| ctx.overlays.close_item());

    move || {
        item.get()
            .map(|item| view! { <VideoPlayer item=item on_close=on_close /> })
    }
}

#[component]
fn VideoPlayer(item: DisplayItem, on_close: Callback<()>) -> impl IntoView {
    let ratio = AspectRatio::for_item(&item.id);
    let frame_class = match ratio {
        AspectRatio::Wide => format!("{} {}", css::frame, css::frameWide),
        AspectRatio::Tall => format!("{} {}", css::frame, css::frameTall),
    };

    let player = match item.media.clone() {
        Some(media) => view! {
            <iframe
                src=media
                allow="autoplay; fullscreen"
                allowfullscreen=true
                title=item.title.clone()
                class=css::player
            />
        }
        .into_any(),
        None => view! {
            <div class=css::unavailable>
                <img src=item.thumbnail.clone() alt=item.title.clone() />
                <div class=css::unavailableCaption>
                    <h3>{item.title.clone()}</h3>
                    <p>{item.category.clone()}</p>
                    <span>"Preview coming soon"</span>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=css::videoBackdrop on:click=move |_| on_close.run(())>
            <button
                class=css::videoClose
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    on_close.run(());
                }
                aria-label="Close player"
            >
                <Icon icon=ic::CLOSE />
            </button>

            <div
                class=frame_class
                style=format!("aspect-ratio: {}", ratio.css())
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {player}
            </div>
        </div>
    }
}
