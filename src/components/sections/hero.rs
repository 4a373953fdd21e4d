//! Hero banner.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::reveal::Reveal;
use crate::config::{HERO_BG_IMAGE, OWNER_CITY, YEARS_EXPERIENCE};
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/sections/hero.module.css");

/// Full-height banner with headline, intro, and the `VIEW RESUME` CTA.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <section id=Section::Home.id() class=css::hero>
            <div
                class=css::background
                style=format!("background-image: url('{}')", HERO_BG_IMAGE)
            />
            <div class=css::shade />

            <div class=css::container>
                <Reveal class=css::content>
                    <div class=css::location>
                        <Icon icon=ic::LOCATION />
                        <span>{OWNER_CITY}</span>
                    </div>

                    <h1 class=css::headline>
                        "AI Motion Graphics " <br />
                        <span class=css::soft>"Designer"</span> " & Visual " <br />
                        <span class=css::accent>"Storyteller"</span>
                    </h1>

                    <div class=css::columns>
                        <p class=css::intro>
                            {format!(
                                "Senior Motion Graphics Designer with {}+ years of experience \
                                 blending cinematic motion design with Generative AI to create \
                                 high-impact commercials, event visuals, and brand stories.",
                                YEARS_EXPERIENCE,
                            )}
                        </p>
                        <div class=css::aside>
                            <p class=css::quote>
                                "\"I merge traditional animation principles with cutting-edge AI \
                                 workflows to deliver faster, smarter, and more powerful visual \
                                 narratives for brands and live experiences.\""
                            </p>
                            <div>
                                <button
                                    class=css::cta
                                    on:click=move |_| ctx.overlays.open_document()
                                >
                                    <span>"VIEW RESUME"</span>
                                    <span class=css::ctaIcon><Icon icon=ic::FILE_TEXT /></span>
                                </button>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
