//! About section: portrait, bio, and highlight stats.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::{OWNER_CITY, OWNER_NAME, PROFILE_IMAGE, YEARS_EXPERIENCE};
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/sections/about.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let highlights = ctx.content.with_value(|c| c.highlights.clone());

    view! {
        <section id=Section::About.id() class=format!("{} {}", shared::section, css::about)>
            <div class=css::glow />
            <div class=shared::container>
                <div class=css::columns>
                    <Reveal from=RevealFrom::Left class=css::portraitWrap>
                        <div class=css::portrait>
                            <img src=PROFILE_IMAGE alt=format!("{} portrait", OWNER_NAME) />
                        </div>
                        <div class=css::experience>
                            <span class=css::experienceValue>{format!("{}+", YEARS_EXPERIENCE)}</span>
                            <span class=css::experienceLabel>"Years Expertise"</span>
                        </div>
                    </Reveal>

                    <Reveal from=RevealFrom::Right>
                        <h2 class=shared::title>"About Me"</h2>
                        <div class=css::bio>
                            <p>
                                "I’m " <strong>{OWNER_NAME}</strong>
                                ", a Senior Motion Graphics Designer and AI Visual Storyteller based in "
                                <strong>{OWNER_CITY}</strong> "."
                            </p>
                            <p>
                                {format!(
                                    "With over {} years of professional experience, I specialize in \
                                     creating visually striking motion graphics, commercials, and \
                                     immersive event visuals by merging traditional animation \
                                     techniques with Generative AI workflows.",
                                    YEARS_EXPERIENCE,
                                )}
                            </p>
                            <p>
                                "I’ve led motion initiatives at premier advertising agencies and \
                                 collaborated with major media houses, delivering work that has \
                                 reached millions of viewers globally, including a viral "
                                <span class=css::accent>"20M+ view"</span>
                                " campaign for Sony Bravia."
                            </p>
                        </div>

                        <div class=css::stats>
                            {highlights
                                .into_iter()
                                .map(|h| view! {
                                    <div class=css::stat>
                                        <div class=css::statValue>{h.stat}</div>
                                        <div class=css::statLabel>{h.label}</div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
