//! Case study breakdowns.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::reveal::Reveal;
use crate::models::{CaseStudy, image_fallback, placeholder_image};

stylance::import_crate_style!(css, "src/components/sections/case_studies.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

/// Section listing case studies. Renders nothing when there are none.
#[component]
pub fn CaseStudies() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let studies = ctx.content.with_value(|c| c.case_studies.clone());

    (!studies.is_empty()).then(|| view! {
        <section id="case-studies" class=shared::section>
            <div class=shared::container>
                <div class=shared::header>
                    <span class=shared::eyebrow>"Case Studies"</span>
                    <h2 class=shared::title>"Behind the Work"</h2>
                    <p class=shared::lead>
                        "From brief to impact: how each campaign was conceived, built, and delivered."
                    </p>
                </div>
                <div class=css::list>
                    {studies
                        .into_iter()
                        .map(|study| view! {
                            <Reveal>
                                <CaseStudyCard study=study />
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    })
}

#[component]
fn CaseStudyCard(study: CaseStudy) -> impl IntoView {
    let fallback = placeholder_image(&study.id);
    let (image, set_image) = signal(study.image.clone());
    let rows = study
        .rows()
        .map(|(label, text)| (label, text.to_string()));

    view! {
        <article class=css::card>
            <div class=css::media>
                <img
                    src=image
                    alt=study.title.clone()
                    on:error=move |_| {
                        if let Some(next) = image_fallback(&image.get_untracked(), &fallback) {
                            set_image.set(next);
                        }
                    }
                />
            </div>
            <div class=css::body>
                <h3 class=css::title>{study.title.clone()}</h3>
                <dl class=css::rows>
                    {rows
                        .into_iter()
                        .map(|(label, text)| view! {
                            <div class=css::row>
                                <dt>{label}</dt>
                                <dd>{text}</dd>
                            </div>
                        })
                        .collect_view()}
                </dl>
            </div>
        </article>
    }
}
