//! Services grid with a contact call-to-action card.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::contact;
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/sections/services.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

#[component]
pub fn Services() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let services = ctx.content.with_value(|c| c.services.clone());

    view! {
        <section id=Section::Services.id() class=format!("{} {}", shared::section, shared::sectionAlt)>
            <div class=shared::container>
                <div class=css::header>
                    <h2 class=shared::title>"What I Do"</h2>
                    <p class=shared::lead>
                        "Transforming ideas into cinematic motion reality using modern toolsets."
                    </p>
                </div>
                <div class=css::grid>
                    {services
                        .into_iter()
                        .map(|service| view! {
                            <div class=css::card>
                                <div class=css::icon>
                                    <Icon icon=ic::service_icon(service.icon) />
                                </div>
                                <h3 class=css::title>{service.title}</h3>
                                <p class=css::description>{service.description}</p>
                            </div>
                        })
                        .collect_view()}

                    <div class=css::ctaCard>
                        <div class=css::ctaTitle>"Have a project " <br /> "in mind?"</div>
                        <a href=format!("mailto:{}", contact::EMAIL) class=css::ctaLink>
                            "Let's talk"
                            <span class=css::ctaArrow><Icon icon=ic::CHEVRON_RIGHT /></span>
                        </a>
                        <div class=css::ctaGlow />
                    </div>
                </div>
            </div>
        </section>
    }
}
