//! Journal teasers.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::reveal::Reveal;
use crate::config::REVEAL_STAGGER_MS;

stylance::import_crate_style!(css, "src/components/sections/journal.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

/// Blog post cards. Renders nothing when there are no posts.
#[component]
pub fn Journal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let posts = ctx.content.with_value(|c| c.posts.clone());

    (!posts.is_empty()).then(|| view! {
        <section id="journal" class=format!("{} {}", shared::section, shared::sectionAlt)>
            <div class=shared::container>
                <div class=shared::header>
                    <span class=shared::eyebrow>"Journal"</span>
                    <h2 class=shared::title>"Notes & Process"</h2>
                </div>
                <div class=css::grid>
                    {posts
                        .into_iter()
                        .enumerate()
                        .map(|(index, post)| view! {
                            <Reveal delay_ms={index as u32 * REVEAL_STAGGER_MS}>
                                <article class=css::post>
                                    <time class=css::date>{post.date}</time>
                                    <h3 class=css::title>{post.title}</h3>
                                    <p class=css::excerpt>{post.excerpt}</p>
                                </article>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    })
}
