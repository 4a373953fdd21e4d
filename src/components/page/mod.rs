//! The single scroll page.
//!
//! Sections render in document order; both overlays are always mounted and
//! decide for themselves whether to show. While an overlay is up, the page
//! content underneath is made `inert` so focus cannot move behind it.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::navbar::Navbar;
use crate::components::overlay::{DocumentOverlay, VideoOverlay};
use crate::components::sections::{
    About, CaseStudies, Footer, Gallery, Hero, Journal, Services,
};
use crate::models::Section;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/page/page.module.css");

#[component]
pub fn Page() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let covered = Memo::new(move |_| ctx.overlays.state().is_active());

    // Sections only exist after mount, so a deep link like `#services`
    // has to be resolved by hand.
    Effect::new(move |_| {
        if let Some(section) = Section::from_hash(&dom::get_hash()) {
            dom::scroll_to_section(section);
        }
    });

    view! {
        <div class=css::page>
            <div inert=move || covered.get()>
                <Navbar />
                <main>
                    <Hero />
                    <Gallery />
                    <About />
                    <CaseStudies />
                    <Services />
                    <Journal />
                </main>
                <Footer />
            </div>

            <VideoOverlay />
            <DocumentOverlay />

            // Ambient glow behind all content
            <div class=css::ambient>
                <div class=css::glowWarm />
                <div class=css::glowCool />
            </div>
        </div>
    }
}
