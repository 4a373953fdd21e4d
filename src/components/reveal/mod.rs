//! Scroll-triggered reveal wrapper.
//!
//! Children fade and slide into place the first time the wrapper enters the
//! viewport. Once revealed they stay revealed.

use leptos::prelude::*;
use leptos_use::use_element_visibility;

stylance::import_crate_style!(css, "src/components/reveal/reveal.module.css");

/// Direction the content slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
    /// Slide up from below (default)
    #[default]
    Below,
    /// Slide in from the left
    Left,
    /// Slide in from the right
    Right,
}

impl RevealFrom {
    fn class(&self) -> &'static str {
        match self {
            RevealFrom::Below => css::fromBelow,
            RevealFrom::Left => css::fromLeft,
            RevealFrom::Right => css::fromRight,
        }
    }
}

/// Wraps children in a block that animates in on first visibility.
///
/// # Props
/// - `from`: slide direction
/// - `delay_ms`: transition delay, used for staggered grids
/// - `class`: extra classes for the wrapper
#[component]
pub fn Reveal(
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<leptos::html::Div>::new();
    let visible = use_element_visibility(target);
    let revealed = RwSignal::new(false);

    Effect::new(move || {
        if visible.get() && !revealed.get_untracked() {
            revealed.set(true);
        }
    });

    let wrapper_class = move || {
        let state = if revealed.get() { css::shown } else { from.class() };
        format!("{} {} {}", css::reveal, state, class)
    };

    view! {
        <div
            node_ref=target
            class=wrapper_class
            style=format!("transition-delay: {}ms", delay_ms)
        >
            {children()}
        </div>
    }
}
