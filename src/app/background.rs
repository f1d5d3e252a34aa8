use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_mouse, UseMouseReturn};

use crate::starfield::{self, DEFAULT_SEED, DEFAULT_STAR_COUNT};

const GLOW_RADIUS: f64 = 96.0;

/// Soft light that trails the pointer while it is over the page.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let visible = RwSignal::new(false);

    let _ = use_event_listener(use_document(), ev::mousemove, move |_| visible.set(true));
    let _ = use_event_listener(use_document(), ev::mouseleave, move |_| visible.set(false));

    view! {
        <div
            class=move || {
                if visible.get() {
                    "cursor-glow pointer-events-none fixed w-48 h-48 rounded-full transition-opacity duration-300 opacity-20"
                } else {
                    "cursor-glow pointer-events-none fixed w-48 h-48 rounded-full transition-opacity duration-300 opacity-0"
                }
            }
            style=move || {
                format!(
                    "left: {}px; top: {}px;",
                    x.get() - GLOW_RADIUS,
                    y.get() - GLOW_RADIUS,
                )
            }
        ></div>
    }
}

#[component]
pub fn Starfield() -> impl IntoView {
    let stars = starfield::generate(DEFAULT_SEED, DEFAULT_STAR_COUNT);
    view! {
        <div class="starfield fixed inset-0 pointer-events-none overflow-hidden" aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| view! { <span class="star" style=star.style()></span> })
                .collect_view()}
        </div>
    }
}
