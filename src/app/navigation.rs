use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::{is_scrolled, Section};

/// Smooth-scrolls the page to a section anchor.
pub fn scroll_to(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section #{}", section.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Navigation(#[prop(into)] name: String) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/80 backdrop-blur-md border-b border-border"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <div class="font-heading font-bold text-xl">{name}</div>
                    <div class="hidden md:flex space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-foreground hover:text-accent transition-colors duration-200"
                                        on:click=move |_| scroll_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="glow-hover px-4 py-2 rounded-md border border-accent text-accent hover:bg-accent hover:text-accent-foreground"
                        on:click=move |_| scroll_to(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </nav>
    }
}
