use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::background::Starfield;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        log::error!("404: no route for {}", location.pathname.get());
    });

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(resp) = use_context::<ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Lost in Space" />
        <div class="min-h-screen flex items-center justify-center">
            <Starfield />
            <div class="text-center relative z-10 max-w-2xl mx-auto px-6">
                <h1 class="mb-6 text-8xl font-heading font-bold text-accent">"404"</h1>
                <h2 class="mb-4 text-3xl font-heading font-semibold">"Lost in Space"</h2>
                <p class="mb-8 text-xl text-muted-foreground">
                    "This page seems to have drifted into the cosmic void. Let's navigate you back home."
                </p>
                <a
                    href="/"
                    class="glow-hover inline-block px-6 py-3 rounded-md bg-accent text-accent-foreground hover:bg-accent/90"
                >
                    "Return to Home"
                </a>
            </div>
        </div>
    }
}
