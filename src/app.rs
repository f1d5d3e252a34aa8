mod background;
mod cards;
mod contact;
mod homepage;
mod navigation;
mod not_found;
mod proficiency;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use homepage::HomePage;
use not_found::NotFound;

pub use proficiency::{HoverDetailPanel, ProficiencyBar};
pub use reveal::{provide_reveal_controller, Reveal, RevealController};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site_name = content::portfolio()
        .map(|c| c.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />
        <Meta name="description" content="Cloud & AI engineering portfolio" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioRoute />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioRoute() -> impl IntoView {
    match content::portfolio() {
        Ok(content) => view! { <HomePage content=content /> }.into_any(),
        Err(e) => {
            log::error!("portfolio content unavailable: {e}");
            view! { <ContentUnavailable message=e.to_string() /> }.into_any()
        }
    }
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center px-6">
            <div class="max-w-xl text-center">
                <h1 class="text-3xl font-heading font-bold mb-4">"Content unavailable"</h1>
                <p class="text-muted-foreground font-mono text-sm">{message}</p>
            </div>
        </div>
    }
}
