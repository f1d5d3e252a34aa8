use leptos::prelude::*;

use crate::proficiency::ProficiencyRating;

/// Retro "HP bar" for a skill rating. Fill colour and caption come from the
/// rating's tier; the fill animates in once per mount (see `.hp-fill` in the
/// stylesheet).
#[component]
pub fn ProficiencyBar(
    rating: ProficiencyRating,
    #[prop(into)] label: String,
    #[prop(optional_no_strip)] grade: Option<String>,
    #[prop(optional)] tools: Vec<String>,
    #[prop(optional_no_strip)] mastered_label: Option<String>,
) -> impl IntoView {
    let tier = rating.tier();
    let color = tier.color();
    let status = tier.status(mastered_label.as_deref());
    let has_tools = !tools.is_empty();
    let hovered = RwSignal::new(false);
    let title = label.clone();

    view! {
        <div class="w-full" data-tier=tier.caption().to_lowercase()>
            <div class="flex items-center justify-between mb-2">
                <span class="font-heading font-bold text-lg text-foreground">{label}</span>
                <span class="font-mono text-sm font-bold text-accent">
                    {grade
                        .map(|g| {
                            view! {
                                <span class="hp-grade mr-3 px-2 py-0.5 rounded-sm border border-accent/40">
                                    {g}
                                </span>
                            }
                        })}
                    {rating.hp_label()}
                </span>
            </div>
            <div
                class=if has_tools { "relative cursor-help" } else { "relative" }
                on:mouseenter=move |_| {
                    if has_tools {
                        hovered.set(true);
                    }
                }
                on:mouseleave=move |_| {
                    if has_tools {
                        hovered.set(false);
                    }
                }
            >
                <HoverDetailPanel visible=hovered title=title labels=tools />
                <div
                    class="hp-track h-8 rounded-sm overflow-hidden"
                    style=format!("border-color: {color};")
                >
                    <div
                        class="hp-fill h-full transition-all duration-300"
                        style=format!(
                            "--hp-fill: {}; background-color: {color}; box-shadow: 0 0 10px {color}80;",
                            rating.fill_width(),
                        )
                    ></div>
                </div>
            </div>
            <div class="flex justify-end mt-2">
                <span class="hp-status text-xs font-mono text-muted-foreground">{status}</span>
            </div>
        </div>
    }
}

/// Floating tag list anchored above its trigger. Visibility is owned by the
/// parent; hidden panels render nothing.
#[component]
pub fn HoverDetailPanel(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] title: String,
    labels: Vec<String>,
) -> impl IntoView {
    move || {
        visible.get().then(|| {
            let labels = labels.clone();
            view! {
                <div class="hover-panel absolute bottom-full left-0 right-0 mb-4 p-4 rounded-lg bg-card border border-accent/30 z-20">
                    <div class="absolute -bottom-2 left-6 w-0 h-0 border-l-4 border-r-4 border-t-4 border-l-transparent border-r-transparent border-t-accent/30"></div>
                    <h4 class="text-xs font-heading font-semibold text-accent mb-2 uppercase tracking-wider">
                        {format!("{title} Tools & Frameworks")}
                    </h4>
                    <div class="flex flex-wrap gap-2">
                        {labels
                            .into_iter()
                            .map(|tool| {
                                view! {
                                    <span class="tool-tag rounded-md bg-accent/10 text-accent border border-accent/30 text-xs px-2 py-1">
                                        {tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    }
}
