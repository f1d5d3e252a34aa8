use leptos::prelude::*;

use crate::content::{AiTool, Certification, Experience, Project};

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        technologies,
        github_url,
        live_url,
        image,
    } = project;

    view! {
        <div class="group glow-hover h-full rounded-lg bg-card/50 backdrop-blur-sm border border-border hover:border-accent transition-all duration-300">
            {image
                .map(|src| {
                    view! {
                        <div class="aspect-video overflow-hidden rounded-t-lg">
                            <img
                                src=src
                                alt=title.clone()
                                class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                            />
                        </div>
                    }
                })}
            <div class="p-6">
                <h3 class="font-heading text-xl font-semibold mb-2">{title.clone()}</h3>
                <p class="text-muted-foreground text-sm mb-4">{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <Badge label=tech /> })
                        .collect_view()}
                </div>
                <div class="flex gap-2">
                    {github_url
                        .map(|href| {
                            view! {
                                <LinkButton href=href>
                                    <i class="devicon-github-plain mr-2"></i>
                                    "Code"
                                </LinkButton>
                            }
                        })}
                    {live_url
                        .map(|href| {
                            view! {
                                <LinkButton href=href>
                                    <i class="extra-link mr-2"></i>
                                    "Live Demo"
                                </LinkButton>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-md bg-space-dark text-accent border border-accent/20 px-2.5 py-0.5 text-xs font-semibold">
            {label}
        </span>
    }
}

#[component]
fn LinkButton(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center px-3 py-1.5 text-sm rounded-md border border-accent/50 text-accent hover:bg-accent hover:text-accent-foreground transition-colors"
        >
            {children()}
        </a>
    }
}

#[component]
pub fn CertificationCard(certification: Certification) -> impl IntoView {
    let Certification {
        title,
        logo,
        verification_url,
    } = certification;

    view! {
        <a
            href=verification_url
            target="_blank"
            rel="noopener noreferrer"
            class="group relative flex flex-col items-center justify-center p-6 rounded-lg border border-border bg-card/50 backdrop-blur-sm transition-all duration-300 hover:border-accent hover:bg-card/80 hover:shadow-lg hover:shadow-accent/20 cursor-pointer"
        >
            <div class="flex items-center justify-center h-32 w-full mb-4">
                <img
                    src=logo
                    alt=title.clone()
                    class="max-h-32 max-w-24 object-contain transition-transform duration-300 group-hover:scale-110"
                />
            </div>
            <h3 class="text-center text-sm md:text-base font-heading font-semibold text-foreground mb-2">
                {title}
            </h3>
            <div class="absolute top-2 right-2 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                <i class="extra-link text-accent"></i>
            </div>
        </a>
    }
}

#[component]
pub fn AiToolCard(tool: AiTool) -> impl IntoView {
    view! {
        <div class="ai-tool-card h-full p-10 rounded-lg border border-accent/20 bg-card flex flex-col items-center justify-center text-center transition-all duration-300">
            <div class="mb-6 h-40 w-40 flex items-center justify-center">
                <img src=tool.logo alt=tool.name.clone() class="max-h-40 max-w-40 object-contain" />
            </div>
            <h3 class="font-heading font-semibold text-xl mb-3">{tool.name}</h3>
            <p class="text-sm text-muted-foreground">{tool.description}</p>
        </div>
    }
}

#[component]
pub fn ExperienceTimeline(entries: Vec<Experience>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {entries
                .into_iter()
                .map(|job| {
                    view! {
                        <div class="relative pl-6 border-l-2 border-accent pb-6">
                            <div class="absolute w-3 h-3 bg-accent rounded-full -left-[7px] top-1 mt-1"></div>
                            <h3 class="font-heading font-semibold text-lg">{job.role}</h3>
                            <p class="text-sm text-accent font-medium">{job.company}</p>
                            <p class="text-xs text-muted-foreground mb-2">
                                {format!("{} · {}", job.period, job.duration)}
                            </p>
                            <p class="text-sm text-muted-foreground">{job.description}</p>
                            <ul class="mt-2 list-disc list-inside text-xs text-muted-foreground space-y-1">
                                {job
                                    .highlights
                                    .into_iter()
                                    .map(|h| view! { <li>{h}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_project_card_optional_links() {
        let owner = Owner::new();
        owner.with(|| {
            let project = Project {
                title: "Suit Shop".to_string(),
                description: "Containers".to_string(),
                technologies: vec!["Docker".to_string(), "ECS".to_string()],
                github_url: Some("https://github.com/x/y".to_string()),
                live_url: None,
                image: None,
            };
            let html = view! { <ProjectCard project=project /> }.to_html();
            assert!(html.contains("https://github.com/x/y"));
            assert!(html.contains("Code"));
            assert!(!html.contains("Live Demo"));
            assert!(!html.contains("<img"));
            assert!(html.contains(">Docker</span>"));
            assert!(html.contains(">ECS</span>"));
        });
    }
}
